//! Game rules.
//!
//! Pure functions over a [`Board`](crate::Board). They know nothing about
//! turns or status so the state machine and the search can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{has_line, winning_line};

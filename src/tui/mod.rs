//! Terminal dashboard: the three views, the modal form and the delete
//! confirmation, drawn with ratatui and driven through [`Session`].
//!
//! [`Session`]: crate::ops::dispatch::Session

pub mod app;
pub mod input;
pub mod render;
pub mod theme;

pub use app::run;

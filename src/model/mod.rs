pub mod config;
pub mod project;
pub mod state;
pub mod task;

pub use config::*;
pub use project::*;
pub use state::*;
pub use task::*;

/// Return `value` unless it is missing or empty, in which case `fallback`.
pub fn text_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(s) if !s.is_empty() => s,
        _ => fallback,
    }
}

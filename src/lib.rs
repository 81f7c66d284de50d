pub mod api;
pub mod cli;
pub mod form;
pub mod io;
pub mod model;
pub mod ops;
pub mod render;
pub mod tui;
pub mod util;

//! Application module: the shell model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds prompt input, the
//! current notice and the help window flag.

mod model;

pub use model::*;

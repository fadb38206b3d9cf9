//! Application systems
//!
//! Window-side pieces kept out of main.rs for testability.

mod window;

pub use window::{format_title, TitlePresenter, WindowError, WindowSystem};

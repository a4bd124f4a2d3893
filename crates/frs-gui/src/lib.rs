//! Fracture Risk Studio GUI library.
//!
//! Exposes the application modules so integration tests can exercise the
//! presentation helpers. The binary entry point lives in `main.rs`.

pub mod app;
pub mod component;
pub mod message;
pub mod theme;
pub mod util;
pub mod view;

pub use app::App;
pub use message::Message;

//! Full-screen interactive interface

mod app;
mod rendering;

pub use app::{App, InputMode, Message, run_tui};

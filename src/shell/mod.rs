//! Shell module: window bootstrap and the application event loop.
//!
//! The shell stands in for a game engine's application runner: it configures
//! the window surface, polls input on a dedicated thread, and drives a
//! fixed-cadence loop that reacts to resize notifications.

mod config;
mod input;
mod messages;
mod runner;

pub use config::WindowConfig;
pub use input::InputActor;
pub use messages::ShellEvent;
pub use runner::Shell;

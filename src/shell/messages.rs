//! Message types between the input actor and the shell loop.

/// Events sent from the input thread to the shell loop.
///
/// Game input is out of the shell's hands; the only keys it interprets are
/// the ones that end the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// The window surface was resized.
    Resize {
        /// New width in pixels.
        width: u16,
        /// New height in pixels.
        height: u16,
    },

    /// The user asked to quit (Esc or Ctrl+C).
    Quit,

    /// The input thread encountered an error.
    Error(String),

    /// The input thread is shutting down.
    Shutdown,
}

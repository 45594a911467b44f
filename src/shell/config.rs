//! Window configuration: the single source of truth for title and size.

use std::time::Duration;

/// Configuration for the shell's window surface and loop timing.
///
/// There is exactly one place the window title and launch size are defined:
/// [`WindowConfig::default`]. Anything that needs them takes a `WindowConfig`.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    /// Window title.
    pub title: &'static str,
    /// Launch width in pixels.
    pub width: u16,
    /// Launch height in pixels.
    pub height: u16,
    /// Frame tick interval for the run loop.
    pub tick_interval: Duration,
    /// Input poll timeout for the input actor.
    pub input_poll_timeout: Duration,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tetris Scala",
            width: 320,
            height: 320,
            tick_interval: Duration::from_millis(16),
            input_poll_timeout: Duration::from_millis(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_is_square() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Tetris Scala");
        assert_eq!((config.width, config.height), (320, 320));
    }
}

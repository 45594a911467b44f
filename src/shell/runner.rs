//! Shell: terminal bootstrap and the application event loop.
//!
//! The shell owns the terminal surface and the input actor. It does not know
//! anything about game rules or drawing; its loop keeps an [`Overlay`] layout
//! consistent with the window and ends when the user quits.

use super::config::WindowConfig;
use super::input::InputActor;
use super::messages::ShellEvent;
use crate::layout::Overlay;
use crossbeam_channel::{bounded, select, tick, Receiver};
use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetSize, SetTitle},
};
use std::io;

/// The windowed application shell.
pub struct Shell {
    /// Configuration.
    config: WindowConfig,
    /// Shell event receiver.
    events_rx: Receiver<ShellEvent>,
    /// Input actor handle.
    input_actor: Option<InputActor>,
}

impl Shell {
    /// Create a shell with the default window configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails (raw mode, alternate screen,
    /// etc.).
    pub fn new() -> io::Result<Self> {
        Self::with_config(WindowConfig::default())
    }

    /// Create a shell with a custom window configuration.
    ///
    /// Enters raw mode and the alternate screen, applies the configured title
    /// and size, and spawns the input actor.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails.
    pub fn with_config(config: WindowConfig) -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            cursor::Hide,
            SetTitle(config.title),
            SetSize(config.width, config.height),
        )?;

        let (events_tx, events_rx) = bounded::<ShellEvent>(64);
        let input_actor = InputActor::spawn(events_tx, config.input_poll_timeout);

        Ok(Self {
            config,
            events_rx,
            input_actor: Some(input_actor),
        })
    }

    /// Get the window configuration.
    pub const fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Run the event loop until the user quits.
    ///
    /// Window resize notifications are forwarded to the overlay so its
    /// sections stay proportional to the surface; input errors are logged and
    /// the loop carries on.
    pub fn run(&mut self, overlay: &mut Overlay) {
        let frames = tick(self.config.tick_interval);

        loop {
            select! {
                recv(self.events_rx) -> event => match event {
                    Ok(ShellEvent::Resize { width, height }) => overlay.resize(width, height),
                    Ok(ShellEvent::Quit | ShellEvent::Shutdown) => {
                        log::info!("shutting down");
                        break;
                    }
                    Ok(ShellEvent::Error(message)) => log::error!("input error: {message}"),
                    Err(_) => break,
                },
                recv(frames) -> _ => {
                    // Game state and drawing would advance here; the shell
                    // itself only keeps the layout current.
                }
            }
        }
    }
}

impl Drop for Shell {
    fn drop(&mut self) {
        if let Some(actor) = self.input_actor.take() {
            actor.join();
        }

        // Restore terminal state
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

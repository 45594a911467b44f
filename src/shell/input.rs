//! Input actor: dedicated thread for polling terminal events.
//!
//! Runs crossterm's event polling off the main thread so the shell loop never
//! blocks on the terminal. Only resize notifications and quit chords are
//! forwarded; everything else is dropped here.

use super::messages::ShellEvent;
use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Input actor that polls terminal events.
pub struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// `sender` carries events to the shell loop; `poll_timeout` bounds how
    /// long the thread waits for an event before checking for shutdown.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the input thread.
    pub fn spawn(sender: Sender<ShellEvent>, poll_timeout: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("blockdrop-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, poll_timeout);
            })
            .expect("Failed to spawn input thread");

        Self {
            handle: Some(handle),
            shutdown,
        }
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the input thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main input polling loop.
    fn run_loop(sender: &Sender<ShellEvent>, shutdown: &Arc<AtomicBool>, poll_timeout: Duration) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                let _ = sender.send(ShellEvent::Shutdown);
                break;
            }

            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if let Some(shell_event) = Self::convert_event(&event) {
                            if sender.send(shell_event).is_err() {
                                // Receiver dropped, exit
                                break;
                            }
                        }
                    }
                    Err(e) => {
                        let _ = sender.send(ShellEvent::Error(e.to_string()));
                    }
                },
                Ok(false) => {
                    // No event, continue loop (will check shutdown)
                }
                Err(e) => {
                    let _ = sender.send(ShellEvent::Error(e.to_string()));
                }
            }
        }
    }

    /// Convert a crossterm event to a `ShellEvent`, dropping what the shell
    /// has no use for.
    fn convert_event(event: &Event) -> Option<ShellEvent> {
        match event {
            Event::Resize(width, height) => Some(ShellEvent::Resize {
                width: *width,
                height: *height,
            }),

            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Esc => Some(ShellEvent::Quit),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(ShellEvent::Quit)
                }
                _ => None,
            },

            _ => None,
        }
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn test_resize_events_forwarded() {
        let event = Event::Resize(640, 480);
        assert_eq!(
            InputActor::convert_event(&event),
            Some(ShellEvent::Resize {
                width: 640,
                height: 480
            })
        );
    }

    #[test]
    fn test_quit_chords() {
        let esc = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(InputActor::convert_event(&esc), Some(ShellEvent::Quit));

        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(InputActor::convert_event(&ctrl_c), Some(ShellEvent::Quit));
    }

    #[test]
    fn test_other_keys_dropped() {
        let key = Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        assert_eq!(InputActor::convert_event(&key), None);
    }
}

//! Signal handling for clean shutdown.
//!
//! A dedicated thread blocks on the registered signals and forwards a
//! shutdown message over an mpsc channel. The monitor loop sleeps on that
//! channel, so SIGINT/SIGTERM interrupt the 60-second wait promptly instead
//! of being noticed one tick later.

use anyhow::{Context, Result};
use signal_hook::{
    consts::signal::{SIGHUP, SIGINT, SIGTERM},
    iterator::Signals,
};
use std::{
    sync::Arc,
    sync::atomic::{AtomicBool, Ordering},
    sync::mpsc,
    thread,
};

/// Messages delivered to the monitor loop from the signal thread.
#[derive(Debug, Clone, Copy)]
pub enum SignalMessage {
    /// Shutdown signal (SIGTERM, SIGINT, SIGHUP)
    Shutdown,
}

/// Signal handling state shared between threads.
pub struct SignalState {
    /// Atomic flag indicating if the application should keep running
    pub running: Arc<AtomicBool>,
    /// Channel receiver for signal messages
    pub signal_receiver: mpsc::Receiver<SignalMessage>,
}

/// Register signal handlers and spawn the forwarding thread.
pub fn setup_signal_handler(debug_enabled: bool) -> Result<SignalState> {
    let running = Arc::new(AtomicBool::new(true));
    let (sender, receiver) = mpsc::channel();

    let mut signals =
        Signals::new([SIGINT, SIGTERM, SIGHUP]).context("failed to register signal handlers")?;

    let thread_running = Arc::clone(&running);
    thread::spawn(move || {
        for signal in signals.forever() {
            if debug_enabled {
                log_pipe!();
                log_debug!("Received signal {signal}, shutting down");
            }
            thread_running.store(false, Ordering::SeqCst);
            if sender.send(SignalMessage::Shutdown).is_err() {
                break;
            }
        }
    });

    Ok(SignalState {
        running,
        signal_receiver: receiver,
    })
}

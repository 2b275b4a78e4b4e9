//! Blocking wait for the user's interrupt.
//!
//! Waiting is split in two: `arm` installs the listener, `wait` blocks on it.
//! An interrupt that arrives between the two is kept, not lost.

use crate::errors::{AppError, AppResult};

pub trait StopSignal {
    /// Start listening. Must be called before the user is told how to stop.
    fn arm(&self) -> AppResult<Box<dyn ArmedSignal>>;
}

pub trait ArmedSignal {
    /// Block until the session should stop.
    fn wait(self: Box<Self>) -> AppResult<()>;
}

/// Waits for Ctrl-C. Installing the handler replaces the default SIGINT
/// behaviour, so the caller gets to close the interval before exiting.
pub struct CtrlC;

struct ArmedCtrlC {
    runtime: tokio::runtime::Runtime,
    #[cfg(unix)]
    listener: tokio::signal::unix::Signal,
    #[cfg(windows)]
    listener: tokio::signal::windows::CtrlC,
}

impl StopSignal for CtrlC {
    fn arm(&self) -> AppResult<Box<dyn ArmedSignal>> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        // the handler is registered here, not on first poll
        let listener = {
            let _guard = runtime.enter();
            #[cfg(unix)]
            let listener =
                tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt());
            #[cfg(windows)]
            let listener = tokio::signal::windows::ctrl_c();
            listener.map_err(|e| AppError::Signal(e.to_string()))?
        };

        Ok(Box::new(ArmedCtrlC { runtime, listener }))
    }
}

impl ArmedSignal for ArmedCtrlC {
    fn wait(self: Box<Self>) -> AppResult<()> {
        let ArmedCtrlC {
            runtime,
            mut listener,
        } = *self;

        runtime
            .block_on(listener.recv())
            .ok_or_else(|| AppError::Signal("interrupt listener closed".into()))
    }
}

/// Returns immediately; used when the stop is triggered by the caller.
pub struct Immediate;

impl StopSignal for Immediate {
    fn arm(&self) -> AppResult<Box<dyn ArmedSignal>> {
        Ok(Box::new(Immediate))
    }
}

impl ArmedSignal for Immediate {
    fn wait(self: Box<Self>) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::process::Command;

    #[test]
    fn interrupt_sent_after_arming_is_delivered_to_wait() {
        let armed = CtrlC.arm().unwrap();

        // raise SIGINT against ourselves before anyone waits
        let sent = Command::new("kill")
            .args(["-INT", &std::process::id().to_string()])
            .status()
            .unwrap();
        assert!(sent.success());

        armed.wait().unwrap();
    }
}

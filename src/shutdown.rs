use crate::errors::MockServerError;

/// Self-termination seam so the restart handler can be exercised in tests
/// without taking the test runner down with it.
pub trait Shutdown: Send + Sync {
    fn terminate(&self) -> Result<(), MockServerError>;
}

pub struct ProcessGroupShutdown;

impl ProcessGroupShutdown {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessGroupShutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Shutdown for ProcessGroupShutdown {
    fn terminate(&self) -> Result<(), MockServerError> {
        // pid 0 targets the caller's entire process group
        let rc = unsafe { libc::kill(0, libc::SIGTERM) };
        if rc == 0 {
            Ok(())
        } else {
            Err(MockServerError::SignalError(
                std::io::Error::last_os_error().to_string(),
            ))
        }
    }
}

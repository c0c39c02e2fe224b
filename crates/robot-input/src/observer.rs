//! Execution observers
//!
//! Commands report what they did through an [`ExecutionObserver`]. Observers
//! are for reporting only; execution never depends on them.

use tracing::{info, warn};

/// Sink for execution reports
pub trait ExecutionObserver {
    /// A command finished; `description` says what it did
    fn executed(&mut self, index: usize, description: &str);

    /// A command failed without stopping the script
    fn failed(&mut self, index: usize, message: &str);
}

impl<O: ExecutionObserver + ?Sized> ExecutionObserver for &mut O {
    fn executed(&mut self, index: usize, description: &str) {
        (**self).executed(index, description)
    }

    fn failed(&mut self, index: usize, message: &str) {
        (**self).failed(index, message)
    }
}

/// Observer that emits reports as tracing events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ExecutionObserver for TracingObserver {
    fn executed(&mut self, index: usize, description: &str) {
        info!(step = index, "{}", description);
    }

    fn failed(&mut self, index: usize, message: &str) {
        warn!(step = index, "{}", message);
    }
}

/// Observer that discards every report
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl ExecutionObserver for NullObserver {
    fn executed(&mut self, _index: usize, _description: &str) {}

    fn failed(&mut self, _index: usize, _message: &str) {}
}

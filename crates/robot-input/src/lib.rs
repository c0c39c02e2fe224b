//! Input backends for robotscript
//!
//! The platform automation layer is an external collaborator; this crate
//! defines the interface scripts drive ([`InputBackend`]), the reporting sink
//! ([`ExecutionObserver`]), and two in-tree backends:
//!
//! - [`DryRunBackend`] logs input operations and spawns processes for real
//! - [`RecordingBackend`] records every call for assertions

mod backend;
mod dry_run;
mod observer;
mod recording;

pub use backend::{spawn_detached, InputBackend};
pub use dry_run::DryRunBackend;
pub use observer::{ExecutionObserver, NullObserver, TracingObserver};
pub use recording::{BackendCall, RecordingBackend, RecordingObserver, Report};

//! Script executor
//!
//! Runs a script's commands one at a time, in document order, against an
//! input backend. Execution never stops early: failures are reported to the
//! observer and collected in the [`ExecutionReport`].

use crate::error::{ScriptError, ScriptResult};
use crate::script::Script;
use robot_core::canonicalize;
use robot_input::{ExecutionObserver, InputBackend};
use std::str::FromStr;
use tracing::{debug, trace};

/// What to do with negative resolved mouse coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinatePolicy {
    /// Hand them to the backend unchanged
    #[default]
    PassThrough,
    /// Clamp each axis to zero
    Clamp,
}

impl CoordinatePolicy {
    pub fn apply(&self, x: i32, y: i32) -> (i32, i32) {
        match self {
            CoordinatePolicy::PassThrough => (x, y),
            CoordinatePolicy::Clamp => (x.max(0), y.max(0)),
        }
    }
}

impl FromStr for CoordinatePolicy {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonicalize(s).as_str() {
            "passthrough" | "pass-through" | "pass_through" => Ok(CoordinatePolicy::PassThrough),
            "clamp" => Ok(CoordinatePolicy::Clamp),
            _ => Err(ScriptError::InvalidSetting {
                setting: ExecutorConfig::COORDINATES_ENV.to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Executor settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecutorConfig {
    pub coordinate_policy: CoordinatePolicy,
}

impl ExecutorConfig {
    /// Environment variable selecting the coordinate policy
    pub const COORDINATES_ENV: &'static str = "ROBOTSCRIPT_COORDINATES";

    /// Read settings from the environment
    pub fn from_env() -> ScriptResult<Self> {
        Self::from_env_value(std::env::var(Self::COORDINATES_ENV).ok().as_deref())
    }

    /// Build settings from the raw value of [`Self::COORDINATES_ENV`]
    pub fn from_env_value(coordinates: Option<&str>) -> ScriptResult<Self> {
        let coordinate_policy = match coordinates {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => CoordinatePolicy::default(),
        };
        Ok(Self { coordinate_policy })
    }
}

/// A non-fatal command failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFailure {
    /// Position of the command in the script
    pub index: usize,
    pub message: String,
}

/// Outcome of running a script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionReport {
    /// Commands run, failed ones included
    pub executed: usize,
    pub failures: Vec<CommandFailure>,
}

impl ExecutionReport {
    /// Whether every command succeeded
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Sequential script runner
#[derive(Debug, Clone, Default)]
pub struct ScriptExecutor {
    config: ExecutorConfig,
}

impl ScriptExecutor {
    pub fn new(config: ExecutorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Run every command once, in order
    pub fn run<B, O>(&self, script: &Script, backend: &mut B, observer: &mut O) -> ExecutionReport
    where
        B: InputBackend + ?Sized,
        O: ExecutionObserver + ?Sized,
    {
        debug!(commands = script.len(), "Executing script");

        let mut report = ExecutionReport::default();
        for (index, command) in script.iter().enumerate() {
            trace!(step = index, %command, "Executing command");

            match command.execute(backend, self.config.coordinate_policy) {
                Ok(description) => observer.executed(index, &description),
                Err(e) => {
                    let message = e.to_string();
                    observer.failed(index, &message);
                    report.failures.push(CommandFailure { index, message });
                }
            }
            report.executed += 1;
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_apply() {
        assert_eq!(CoordinatePolicy::PassThrough.apply(-3, 4), (-3, 4));
        assert_eq!(CoordinatePolicy::Clamp.apply(-3, 4), (0, 4));
        assert_eq!(CoordinatePolicy::Clamp.apply(7, -1), (7, 0));
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("clamp".parse::<CoordinatePolicy>().unwrap(), CoordinatePolicy::Clamp);
        assert_eq!(
            " PassThrough ".parse::<CoordinatePolicy>().unwrap(),
            CoordinatePolicy::PassThrough
        );
        assert!(matches!(
            "wrap".parse::<CoordinatePolicy>(),
            Err(ScriptError::InvalidSetting { .. })
        ));
    }

    #[test]
    fn test_config_from_env_value() {
        assert_eq!(
            ExecutorConfig::from_env_value(None).unwrap(),
            ExecutorConfig::default()
        );
        assert_eq!(
            ExecutorConfig::from_env_value(Some("  ")).unwrap(),
            ExecutorConfig::default()
        );
        assert_eq!(
            ExecutorConfig::from_env_value(Some("CLAMP"))
                .unwrap()
                .coordinate_policy,
            CoordinatePolicy::Clamp
        );
        assert!(ExecutorConfig::from_env_value(Some("sideways")).is_err());
    }

    #[test]
    fn test_report() {
        let mut report = ExecutionReport::default();
        assert!(report.is_clean());
        report.failures.push(CommandFailure {
            index: 0,
            message: "boom".to_string(),
        });
        assert!(!report.is_clean());
    }
}

//! Local process runner using std::process.

use std::process::Command;

use tracing::debug;

use garden_core::{
    application::{
        ApplicationError,
        ports::{CommandSpec, ProcessRunner},
    },
    error::GardenResult,
};

/// Production process runner; spawns real child processes with inherited
/// stdio so interactive commands and their output behave as if run by hand.
#[derive(Debug, Clone, Copy)]
pub struct LocalProcessRunner;

impl LocalProcessRunner {
    /// Create a new local process runner.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner for LocalProcessRunner {
    fn run(&self, spec: &CommandSpec) -> GardenResult<()> {
        debug!(program = %spec.program, args = ?spec.args, "running external command");

        let status = Command::new(&spec.program)
            .args(&spec.args)
            .envs(spec.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .status()
            .map_err(|e| ApplicationError::ExternalCommand {
                command: spec.program.clone(),
                reason: format!("failed to launch: {e}"),
            })?;

        if !status.success() {
            let reason = match status.code() {
                Some(code) => format!("exited with status {code}"),
                None => "terminated by signal".to_owned(),
            };
            return Err(ApplicationError::ExternalCommand {
                command: spec.program.clone(),
                reason,
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use garden_core::error::ErrorCategory;

    fn spec(program: &str, args: &[&str], env: &[(&str, &str)]) -> CommandSpec {
        CommandSpec {
            program: program.to_owned(),
            args: args.iter().map(ToString::to_string).collect(),
            env: env
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn successful_command_is_ok() {
        LocalProcessRunner::new()
            .run(&spec("true", &[], &[]))
            .unwrap();
    }

    #[test]
    fn nonzero_exit_is_a_command_error() {
        let err = LocalProcessRunner::new()
            .run(&spec("false", &[], &[]))
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Command);
        assert!(err.to_string().contains("exited with status 1"), "err = {err}");
    }

    #[test]
    fn missing_program_is_a_launch_failure() {
        let err = LocalProcessRunner::new()
            .run(&spec("garden-no-such-program", &[], &[]))
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Command);
        assert!(err.to_string().contains("failed to launch"), "err = {err}");
    }

    #[test]
    fn injected_environment_reaches_the_child() {
        LocalProcessRunner::new()
            .run(&spec(
                "sh",
                &["-c", "test \"$_GARDEN_PLANT_ID\" = api-prod"],
                &[("_GARDEN_PLANT_ID", "api-prod")],
            ))
            .unwrap();
    }
}

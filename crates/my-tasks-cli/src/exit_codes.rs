//! Process exit codes for the task shims.

use my_tasks_core::TaskError;

pub const SUCCESS: i32 = 0;
pub const TASK_FAILED: i32 = 1; // Task ran but could not write its outputs
pub const CONFIG_ERROR: i32 = 2; // Bad flags or parameter file (clap uses 2 for usage errors too)

/// Exit code for an error that reached `main`.
///
/// Task errors carry their own classification; anything else is treated as a
/// configuration problem.
pub fn from_error(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<TaskError>()
        .map(TaskError::exit_code)
        .unwrap_or(CONFIG_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn task_io_error_maps_to_task_failed() {
        let err = anyhow::Error::new(TaskError::Io {
            path: PathBuf::from("/nope/out.txt"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        });
        assert_eq!(from_error(&err), TASK_FAILED);
    }

    #[test]
    fn invalid_params_maps_to_config_error() {
        let err = anyhow::Error::new(TaskError::InvalidParams {
            task: "task3".into(),
            path: PathBuf::from("params.json"),
            message: "missing field `my_dict_arg`".into(),
        });
        assert_eq!(from_error(&err), CONFIG_ERROR);
    }

    #[test]
    fn context_wrapped_task_error_keeps_its_code() {
        let err = anyhow::Error::new(TaskError::Io {
            path: PathBuf::from("out.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
        .context("running task2");
        assert_eq!(from_error(&err), TASK_FAILED);
    }

    #[test]
    fn foreign_error_maps_to_config_error() {
        assert_eq!(from_error(&anyhow::anyhow!("boom")), CONFIG_ERROR);
    }
}

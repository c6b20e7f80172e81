//! JSON-in/JSON-out invocation of a task.
//!
//! `params file -> typed params -> Task::run -> metadata file`. The metadata
//! file is only touched after the task succeeds, and is replaced atomically.

use serde_json::Value;
use std::path::Path;

use crate::error::{TaskError, TaskResult};
use crate::fs::write_atomic;
use crate::metadata::Metadata;
use crate::task::Task;

/// Reads and validates the parameter file for `T`.
pub fn load_params<T: Task>(path: &Path) -> TaskResult<T::Params> {
    let raw = std::fs::read_to_string(path).map_err(|source| TaskError::ParamsRead {
        path: path.to_path_buf(),
        source,
    })?;

    let invalid = |message: String| TaskError::InvalidParams {
        task: T::NAME.to_string(),
        path: path.to_path_buf(),
        message,
    };

    let value: Value = serde_json::from_str(&raw).map_err(|e| invalid(e.to_string()))?;
    if !value.is_object() {
        return Err(invalid(format!(
            "expected a JSON object, found {}",
            json_kind(&value)
        )));
    }

    serde_json::from_value(value).map_err(|e| invalid(e.to_string()))
}

/// Serializes `metadata` compactly and replaces `path` with it.
pub fn write_metadata(path: &Path, metadata: &Metadata) -> TaskResult<()> {
    let body = metadata.to_json().map_err(|e| TaskError::Metadata {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    write_atomic(path, body.as_bytes())
}

/// Runs `T` with the parameters in `params_path` and writes its metadata to `metadata_out`.
pub fn run_task<T: Task>(params_path: &Path, metadata_out: &Path) -> TaskResult<Metadata> {
    tracing::debug!(task = T::NAME, params = %params_path.display(), "loading parameters");
    let params = load_params::<T>(params_path)?;

    tracing::debug!(task = T::NAME, ?params, "running task");
    let metadata = T::run(&params)?;

    write_metadata(metadata_out, &metadata)?;
    tracing::info!(
        task = T::NAME,
        metadata_out = %metadata_out.display(),
        "task finished"
    );
    Ok(metadata)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

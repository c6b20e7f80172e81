//! Like task 2, plus an augmented copy of `my_dict_arg` written to `out.json`
//! next to `output_path`.

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::PathBuf;

use crate::dump::ParamDump;
use crate::error::{TaskError, TaskResult};
use crate::fs::sibling_path;
use crate::metadata::Metadata;
use crate::task::Task;

pub const DICT_ARTIFACT: &str = "out.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Task3Params {
    pub input_paths: Vec<String>,
    pub output_path: PathBuf,
    pub message: String,
    pub myarg2: bool,
    pub myarg3: i64,
    pub my_dict_arg: IndexMap<String, String>,
}

impl Task3Params {
    /// Same five lines as task 2; `my_dict_arg` only goes to `out.json`.
    pub fn dump(&self) -> ParamDump {
        ParamDump::new()
            .field("input_paths", &self.input_paths)
            .field("output_path", &self.output_path)
            .field("message", &self.message)
            .field("myarg2", &self.myarg2)
            .field("myarg3", &self.myarg3)
    }
}

/// Copy of `dict` with `"something"` set to `"new"`, keeping key order.
pub fn augment(dict: &IndexMap<String, String>) -> IndexMap<String, String> {
    let mut out = dict.clone();
    out.insert("something".to_string(), "new".to_string());
    out
}

pub struct Task3;

impl Task for Task3 {
    const NAME: &'static str = "task3";
    const DESCRIPTION: &'static str = "My task 3";
    const PARAMETERS: &'static [&'static str] = &[
        "input_paths",
        "output_path",
        "message",
        "myarg2",
        "myarg3",
        "my_dict_arg",
    ];

    type Params = Task3Params;

    fn run(params: &Task3Params) -> TaskResult<Metadata> {
        params.dump().write_to(&params.output_path)?;

        let artifact = sibling_path(&params.output_path, DICT_ARTIFACT);
        let body = serde_json::to_vec(&augment(&params.my_dict_arg))
            .map_err(|e| TaskError::io(&artifact, e.into()))?;
        std::fs::write(&artifact, body).map_err(|e| TaskError::io(&artifact, e))?;
        tracing::debug!(path = %artifact.display(), "wrote augmented dictionary");

        Ok(Metadata::new().with("I did", "nothing").with("at", "all"))
    }
}

//! Writes its parameters to `output_path` and reports that it did nothing.

use serde::Deserialize;
use std::path::PathBuf;

use crate::dump::ParamDump;
use crate::error::TaskResult;
use crate::metadata::Metadata;
use crate::task::Task;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Task2Params {
    pub input_paths: Vec<String>,
    pub output_path: PathBuf,
    pub message: String,
    pub myarg2: bool,
    pub myarg3: i64,
}

impl Task2Params {
    pub fn dump(&self) -> ParamDump {
        ParamDump::new()
            .field("input_paths", &self.input_paths)
            .field("output_path", &self.output_path)
            .field("message", &self.message)
            .field("myarg2", &self.myarg2)
            .field("myarg3", &self.myarg3)
    }
}

pub struct Task2;

impl Task for Task2 {
    const NAME: &'static str = "task2";
    const DESCRIPTION: &'static str = "My task 2";
    const PARAMETERS: &'static [&'static str] =
        &["input_paths", "output_path", "message", "myarg2", "myarg3"];

    type Params = Task2Params;

    fn run(params: &Task2Params) -> TaskResult<Metadata> {
        params.dump().write_to(&params.output_path)?;
        Ok(Metadata::new().with("I did", "nothing"))
    }
}

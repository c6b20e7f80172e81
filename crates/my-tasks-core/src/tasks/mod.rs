//! Registered tasks.

pub mod task2;
pub mod task3;

use serde::Serialize;
use std::path::Path;

use crate::error::{TaskError, TaskResult};
use crate::metadata::Metadata;
use crate::runner::run_task;
use crate::task::Task;

pub use task2::{Task2, Task2Params};
pub use task3::{Task3, Task3Params};

/// Name-addressable handle on every registered task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Task2,
    Task3,
}

/// Listing entry for a registered task.
#[derive(Debug, Clone, Serialize)]
pub struct TaskInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: &'static [&'static str],
}

impl TaskKind {
    pub const ALL: [TaskKind; 2] = [TaskKind::Task2, TaskKind::Task3];

    pub fn from_name(name: &str) -> TaskResult<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == name)
            .ok_or_else(|| TaskError::UnknownTask {
                name: name.to_string(),
            })
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn info(self) -> TaskInfo {
        match self {
            Self::Task2 => info::<Task2>(),
            Self::Task3 => info::<Task3>(),
        }
    }

    pub fn run(self, params_path: &Path, metadata_out: &Path) -> TaskResult<Metadata> {
        match self {
            Self::Task2 => run_task::<Task2>(params_path, metadata_out),
            Self::Task3 => run_task::<Task3>(params_path, metadata_out),
        }
    }
}

fn info<T: Task>() -> TaskInfo {
    TaskInfo {
        name: T::NAME,
        description: T::DESCRIPTION,
        parameters: T::PARAMETERS,
    }
}

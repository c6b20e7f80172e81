//! Fixture tasks for exercising a task-execution harness.
//!
//! Each task takes a typed parameter set, dumps it to `output_path` and
//! returns a static [`Metadata`] mapping. [`runner::run_task`] wires a task
//! to the harness convention: parameters from a JSON file, metadata to
//! another JSON file.

pub mod dump;
pub mod error;
pub mod fs;
pub mod metadata;
pub mod runner;
pub mod task;
pub mod tasks;

pub use error::{TaskError, TaskResult};
pub use metadata::Metadata;
pub use runner::{load_params, run_task, write_metadata};
pub use task::Task;
pub use tasks::{TaskInfo, TaskKind};

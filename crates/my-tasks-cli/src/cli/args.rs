use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "my-tasks",
    version,
    about = "Fixture tasks for exercising a task-execution harness"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// My task 2: dump parameters to output_path
    Task2(TaskArgs),
    /// My task 3: dump parameters and write an augmented my_dict_arg to out.json
    Task3(TaskArgs),
    /// List registered tasks and their parameters as JSON
    List,
}

/// Flags shared by every task entry point.
#[derive(clap::Args, Debug, Clone)]
pub struct TaskArgs {
    /// JSON object with the task's parameters
    #[arg(short = 'j', long = "json", value_name = "PATH")]
    pub json: PathBuf,

    /// Where to write the metadata returned by the task
    #[arg(long, value_name = "PATH")]
    pub metadata_out: PathBuf,
}

/// Standalone single-task binary (`task2`, `task3`).
#[derive(Parser, Debug)]
#[command(version)]
pub struct TaskCli {
    #[command(flatten)]
    pub args: TaskArgs,
}

use my_tasks_core::TaskKind;

use super::args::*;

pub mod list;
pub mod run_task;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Task2(args) => run_task::run(TaskKind::Task2, args),
        Command::Task3(args) => run_task::run(TaskKind::Task3, args),
        Command::List => list::run(),
    }
}

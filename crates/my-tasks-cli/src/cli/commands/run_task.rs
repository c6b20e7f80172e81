use clap::{CommandFactory, FromArgMatches};
use my_tasks_core::TaskKind;

use crate::cli::args::{TaskArgs, TaskCli};
use crate::exit_codes;

/// Runs `kind` with the given flags. Task failures propagate as `TaskError`.
pub fn run(kind: TaskKind, args: TaskArgs) -> anyhow::Result<i32> {
    tracing::debug!(task = kind.name(), params = %args.json.display(), "dispatching task");
    kind.run(&args.json, &args.metadata_out)?;
    Ok(exit_codes::SUCCESS)
}

/// Entry point of the standalone `task2`/`task3` binaries.
pub fn standalone(kind: TaskKind) -> i32 {
    let info = kind.info();
    let matches = TaskCli::command()
        .name(info.name)
        .about(info.description)
        .get_matches();
    let cli = match TaskCli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    match run(kind, cli.args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("fatal: {e:?}");
            exit_codes::from_error(&e)
        }
    }
}

use my_tasks_core::TaskKind;

use crate::exit_codes;

pub fn run() -> anyhow::Result<i32> {
    let tasks: Vec<_> = TaskKind::ALL.into_iter().map(TaskKind::info).collect();
    println!("{}", serde_json::to_string_pretty(&tasks)?);
    Ok(exit_codes::SUCCESS)
}

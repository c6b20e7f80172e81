use my_tasks_cli::cli::commands::run_task::standalone;
use my_tasks_core::TaskKind;

fn main() {
    my_tasks_cli::init_logging();
    std::process::exit(standalone(TaskKind::Task2));
}

use clap::Parser;

use my_tasks_cli::cli::args::Cli;
use my_tasks_cli::cli::commands::dispatch;
use my_tasks_cli::exit_codes;

fn main() {
    my_tasks_cli::init_logging();
    let cli = Cli::parse();
    let code = match dispatch(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("fatal: {e:?}");
            exit_codes::from_error(&e)
        }
    };
    std::process::exit(code);
}

use std::process::ExitCode;

use clap::Parser;
use snapzone_cli::{Cli, Config, Outcome, run};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(&cli) {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Ok(Outcome::Blocked) => ExitCode::from(1),
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "command failed");
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn try_main(cli: &Cli) -> anyhow::Result<Outcome> {
    let config = match Config::from_env(cli.log_format) {
        Ok(config) => cli.configure(config),
        Err(err) => {
            snapzone_observability::init(cli.log_format.unwrap_or_default());
            return Err(err.into());
        }
    };
    snapzone_observability::init(config.log_format);
    tracing::debug!(?config, "configuration loaded");

    let today = chrono::Local::now().date_naive();
    let mut stdout = std::io::stdout().lock();
    run(&cli.command, &config, today, &mut stdout)
}

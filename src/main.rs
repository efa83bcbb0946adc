use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use atomic_blog::{App, Cli, Config, logging, pipeline};

fn main() -> ExitCode {
    let config = Config::from(Cli::parse());

    if let Err(err) = logging::init_tracing(config.log_file.as_deref(), config.verbose) {
        eprintln!("atomic-blog: {err}");
        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "exiting with error");
            eprintln!("atomic-blog: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> atomic_blog::Result<()> {
    info!(
        posts = config.initial_posts,
        archive = config.archive_size,
        seed = ?config.seed,
        "starting"
    );

    let app = App::new(config);
    let handle = pipeline::mount(app)?;

    // The handle restores the terminal on drop if the loop fails
    pipeline::run(&handle)?;
    handle.unmount()?;

    info!("stopped");
    Ok(())
}

use clap::Parser;
mod commands;
mod error;
mod logging;
use commands::cli;
use error::CliError;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let args = cli::Args::parse();
    let guard = logging::init(args.log_dir.as_deref())?;

    let exit = dispatch(args).await?;

    // process::exit skips destructors; flush the file writer first.
    drop(guard);
    std::process::exit(exit);
}

async fn dispatch(args: cli::Args) -> Result<i32, CliError> {
    match args.command {
        cli::Commands::Sync(sync_args) => {
            commands::sync::handle_sync(sync_args, args.config.as_deref()).await
        }
        cli::Commands::Push(push_args) => {
            commands::push::handle_push(push_args, args.config.as_deref()).await?;
            Ok(0)
        }
    }
}

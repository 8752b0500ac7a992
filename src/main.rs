mod bot;
mod cli;
mod config;
mod error;
mod model;
mod router;
mod startup;
mod state;
mod util;

use std::process::ExitCode;

use clap::Parser;

use crate::{
    bot::catalog::CATALOG, cli::Args, config::ConfigResolver, error::AppError, state::AppContext,
};

#[tokio::main]
async fn main() -> ExitCode {
    startup::init_tracing();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Runs the startup sequence, then waits on the gateway loop.
///
/// Configuration and credential failures return before any network activity.
/// Command registration and the HTTP server never fail startup.
async fn run(args: Args) -> Result<(), AppError> {
    tracing::info!("Fireship Helpbot Loading...");

    let config = ConfigResolver::new(&args.properties).resolve()?;
    tracing::info!(
        "Resolved {} configuration entries ({:?} mode)",
        config.entries().len(),
        config.mode()
    );

    if args.verbose_config {
        config.log_entries();
    }

    tracing::info!("Initializing bot...");
    let (client, session) = bot::start::init_bot(config.require_credential()?, CATALOG).await?;

    let context = AppContext::new(config, CATALOG, session);

    // Start Discord bot in a separate task
    let bot_task = tokio::spawn(bot::start::start_bot(client));

    // Not awaited: the task logs its own outcome
    let _registration = bot::sync::synchronize(context.catalog, context.session.clone());

    let server =
        startup::start_optional_server(&context, args.port.as_deref(), &args.static_dir).await;

    let result = bot_task.await?;

    if let Some(server) = server {
        server.task.abort();
    }

    result
}

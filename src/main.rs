use clap::Parser;
use jobboard::cli::{self, Cli, Command, Context};
use jobboard::config::Config;
use jobboard::navigation::Route;
use jobboard::utils::init_logging;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Load configuration
    let config = Config::from_env()?.with_overrides(args.api_url.clone(), args.token.clone());

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(args.log_target(), &config.storage.log_dir)?;
    info!(api = %config.api.base_url, "Configuration loaded");

    let mut ctx = Context::new(config).await?;

    let result = match args.command {
        None => start_tui(&ctx, Route::Listing).await,
        Some(Command::Tui { route }) => start_tui(&ctx, cli::parse_route(&route)?).await,
        Some(command) => cli::run(command, &mut ctx).await,
    };

    if let Err(e) = &result {
        error!("{:#}", e);
    }
    result
}

async fn start_tui(ctx: &Context, route: Route) -> anyhow::Result<()> {
    let api = Arc::new(ctx.jobs());
    jobboard::tui::run(ctx.config.clone(), api, ctx.account.clone(), route).await
}

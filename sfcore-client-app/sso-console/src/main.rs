mod cli;
mod commands;

use clap::Parser;
use sso_shared::config::ConsoleConfig;
use sso_shared::telemetry::init_telemetry;
use tracing::{debug, error};

use cli::{Cli, Command, ListAction, MenuAction};
use commands::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ConsoleConfig::load()?;
    if let Some(base_url) = cli.base_url.clone() {
        config.api.base_url = base_url;
    }
    if let Some(token) = cli.token.clone() {
        config.api.bearer_token = Some(token);
    }

    // Held until exit so the file writer can flush
    let _guard = init_telemetry(&config.log)?;
    debug!("{} ({}) using {}", config.app.name, config.app.env, config.api.base_url);

    let ctx = Context::new(&config)?;
    let result = match &cli.command {
        Command::Whoami => commands::whoami(&ctx).await,
        Command::Nav { current } => commands::nav(&ctx, current.as_deref()).await,
        Command::Dashboard => commands::dashboard(&ctx).await,
        Command::Menus { action: MenuAction::List(args) } => commands::list_menus(&ctx, args).await,
        Command::Menus { action: MenuAction::Delete { id, yes } } => {
            commands::delete_menu(&ctx, id, *yes).await
        }
        Command::Users { action: ListAction::List(args) } => commands::list_users(&ctx, args).await,
        Command::Clients { action: ListAction::List(args) } => {
            commands::list_clients(&ctx, args).await
        }
    };

    if let Err(e) = result {
        error!("Command failed: {:#}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use luminalib::cli::{self, BooksAction, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stderr keeps command output clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "luminalib=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Init => cli::commands::init().await,
        Commands::Login { username, password } => {
            cli::commands::login(config, username, password).await
        }
        Commands::Demo { role } => cli::commands::demo(config, role.into()).await,
        Commands::Logout => cli::commands::logout(config).await,
        Commands::Whoami => cli::commands::whoami(config).await,
        Commands::Menu { format } => cli::commands::menu(config, format).await,
        Commands::Open { path, format } => cli::commands::open(config, &path, format).await,
        Commands::Books { action } => match action {
            BooksAction::List {
                search,
                filter,
                format,
            } => cli::commands::books_list(config, &search, filter, format).await,
            BooksAction::Borrow { id } => cli::commands::books_borrow(config, id).await,
            BooksAction::Add { fields } => cli::commands::books_add(config, fields).await,
            BooksAction::Edit { id, fields } => {
                cli::commands::books_edit(config, id, fields).await
            }
            BooksAction::Delete { id, force } => {
                cli::commands::books_delete(config, id, force).await
            }
        },
        Commands::Users { format } => cli::commands::users(config, format).await,
    }
}

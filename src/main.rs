//! # Blog Server
//!
//! Entry point. Without a subcommand the HTTP server is started; the other
//! subcommands cover database and account administration.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use blog_server::application::services::{AuthService, AuthServiceImpl, NewAccount};
use blog_server::config::Settings;
use blog_server::domain::GroupRepository;
use blog_server::infrastructure::database;
use blog_server::infrastructure::repositories::{PgGroupRepository, PgUserRepository};
use blog_server::presentation::http::handlers::health;
use blog_server::startup::Application;

#[derive(Parser, Debug)]
#[command(name = "blog-server", author, version, about = "Blog backend with JWT authentication")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default)
    Serve,

    /// Apply pending database migrations and exit
    Migrate,

    /// Create a user account
    CreateUser {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,

        #[arg(long, default_value = "")]
        first_name: String,

        #[arg(long, default_value = "")]
        last_name: String,
    },

    /// List all groups
    Groups,
}

#[tokio::main]
async fn main() -> Result<()> {
    blog_server::telemetry::init_tracing();

    let cli = Cli::parse();
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(settings).await,
        Command::Migrate => {
            let pool = database::create_pool(&settings.database).await?;
            database::run_migrations(&pool).await?;
            info!("Migrations applied");
            Ok(())
        }
        Command::CreateUser {
            username,
            password,
            first_name,
            last_name,
        } => {
            let pool = database::create_pool(&settings.database).await?;
            let auth_service =
                AuthServiceImpl::new(Arc::new(PgUserRepository::new(pool)), settings.jwt.clone());
            let user = auth_service
                .create_user(NewAccount {
                    username,
                    password,
                    first_name,
                    last_name,
                })
                .await?;
            println!("Created user {} (id {})", user.username, user.id);
            Ok(())
        }
        Command::Groups => {
            let pool = database::create_pool(&settings.database).await?;
            let groups = PgGroupRepository::new(pool).list().await?;
            println!("{:>6}  {:<50}  {}", "id", "slug", "title");
            for group in groups {
                println!("{:>6}  {:<50}  {}", group.id, group.slug, group.title);
            }
            Ok(())
        }
    }
}

async fn serve(settings: Settings) -> Result<()> {
    info!("Starting Blog Server...");
    health::init_server_start();

    let application = Application::build(settings).await?;
    info!("Server ready to accept connections");
    application.run_until_stopped().await
}

mod backend;
mod cli;
mod output;

mod commands {
    pub mod session;
    pub mod users;
}

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use output::OutputFormat;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so command output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("radar=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };
    let config = &cli.backend_config;

    match cli.command {
        Commands::Init => commands::session::run_init(config, format).await,
        Commands::Login(args) => commands::session::run_login(config, args, format).await,
        Commands::Register(args) => commands::users::run_register(config, args, format).await,
        Commands::Logout => commands::session::run_logout(config, format).await,
        Commands::Whoami => commands::session::run_whoami(config, format).await,
        Commands::Users => commands::users::run_users(config, format).await,
    }
}

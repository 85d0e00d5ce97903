//! CLI argument definitions for the Radar binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use radar::user::Role;

/// Storage backend type
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Backend {
    /// One file per key under the data directory (default)
    File,
    /// Process-local only; nothing survives the command
    Memory,
}

/// Account role accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RoleArg {
    Admin,
    Editor,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Admin => Role::Admin,
            RoleArg::Editor => Role::Editor,
        }
    }
}

/// Radar newsroom credential store
#[derive(Parser, Debug)]
#[command(name = "radar")]
#[command(about = "Radar: newsroom accounts, logins and sessions")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub backend_config: BackendConfig,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the store keeps its data
#[derive(clap::Args, Debug, Clone)]
pub struct BackendConfig {
    /// Storage backend to use
    #[arg(short, long, default_value = "file", env = "RADAR_BACKEND", global = true)]
    pub backend: Backend,

    /// Data directory for the file backend
    #[arg(
        short = 'D',
        long,
        default_value = ".radar",
        env = "RADAR_DATA_DIR",
        global = true
    )]
    pub data_dir: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the store (seeding the default accounts) if it does not exist
    Init,
    /// Log in and start a session
    Login(LoginArgs),
    /// Create an account and start a session for it
    Register(RegisterArgs),
    /// End the current session
    Logout,
    /// Show the user of the current session
    Whoami,
    /// List all accounts with per-role counts
    Users,
}

/// Arguments for the login command
#[derive(clap::Args, Debug)]
pub struct LoginArgs {
    #[arg(short, long)]
    pub email: String,

    #[arg(short, long, env = "RADAR_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Arguments for the register command
#[derive(clap::Args, Debug)]
pub struct RegisterArgs {
    /// Display name (at least 3 characters)
    #[arg(short, long)]
    pub name: String,

    #[arg(short, long)]
    pub email: String,

    /// Password (at least 6 characters)
    #[arg(short, long, env = "RADAR_PASSWORD", hide_env_values = true)]
    pub password: String,

    #[arg(short, long, default_value = "editor")]
    pub role: RoleArg,
}

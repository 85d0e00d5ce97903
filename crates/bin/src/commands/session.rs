use radar::user::User;
use zeroize::Zeroizing;

use crate::{
    backend::{backend_label, open_store},
    cli::{BackendConfig, LoginArgs},
    output::OutputFormat,
};

pub async fn run_init(
    config: &BackendConfig,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(config).await?;
    let counts = store.role_counts()?;

    match format {
        OutputFormat::Human => {
            println!("Store ready on {}", backend_label(config));
            println!(
                "  {} accounts ({} admin, {} editor)",
                counts.total, counts.admins, counts.editors
            );
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&counts)?),
    }
    Ok(())
}

pub async fn run_login(
    config: &BackendConfig,
    mut args: LoginArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let password = Zeroizing::new(std::mem::take(&mut args.password));
    let store = open_store(config).await?;

    match store.login(&args.email, &password) {
        Ok(user) => {
            print_user(&user, format, "Logged in as")?;
            Ok(())
        }
        Err(e) if e.is_invalid_credentials() => Err("Invalid email or password".into()),
        Err(e) => Err(e.into()),
    }
}

pub async fn run_logout(
    config: &BackendConfig,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(config).await?;
    let previous = store.current_user()?;
    store.logout()?;

    match format {
        OutputFormat::Human => match previous {
            Some(user) => println!("Logged out {}", user.email),
            None => println!("No active session"),
        },
        OutputFormat::Json => println!("{}", serde_json::json!({ "logged_out": previous.is_some() })),
    }
    Ok(())
}

pub async fn run_whoami(
    config: &BackendConfig,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(config).await?;

    match (store.current_user()?, format) {
        (Some(user), format) => print_user(&user, format, "Logged in as")?,
        (None, OutputFormat::Human) => println!("Not logged in"),
        (None, OutputFormat::Json) => println!("null"),
    }
    Ok(())
}

pub(crate) fn print_user(
    user: &User,
    format: OutputFormat,
    heading: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            println!("{heading} {} <{}>", user.name, user.email);
            println!("  Role: {}", user.role);
            println!("  ID:   {}", user.id);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(user)?),
    }
    Ok(())
}

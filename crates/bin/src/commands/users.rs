use radar::user::Role;
use zeroize::Zeroizing;

use super::session::print_user;
use crate::{
    backend::open_store,
    cli::{BackendConfig, RegisterArgs},
    output::{OutputFormat, format_timestamp, print_table},
};

pub async fn run_register(
    config: &BackendConfig,
    mut args: RegisterArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let password = Zeroizing::new(std::mem::take(&mut args.password));
    let store = open_store(config).await?;

    let user = store.register(&args.name, &args.email, &password, Role::from(args.role))?;
    print_user(&user, format, "Registered")
}

pub async fn run_users(
    config: &BackendConfig,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(config).await?;
    let users = store.list_users()?;
    let counts = store.role_counts()?;

    match format {
        OutputFormat::Human => {
            let rows: Vec<Vec<String>> = users
                .iter()
                .map(|u| {
                    vec![
                        u.name.clone(),
                        u.email.clone(),
                        u.role.to_string(),
                        format_timestamp(u.created_at),
                    ]
                })
                .collect();
            print_table(&["NAME", "EMAIL", "ROLE", "CREATED"], &rows);
            println!();
            println!(
                "{} accounts: {} admin, {} editor",
                counts.total, counts.admins, counts.editors
            );
        }
        OutputFormat::Json => {
            let out = serde_json::json!({ "users": users, "counts": counts });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

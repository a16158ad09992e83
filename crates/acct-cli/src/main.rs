//! acct - account dashboard CLI
//!
//! Drives the account API from the terminal: profile, password, API key,
//! payments and the contact forms.
//!
//! # Examples
//!
//! ```bash
//! # Store the token issued by the sign-in page
//! acct session login --token <token>
//!
//! # Show the profile
//! acct profile show --pretty
//!
//! # Rotate the API key
//! acct key regenerate --confirm "regenerate my api key"
//! ```

use acct_cli::{
    CliResult, credentials, image, logger,
    cli::Cli,
    commands::{
        AccountCommands, Commands, ContactCommands, KeyCommands, PasswordCommands,
        PaymentCommands, ProfileCommands, SessionCommands,
    },
    session_store::{self, StoredSession},
};
use acct_client::{ApiKeyManager, Client};
use acct_config::{ApiConfig, Config};
use acct_core::{PaymentRecord, UserProfile};

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::error;
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&config) {
        eprintln!("Warning: {}", e.user_message());
    }
    config.log_summary();

    let result = run(cli, &config).await;

    // Handle result
    match result {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> CliResult<Config> {
    let config = Config::load()?;
    config.validate()?;
    Ok(config)
}

fn init_logging(config: &Config) -> CliResult<()> {
    let log_file = config.log_file_path()?;
    logger::initialize(config.logging.level, log_file, config.logging.colored)
}

async fn run(cli: Cli, config: &Config) -> CliResult<Value> {
    let session_path = config.session_path()?;
    let Cli {
        command,
        server,
        token,
        ..
    } = cli;
    let connect = || build_client(server, token, config, &session_path);

    match command {
        Commands::Session { action } => session_command(action, &session_path),
        Commands::Profile { action } => profile_command(action, &connect()?).await,
        Commands::Password { action } => password_command(action, &connect()?).await,
        Commands::Account { action } => {
            account_command(action, &connect()?, &session_path).await
        }
        Commands::Key { action } => key_command(action, &connect()?).await,
        Commands::Payment { action } => payment_command(action, &connect()?).await,
        Commands::Contact { action } => contact_command(action, &connect()?).await,
    }
}

async fn profile_command(action: ProfileCommands, client: &Client) -> CliResult<Value> {
    match action {
        ProfileCommands::Show => Ok(client.profile().await?),
        ProfileCommands::Usage => usage(client).await,
        ProfileCommands::SetName { name } => Ok(client.set_user_name(&name).await?),
        ProfileCommands::SetPhone { phone } => Ok(client.set_phone_number(&phone).await?),
        ProfileCommands::SetImage { url, file } => {
            let image = match file {
                Some(path) => image::data_url_from_file(&path)?,
                None => url.unwrap_or_default(),
            };
            Ok(client.set_image(&image).await?)
        }
        ProfileCommands::RemoveImage => Ok(client.remove_image().await?),
    }
}

async fn password_command(action: PasswordCommands, client: &Client) -> CliResult<Value> {
    match action {
        PasswordCommands::Change { current, new } => {
            Ok(client.change_password(&current, &new).await?)
        }
        PasswordCommands::Verify { password } => Ok(client.verify_password(&password).await?),
    }
}

async fn account_command(
    action: AccountCommands,
    client: &Client,
    session_path: &Path,
) -> CliResult<Value> {
    match action {
        AccountCommands::Delete { confirm } => {
            let body = client.delete_account_confirmed(&confirm).await?;
            session_store::clear(session_path)?;
            Ok(body)
        }
    }
}

async fn payment_command(action: PaymentCommands, client: &Client) -> CliResult<Value> {
    match action {
        PaymentCommands::CreateOrder {
            amount,
            currency,
            tokens,
        } => Ok(client
            .create_payment_order(amount, &currency, tokens)
            .await?),
        PaymentCommands::History { raw } => {
            let body = client.payment_history().await?;
            if raw {
                return Ok(body);
            }
            let records = PaymentRecord::list_from_value(&body)?;
            Ok(serde_json::to_value(records)?)
        }
    }
}

async fn contact_command(action: ContactCommands, client: &Client) -> CliResult<Value> {
    match action {
        ContactCommands::Send {
            name,
            email,
            subject,
            message,
        } => Ok(client
            .submit_contact(&name, &email, subject.as_deref(), &message)
            .await?),
        ContactCommands::Developer {
            name,
            email,
            company,
            use_case,
            message,
        } => Ok(client
            .submit_developer_contact(
                &name,
                &email,
                company.as_deref(),
                use_case.as_deref(),
                &message,
            )
            .await?),
    }
}

/// Build the client and sign it in from `--token` or the stored session.
///
/// A rejected stored credential removes the session file; a rejected
/// `--token` leaves it alone.
fn build_client(
    server: Option<String>,
    token: Option<String>,
    config: &Config,
    session_path: &Path,
) -> CliResult<Client> {
    let api = match server {
        Some(base_url) => {
            let api = ApiConfig {
                base_url,
                ..config.api.clone()
            };
            api.validate()?;
            api
        }
        None => config.api.clone(),
    };

    let source = credentials::resolve(token, session_path)?;
    let session = credentials::session_for(source, session_path);

    Ok(Client::from_config(&api, session)?)
}

fn session_command(action: SessionCommands, session_path: &Path) -> CliResult<Value> {
    match action {
        SessionCommands::Login { token } => {
            let stored = StoredSession::new(token);
            session_store::save(session_path, &stored)?;
            Ok(json!({ "authenticated": true, "savedAt": stored.saved_at }))
        }
        SessionCommands::Logout => {
            let removed = session_store::clear(session_path)?;
            Ok(json!({ "authenticated": false, "removed": removed }))
        }
        SessionCommands::Status => {
            let loaded = session_store::load(session_path)?;
            if let Some(reason) = loaded.corruption_error {
                let backup = session_store::backup_corrupted(session_path)?;
                return Ok(json!({
                    "authenticated": false,
                    "corrupted": reason,
                    "backup": backup,
                }));
            }
            Ok(match loaded.session {
                Some(stored) => json!({ "authenticated": true, "savedAt": stored.saved_at }),
                None => json!({ "authenticated": false }),
            })
        }
    }
}

async fn usage(client: &Client) -> CliResult<Value> {
    let body = client.profile().await?;
    let profile = UserProfile::from_value(&body)?;
    Ok(json!({
        "tokenBalance": profile.token_balance,
        "tokensUsed": profile.tokens_used,
        "usagePercent": profile.usage_percent(),
    }))
}

/// One dialog session per invocation; the key is printed once and the
/// manager dropped.
async fn key_command(action: KeyCommands, client: &Client) -> CliResult<Value> {
    let mut manager = ApiKeyManager::new(client);
    let has_key = manager.refresh().await?;

    match action {
        KeyCommands::Status => Ok(json!({ "hasKey": has_key })),
        KeyCommands::Generate => {
            let key = manager.generate().await?.to_string();
            manager.close();
            Ok(json!({ "apiKey": key }))
        }
        KeyCommands::Regenerate { confirm } => {
            manager.request_regenerate()?;
            manager.set_confirmation_input(&confirm)?;
            let key = manager.regenerate().await?.to_string();
            manager.close();
            Ok(json!({ "apiKey": key }))
        }
    }
}

use crate::cli::Cli;
use crate::commands::{
    AccountCommands, Commands, KeyCommands, PaymentCommands, ProfileCommands, SessionCommands,
};
use crate::tests::EnvGuard;

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use serial_test::serial;

#[test]
fn test_command_tree_is_well_formed() {
    Cli::command().debug_assert();
}

#[test]
#[serial]
fn test_global_flags_after_subcommand() {
    let _token = EnvGuard::remove("ACCT_TOKEN");

    let cli = Cli::try_parse_from([
        "acct",
        "profile",
        "show",
        "--server",
        "http://localhost:9000",
        "--pretty",
    ])
    .unwrap();

    assert_eq!(cli.server.as_deref(), Some("http://localhost:9000"));
    assert!(cli.pretty);
    assert!(cli.token.is_none());
    assert!(matches!(
        cli.command,
        Commands::Profile {
            action: ProfileCommands::Show
        }
    ));
}

#[test]
#[serial]
fn test_token_from_environment() {
    let _token = EnvGuard::set("ACCT_TOKEN", "env-token");

    let cli = Cli::try_parse_from(["acct", "key", "status"]).unwrap();

    assert_eq!(cli.token.as_deref(), Some("env-token"));
    assert!(matches!(
        cli.command,
        Commands::Key {
            action: KeyCommands::Status
        }
    ));
}

#[test]
fn test_session_login_requires_token() {
    assert!(Cli::try_parse_from(["acct", "session", "login"]).is_err());

    let cli = Cli::try_parse_from(["acct", "session", "login", "--token", "t"]).unwrap();
    match cli.command {
        Commands::Session {
            action: SessionCommands::Login { token },
        } => assert_eq!(token, "t"),
        _ => panic!("Expected session login"),
    }
}

#[test]
fn test_set_image_requires_exactly_one_source() {
    assert!(Cli::try_parse_from(["acct", "profile", "set-image"]).is_err());
    assert!(
        Cli::try_parse_from([
            "acct",
            "profile",
            "set-image",
            "--url",
            "https://x/a.png",
            "--file",
            "a.png"
        ])
        .is_err()
    );

    let cli = Cli::try_parse_from(["acct", "profile", "set-image", "--file", "me.png"]).unwrap();
    match cli.command {
        Commands::Profile {
            action: ProfileCommands::SetImage { url, file },
        } => {
            assert!(url.is_none());
            assert_eq!(file, Some(PathBuf::from("me.png")));
        }
        _ => panic!("Expected profile set-image"),
    }
}

#[test]
fn test_destructive_commands_require_confirmation() {
    assert!(Cli::try_parse_from(["acct", "account", "delete"]).is_err());
    assert!(Cli::try_parse_from(["acct", "key", "regenerate"]).is_err());

    let cli = Cli::try_parse_from([
        "acct",
        "account",
        "delete",
        "--confirm",
        "delete my account",
    ])
    .unwrap();
    match cli.command {
        Commands::Account {
            action: AccountCommands::Delete { confirm },
        } => assert_eq!(confirm, "delete my account"),
        _ => panic!("Expected account delete"),
    }
}

#[test]
fn test_create_order_defaults_currency() {
    let cli = Cli::try_parse_from(["acct", "payment", "create-order", "--amount", "4999"]).unwrap();

    match cli.command {
        Commands::Payment {
            action:
                PaymentCommands::CreateOrder {
                    amount,
                    currency,
                    tokens,
                },
        } => {
            assert_eq!(amount, 4999);
            assert_eq!(currency, "USD");
            assert!(tokens.is_none());
        }
        _ => panic!("Expected payment create-order"),
    }
}

#[test]
fn test_negative_amount_is_rejected() {
    assert!(
        Cli::try_parse_from(["acct", "payment", "create-order", "--amount", "-5"]).is_err()
    );
}

mod commands;

use clap::{Parser, Subcommand};
use fairdice_core::{DiceSet, FairDiceError, GameConfig, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fairdice")]
#[command(about = "Provably fair dice game against the computer")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Dice to play with, six comma separated integers each (at least 3)
    #[arg(value_name = "DICE", allow_hyphen_values = true)]
    dice: Vec<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a revealed round against its published HMAC
    Verify {
        /// HMAC shown before you entered your number (hex)
        #[arg(long)]
        hmac: String,
        /// Key revealed after the round (hex)
        #[arg(long)]
        key: String,
        /// Computer number revealed after the round
        #[arg(long)]
        number: u32,
    },
}

async fn run(cli: Cli, config: &GameConfig) -> Result<()> {
    match cli.command {
        Some(Commands::Verify { hmac, key, number }) => {
            commands::verify_round(&hmac, &key, number)
        }
        None => {
            let dice = DiceSet::parse(&cli.dice, config)?;
            commands::play(dice, config).await
        }
    }
}

/// Exit status and stderr text for a failed run
fn failure_report(err: &FairDiceError) -> (i32, String) {
    let message = match err {
        FairDiceError::Usage(_) => format!(
            "Error: {}\nUsage: fairdice <DICE> <DICE> <DICE>...\nExample: fairdice 2,2,4,4,9,9 6,8,1,1,8,6 7,5,3,7,5,3",
            err
        ),
        _ => format!("Error: {}", err),
    };
    (1, message)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr, the game itself owns stdout
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "fairdice={},fairdice_core={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = GameConfig::default();

    if let Err(e) = run(cli, &config).await {
        let (code, message) = failure_report(&e);
        eprintln!("{}", message);
        std::process::exit(code);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_face_dice_are_positional() {
        let cli = Cli::try_parse_from([
            "fairdice",
            "-1,0,1,-1,0,1",
            "2,2,4,4,9,9",
            "3,3,5,5,7,7",
        ])
        .unwrap();

        assert!(!cli.verbose);
        assert_eq!(cli.dice[0], "-1,0,1,-1,0,1");
        assert_eq!(cli.dice.len(), 3);
    }

    #[test]
    fn test_verbose_flag_with_negative_dice() {
        let cli = Cli::try_parse_from([
            "fairdice",
            "-v",
            "-1,0,1,-1,0,1",
            "2,2,4,4,9,9",
            "-3,3,5,5,7,7",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.dice, vec!["-1,0,1,-1,0,1", "2,2,4,4,9,9", "-3,3,5,5,7,7"]);
        assert!(DiceSet::parse(&cli.dice, &GameConfig::default()).is_ok());
    }

    #[test]
    fn test_verify_subcommand() {
        let cli = Cli::try_parse_from([
            "fairdice",
            "verify",
            "--hmac",
            "ab",
            "--key",
            "cd",
            "--number",
            "3",
        ])
        .unwrap();

        assert!(cli.dice.is_empty());
        assert!(matches!(cli.command, Some(Commands::Verify { number: 3, .. })));
    }

    #[tokio::test]
    async fn test_two_dice_fail_before_menu() {
        let cli = Cli::try_parse_from(["fairdice", "2,2,4,4,9,9", "1,1,6,6,8,8"]).unwrap();

        // rejected before the session touches stdin
        let err = run(cli, &GameConfig::default()).await.unwrap_err();
        assert!(matches!(err, FairDiceError::Usage(_)));

        let (code, message) = failure_report(&err);
        assert_eq!(code, 1);
        assert!(message.starts_with("Error: Invalid dice definitions"));
        assert!(message.contains("Usage: fairdice <DICE> <DICE> <DICE>..."));
        assert!(!message.contains("Menu"));
    }

    #[test]
    fn test_other_errors_skip_usage_text() {
        let (code, message) = failure_report(&FairDiceError::CommitmentMismatch);
        assert_eq!(code, 1);
        assert!(message.starts_with("Error: Commitment mismatch"));
        assert!(!message.contains("Usage:"));
    }
}

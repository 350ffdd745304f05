use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use resume_vault::cli::{
    handle_audit_command, handle_config_command, handle_init_command, handle_key_command,
    handle_resume_command, KeyCommands, ResumeCommands,
};
use resume_vault::config::{Settings, VaultPaths};
use resume_vault::models::OwnerId;
use resume_vault::storage::Storage;

#[derive(Parser)]
#[command(
    name = "resume-vault",
    author = "Kaylee Beyene",
    version,
    about = "Resume storage with transparent PII encryption",
    long_about = "resume-vault stores resumes as JSON documents and keeps the \
                  personally identifying fields (name, email, phone) encrypted \
                  at rest. You read and write plaintext; the files on disk only \
                  ever hold sealed tokens."
)]
struct Cli {
    /// Owner whose resumes to operate on
    #[arg(long, global = true, env = "RESUME_VAULT_OWNER")]
    owner: Option<OwnerId>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resume management commands
    #[command(subcommand)]
    Resume(ResumeCommands),

    /// Key management commands
    #[command(subcommand)]
    Key(KeyCommands),

    /// Initialize the vault and bind it to a key
    Init {
        /// Derive the key from a passphrase instead of RESUME_VAULT_KEY
        #[arg(long)]
        passphrase: bool,
    },

    /// Show current configuration and paths
    Config,

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = VaultPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_filter);

    match cli.command {
        Some(Commands::Resume(cmd)) => {
            let storage = Storage::new(paths)?;
            storage.load_all()?;
            handle_resume_command(&storage, &settings, cli.owner, cmd)?;
        }
        Some(Commands::Key(cmd)) => {
            handle_key_command(cmd)?;
        }
        Some(Commands::Init { passphrase }) => {
            handle_init_command(&paths, &mut settings, passphrase)?;
        }
        Some(Commands::Config) => {
            handle_config_command(&paths, &settings)?;
        }
        Some(Commands::Audit { limit }) => {
            let storage = Storage::new(paths)?;
            handle_audit_command(&storage, limit)?;
        }
        None => {
            println!("resume-vault - Resume storage with transparent PII encryption");
            println!();
            println!("Run 'resume-vault --help' for usage information.");
            println!("Run 'resume-vault init' to get started.");
        }
    }

    Ok(())
}

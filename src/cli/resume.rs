//! Resume CLI commands
//!
//! Implements CLI commands for resume management. Content goes in and comes
//! out as plaintext JSON; sealing happens underneath in the service.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::{load_secret_key, Settings};
use crate::crypto::Cipher;
use crate::display::{format_resume_details, format_resume_list, format_warnings};
use crate::error::{VaultError, VaultResult};
use crate::models::{OwnerId, Resume, ResumeContent, ResumeId, ResumeStatus};
use crate::services::{NewResume, ResumeService, ResumeUpdate};
use crate::storage::Storage;

/// Resume subcommands
#[derive(Subcommand)]
pub enum ResumeCommands {
    /// Print the empty starting document
    Template,
    /// Create a new resume
    Create {
        /// Resume title (3 to 100 characters)
        #[arg(short, long)]
        title: String,
        /// Status (draft, final, archived)
        #[arg(short, long, default_value = "draft")]
        status: ResumeStatus,
        /// JSON content file; read from stdin when omitted
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// List your resumes
    List,
    /// Show a resume with its content
    Show {
        /// Resume ID
        id: ResumeId,
        /// Print only the content document as JSON
        #[arg(long)]
        json: bool,
    },
    /// Update a resume's title, status or content
    Update {
        /// Resume ID
        id: ResumeId,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New status
        #[arg(short, long)]
        status: Option<ResumeStatus>,
        /// JSON file with the replacement content
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Delete a resume
    Delete {
        /// Resume ID
        id: ResumeId,
    },
}

/// Handle a resume command
pub fn handle_resume_command(
    storage: &Storage,
    settings: &Settings,
    owner: Option<OwnerId>,
    cmd: ResumeCommands,
) -> VaultResult<()> {
    if let ResumeCommands::Template = cmd {
        print_json(&ResumeService::default_content());
        return Ok(());
    }

    let owner = owner.ok_or_else(|| {
        VaultError::Validation("No owner given; pass --owner or set RESUME_VAULT_OWNER".into())
    })?;

    let key = load_secret_key(settings)?;
    let cipher = Cipher::new(&key);
    let service = ResumeService::new(&storage.resumes, &cipher).with_audit(&storage.audit);

    match cmd {
        ResumeCommands::Template => {}
        ResumeCommands::Create {
            title,
            status,
            file,
        } => {
            let content = match file {
                Some(path) => read_content_file(&path)?,
                None => read_content_stdin()?,
            };

            let resume = service.create(
                owner,
                NewResume {
                    title,
                    status,
                    content,
                },
            )?;
            report_warnings(&resume);
            println!("Created resume: {} ({})", resume.title, resume.id);
        }
        ResumeCommands::List => {
            let mut resumes = Vec::new();
            for result in service.list(owner)? {
                match result {
                    Ok(resume) => resumes.push(resume),
                    Err(e) => eprintln!("error: {}", e),
                }
            }
            print!("{}", format_resume_list(&resumes));
            if resumes.is_empty() {
                println!();
            }
        }
        ResumeCommands::Show { id, json } => {
            let resume = service.get(id, owner)?;
            report_warnings(&resume);
            if json {
                print_json(&resume.content);
            } else {
                print!("{}", format_resume_details(&resume));
            }
        }
        ResumeCommands::Update {
            id,
            title,
            status,
            file,
        } => {
            let content = file.as_deref().map(read_content_file).transpose()?;

            let resume = service.update(
                id,
                owner,
                ResumeUpdate {
                    title,
                    status,
                    content,
                },
            )?;
            report_warnings(&resume);
            println!("Updated resume: {} ({})", resume.title, resume.id);
        }
        ResumeCommands::Delete { id } => {
            service.delete(id, owner)?;
            println!("Deleted resume: {}", id);
        }
    }

    Ok(())
}

fn report_warnings(resume: &Resume) {
    for line in format_warnings(resume) {
        eprintln!("{}", line);
    }
}

fn print_json(content: &ResumeContent) {
    match serde_json::to_string_pretty(content.as_map()) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("error: {}", e),
    }
}

fn read_content_file(path: &Path) -> VaultResult<ResumeContent> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| VaultError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    parse_content(&text)
}

/// Read content from stdin; empty input yields the starting template
fn read_content_stdin() -> VaultResult<ResumeContent> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| VaultError::Io(format!("Failed to read stdin: {}", e)))?;

    if text.trim().is_empty() {
        return Ok(ResumeService::default_content());
    }
    parse_content(&text)
}

fn parse_content(text: &str) -> VaultResult<ResumeContent> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| VaultError::MalformedContent(format!("Invalid JSON: {}", e)))?;
    ResumeContent::from_value(value)
}

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use resume_vault::crypto::SecretKey;
use resume_vault::models::OwnerId;

struct Vault {
    dir: TempDir,
    key: String,
    owner: String,
}

impl Vault {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
            key: SecretKey::generate().to_base64(),
            owner: OwnerId::new().to_string(),
        }
    }

    /// Command with a clean environment pointing at this vault
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("resume-vault").unwrap();
        cmd.env("RESUME_VAULT_DATA_DIR", self.dir.path())
            .env("RESUME_VAULT_KEY", &self.key)
            .env("RESUME_VAULT_OWNER", &self.owner)
            .env_remove("RESUME_VAULT_PASSPHRASE")
            .env_remove("RUST_LOG");
        cmd
    }

    fn init(&self) {
        self.cmd().arg("init").assert().success();
    }

    fn create(&self, title: &str, content: &str) -> String {
        let output = self
            .cmd()
            .args(["resume", "create", "--title", title])
            .write_stdin(content)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let stdout = String::from_utf8(output).unwrap();
        let start = stdout.rfind('(').unwrap() + 1;
        let end = stdout.rfind(')').unwrap();
        stdout[start..end].to_string()
    }

    fn stored(&self) -> String {
        std::fs::read_to_string(self.dir.path().join("data").join("resumes.json")).unwrap()
    }
}

const JANE: &str =
    r#"{"name": "Jane Doe", "email": "jane@x.com", "phone": "", "skills": ["Rust"]}"#;

#[test]
fn key_generate_prints_a_usable_key() {
    let output = Command::cargo_bin("resume-vault")
        .unwrap()
        .args(["key", "generate"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let key = String::from_utf8(output).unwrap();
    assert!(SecretKey::from_base64(key.trim()).is_ok());
}

#[test]
fn template_needs_no_key() {
    let vault = Vault::new();
    vault
        .cmd()
        .env_remove("RESUME_VAULT_KEY")
        .args(["resume", "template"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"email\": \"\""))
        .stdout(predicate::str::contains("\"experiences\": []"));
}

#[test]
fn init_without_key_prints_one() {
    let vault = Vault::new();
    vault
        .cmd()
        .env_remove("RESUME_VAULT_KEY")
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("export RESUME_VAULT_KEY="));

    let settings = std::fs::read_to_string(vault.dir.path().join("config.json")).unwrap();
    assert!(settings.contains("verification_token"));
}

#[test]
fn init_twice_is_refused() {
    let vault = Vault::new();
    vault.init();
    vault
        .cmd()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn create_show_round_trip_keeps_disk_sealed() {
    let vault = Vault::new();
    vault.init();
    let id = vault.create("Backend CV", JANE);

    let stored = vault.stored();
    assert!(!stored.contains("Jane Doe"));
    assert!(!stored.contains("jane@x.com"));
    assert!(stored.contains("pii:v1:"));

    vault
        .cmd()
        .args(["resume", "show", &id, "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Jane Doe\""))
        .stdout(predicate::str::contains("\"email\": \"jane@x.com\""))
        .stdout(predicate::str::contains("\"phone\": \"\""));

    vault
        .cmd()
        .args(["resume", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backend CV"))
        .stdout(predicate::str::contains("Jane Doe").not());
}

#[test]
fn update_and_delete() {
    let vault = Vault::new();
    vault.init();
    let id = vault.create("Backend CV", JANE);

    vault
        .cmd()
        .args(["resume", "update", &id, "--title", "Platform CV", "--status", "final"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated resume: Platform CV"));

    vault
        .cmd()
        .args(["resume", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status:   final"))
        .stdout(predicate::str::contains("Jane Doe"));

    vault
        .cmd()
        .args(["resume", "update", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one"));

    vault.cmd().args(["resume", "delete", &id]).assert().success();

    vault
        .cmd()
        .args(["resume", "show", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Resume not found"));

    vault
        .cmd()
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE"))
        .stdout(predicate::str::contains("UPDATE"))
        .stdout(predicate::str::contains("DELETE"))
        .stdout(predicate::str::contains("Jane Doe").not());
}

#[test]
fn other_owners_cannot_see_resumes() {
    let vault = Vault::new();
    vault.init();
    let id = vault.create("Backend CV", JANE);

    vault
        .cmd()
        .env("RESUME_VAULT_OWNER", OwnerId::new().to_string())
        .args(["resume", "show", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Resume not found"));
}

#[test]
fn wrong_key_is_rejected_at_startup() {
    let vault = Vault::new();
    vault.init();
    vault.create("Backend CV", JANE);

    vault
        .cmd()
        .env("RESUME_VAULT_KEY", SecretKey::generate().to_base64())
        .args(["resume", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not match"));
}

#[test]
fn missing_key_is_fatal() {
    let vault = Vault::new();
    vault
        .cmd()
        .env_remove("RESUME_VAULT_KEY")
        .args(["resume", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No vault key configured"));
}

#[test]
fn missing_owner_is_rejected() {
    let vault = Vault::new();
    vault.init();
    vault
        .cmd()
        .env_remove("RESUME_VAULT_OWNER")
        .args(["resume", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No owner given"));
}

#[test]
fn non_string_pii_is_rejected() {
    let vault = Vault::new();
    vault.init();
    vault
        .cmd()
        .args(["resume", "create", "--title", "Backend CV"])
        .write_stdin(r#"{"name": "Jane", "phone": 5551234}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be a string"));
}

use proptest::prelude::*;
use serde_json::{json, Map, Value};
use tempfile::TempDir;

use resume_vault::crypto::{Cipher, SecretKey, TOKEN_PREFIX};
use resume_vault::models::{OwnerId, ResumeContent};
use resume_vault::pii::{codec, is_pii_field, seal_for_write, unseal_for_read, FieldIssueKind};
use resume_vault::services::{NewResume, ResumeService};
use resume_vault::storage::ResumeRepository;

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        ".{0,24}".prop_map(Value::String),
    ]
}

fn json_value() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            proptest::collection::btree_map("[a-z_]{1,8}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// A PII slot: absent, null, empty, or any string
fn pii_value() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        Just(Some(Value::Null)),
        Just(Some(json!(""))),
        ".{1,40}".prop_map(|s| Some(Value::String(s))),
        "[a-zA-Z0-9+/]{0,40}".prop_map(|s| Some(Value::String(format!("{}{}", TOKEN_PREFIX, s)))),
    ]
}

prop_compose! {
    fn resume_content()(
        rest in proptest::collection::btree_map("[a-z_]{1,12}", json_value(), 0..6),
        name in pii_value(),
        email in pii_value(),
        phone in pii_value(),
    ) -> ResumeContent {
        let mut map: Map<String, Value> = rest
            .into_iter()
            .filter(|(k, _)| !is_pii_field(k))
            .collect();
        for (field, value) in [("name", name), ("email", email), ("phone", phone)] {
            if let Some(value) = value {
                map.insert(field.to_string(), value);
            }
        }
        ResumeContent::from(map)
    }
}

fn cipher() -> Cipher {
    Cipher::new(&SecretKey::generate())
}

proptest! {
    #[test]
    fn round_trip_restores_every_field(content in resume_content()) {
        let cipher = cipher();
        let owner = OwnerId::new();
        let blob = seal_for_write(&cipher, owner, content.clone()).unwrap();
        let opened = unseal_for_read(&cipher, owner, &blob).unwrap();

        prop_assert!(opened.issues.is_empty());
        prop_assert_eq!(opened.content, content);
    }

    #[test]
    fn sealing_stored_content_again_still_opens(content in resume_content()) {
        let cipher = cipher();
        let owner = OwnerId::new();
        let once = seal_for_write(&cipher, owner, content.clone()).unwrap();
        let stored = codec::decode(once.as_str()).unwrap();
        let twice = seal_for_write(&cipher, owner, stored).unwrap();

        prop_assert_eq!(&once, &twice);
        let opened = unseal_for_read(&cipher, owner, &twice).unwrap();
        prop_assert!(opened.issues.is_empty());
        prop_assert_eq!(opened.content, content);
    }

    #[test]
    fn non_pii_fields_are_untouched(content in resume_content()) {
        let cipher = cipher();
        let owner = OwnerId::new();
        let blob = seal_for_write(&cipher, owner, content.clone()).unwrap();
        let at_rest = codec::decode(blob.as_str()).unwrap();
        let opened = unseal_for_read(&cipher, owner, &blob).unwrap().content;

        for (key, value) in content.iter().filter(|(k, _)| !is_pii_field(k)) {
            let before = serde_json::to_string(value).unwrap();
            prop_assert_eq!(&serde_json::to_string(&at_rest.get(key)).unwrap(), &before);
            prop_assert_eq!(&serde_json::to_string(&opened.get(key)).unwrap(), &before);
        }
    }

    #[test]
    fn absent_pii_is_never_introduced(content in resume_content()) {
        let cipher = cipher();
        let blob = seal_for_write(&cipher, OwnerId::new(), content.clone()).unwrap();
        let at_rest = codec::decode(blob.as_str()).unwrap();

        for field in ["name", "email", "phone"] {
            prop_assert_eq!(at_rest.contains_key(field), content.contains_key(field));
        }
    }

    #[test]
    fn plaintext_never_reaches_the_blob(
        name in "[A-Za-z]{12,24}",
        email in "[a-z]{12,20}@example\\.com",
    ) {
        let cipher = cipher();
        let content = json!({"name": name.clone(), "email": email.clone()});
        let content = ResumeContent::from_value(content).unwrap();
        let blob = seal_for_write(&cipher, OwnerId::new(), content).unwrap();

        prop_assert!(!blob.as_str().contains(&name));
        prop_assert!(!blob.as_str().contains(&email));
    }
}

/// Rewrite one PII token of one stored resume directly in the store file
fn corrupt_stored_field(path: &std::path::Path, title: &str, field: &str) {
    let raw = std::fs::read_to_string(path).unwrap();
    let mut file: Value = serde_json::from_str(&raw).unwrap();

    let record = file["resumes"]
        .as_array_mut()
        .unwrap()
        .iter_mut()
        .find(|r| r["title"] == title)
        .unwrap();

    let mut content = codec::decode(record["content_blob"].as_str().unwrap()).unwrap();
    let token = content.get_str(field).unwrap().to_string();
    // Drop the first three payload bytes so the nonce no longer matches
    let tampered = format!("{}{}", TOKEN_PREFIX, &token[TOKEN_PREFIX.len() + 4..]);
    content.insert(field, Value::String(tampered));
    record["content_blob"] = Value::String(codec::encode(&content));

    std::fs::write(path, serde_json::to_string_pretty(&file).unwrap()).unwrap();
}

#[test]
fn corrupted_field_does_not_hide_the_rest() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("resumes.json");
    let cipher = cipher();
    let owner = OwnerId::new();

    let jane = ResumeContent::from_value(json!({
        "name": "Jane Doe",
        "email": "jane@x.com",
        "phone": "+1 555 0100",
        "skills": ["Rust"]
    }))
    .unwrap();

    let repo = ResumeRepository::new(path.clone());
    let service = ResumeService::new(&repo, &cipher);
    let healthy = service
        .create(owner, NewResume::draft("Healthy CV", jane.clone()))
        .unwrap();
    let damaged = service
        .create(owner, NewResume::draft("Damaged CV", jane.clone()))
        .unwrap();

    corrupt_stored_field(&path, "Damaged CV", "email");

    let reopened = ResumeRepository::new(path);
    reopened.load().unwrap();
    let service = ResumeService::new(&reopened, &cipher);

    let fetched = service.get(damaged.id, owner).unwrap();
    assert_eq!(fetched.content.get_str("name"), Some("Jane Doe"));
    assert_eq!(fetched.content.get_str("phone"), Some("+1 555 0100"));
    assert_eq!(fetched.content.get("skills"), jane.get("skills"));
    assert_eq!(fetched.warnings.len(), 1);
    assert_eq!(fetched.warnings[0].field, "email");
    assert_eq!(fetched.warnings[0].kind, FieldIssueKind::Unreadable);

    let listed: Vec<_> = service
        .list(owner)
        .unwrap()
        .into_iter()
        .map(|r| r.unwrap())
        .collect();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().any(|r| r.id == healthy.id && r.is_complete()));
    assert!(listed.iter().any(|r| r.id == damaged.id && !r.is_complete()));
}

#[test]
fn wrong_key_cannot_read_but_still_returns_documents() {
    let temp_dir = TempDir::new().unwrap();
    let repo = ResumeRepository::new(temp_dir.path().join("resumes.json"));
    let owner = OwnerId::new();

    let writer = cipher();
    let created = ResumeService::new(&repo, &writer)
        .create(
            owner,
            NewResume::draft(
                "Backend CV",
                ResumeContent::from_value(json!({"name": "Jane Doe", "projects": []})).unwrap(),
            ),
        )
        .unwrap();

    let reader = cipher();
    let fetched = ResumeService::new(&repo, &reader)
        .get(created.id, owner)
        .unwrap();

    assert!(fetched.content.get_str("name").unwrap().starts_with(TOKEN_PREFIX));
    assert_eq!(fetched.content.get("projects"), Some(&json!([])));
    assert_eq!(fetched.warnings[0].kind, FieldIssueKind::Unreadable);
}

use serde_json::json;

use crate::validate;

#[test]
fn project_minimal_input_normalizes_tags_to_empty() {
    let input = json!({"title": "Portfolio", "description": "My site"});
    let p = validate::project(&input).expect("valid project");
    assert_eq!(p.title, "Portfolio");
    assert_eq!(p.tags, Vec::<String>::new());
    assert!(p.image.is_none());
    assert!(p.link.is_none());
}

#[test]
fn project_reports_all_errors_in_field_order() {
    // Missing title and empty description must both be reported.
    let input = json!({"description": ""});
    let errs = validate::project(&input).unwrap_err();
    assert_eq!(errs.len(), 2);
    assert_eq!(errs[0].field, "title");
    assert_eq!(errs[0].message, "Required");
    assert_eq!(errs[1].field, "description");
    assert_eq!(errs[1].message, "Must not be empty");
}

#[test]
fn project_title_over_100_chars_rejected() {
    let input = json!({"title": "x".repeat(101), "description": "d"});
    let errs = validate::project(&input).unwrap_err();
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].field, "title");
    assert_eq!(errs[0].message, "Must be at most 100 characters");
}

#[test]
fn project_tags_must_be_string_array() {
    let input = json!({"title": "t", "description": "d", "tags": ["rust", 3]});
    let errs = validate::project(&input).unwrap_err();
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].field, "tags");
    assert_eq!(errs[0].message, "Expected an array of strings");
}

#[test]
fn project_tags_preserve_order() {
    let input = json!({"title": "t", "description": "d", "tags": ["b", "a", "c"]});
    let p = validate::project(&input).expect("valid project");
    assert_eq!(p.tags, vec!["b", "a", "c"]);
}

#[test]
fn message_short_body_is_field_error() {
    let input = json!({"name": "Jo", "email": "jo@example.com", "message": "short"});
    let errs = validate::message(&input).unwrap_err();
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].field, "message");
    assert_eq!(errs[0].message, "Must be at least 10 characters");
}

#[test]
fn message_empty_object_reports_every_required_field() {
    let errs = validate::message(&json!({})).unwrap_err();
    let fields: Vec<&str> = errs.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["name", "email", "message"]);
    assert!(errs.iter().all(|e| e.message == "Required"));
}

#[test]
fn message_subject_optional_but_bounded() {
    let ok = json!({"name": "A", "email": "a@b.c", "message": "long enough text"});
    assert!(validate::message(&ok).unwrap().subject.is_none());

    let too_long = json!({
        "name": "A", "email": "a@b.c", "message": "long enough text",
        "subject": "s".repeat(201)
    });
    let errs = validate::message(&too_long).unwrap_err();
    assert_eq!(errs[0].field, "subject");
}

#[test]
fn skill_proficiency_must_be_integer() {
    let input = json!({"name": "Rust", "icon": "rust.svg", "proficiency": "high"});
    let errs = validate::skill(&input).unwrap_err();
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].field, "proficiency");
    assert_eq!(errs[0].message, "Expected an integer");
}

#[test]
fn skill_length_limits_reported_together() {
    let input = json!({
        "name": "n".repeat(51),
        "icon": "i.svg",
        "proficiency": 80,
        "category": "c".repeat(51)
    });
    let errs = validate::skill(&input).unwrap_err();
    let fields: Vec<&str> = errs.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["name", "category"]);
}

#[test]
fn skill_proficiency_range_is_not_enforced() {
    let input = json!({"name": "Rust", "icon": "rust.svg", "proficiency": 250});
    let s = validate::skill(&input).expect("out-of-range proficiency accepted");
    assert_eq!(s.proficiency, 250);
}

#[test]
fn account_requires_non_empty_credentials() {
    let input = json!({"username": "", "email": "a@b.c"});
    let errs = validate::account(&input).unwrap_err();
    let fields: Vec<&str> = errs.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["username", "password"]);
    assert_eq!(errs[0].message, "Must not be empty");
    assert_eq!(errs[1].message, "Required");
}

#[test]
fn account_optional_fields_coerce_to_none() {
    let input = json!({"username": "alex", "password": "pw", "bio": null});
    let a = validate::account(&input).expect("valid account");
    assert!(a.name.is_none());
    assert!(a.bio.is_none());
    assert!(a.profile_image.is_none());
}

#[test]
fn account_reads_camel_case_profile_image() {
    let input = json!({"username": "alex", "password": "pw", "profileImage": "me.png"});
    let a = validate::account(&input).expect("valid account");
    assert_eq!(a.profile_image.as_deref(), Some("me.png"));
}

#[test]
fn non_object_body_is_single_root_error() {
    let errs = validate::project(&json!([1, 2, 3])).unwrap_err();
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].field, "");
    assert_eq!(errs[0].message, "Expected a JSON object");
}

#[test]
fn empty_project_patch_is_valid_and_empty() {
    let patch = validate::project_patch(&json!({})).expect("empty patch");
    assert!(patch.is_empty());
}

#[test]
fn project_patch_checks_supplied_fields_only() {
    let errs = validate::project_patch(&json!({"title": "t".repeat(101)})).unwrap_err();
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].field, "title");

    let patch = validate::project_patch(&json!({"tags": ["a"]})).expect("valid patch");
    assert_eq!(patch.tags, Some(vec!["a".to_string()]));
    assert!(patch.title.is_none());
}

#[test]
fn skill_patch_rejects_non_integer_proficiency() {
    let errs = validate::skill_patch(&json!({"proficiency": 1.5})).unwrap_err();
    assert_eq!(errs[0].field, "proficiency");
}

//! Per-entity input validation.
//!
//! Each validator takes the untyped JSON body and either produces the
//! normalized creation (or patch) shape, or the full ordered list of
//! field-level violations found in one pass. Callers rely on getting
//! every detectable error at once, not just the first.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::account::NewAccount;
use crate::message::NewMessage;
use crate::project::{NewProject, ProjectPatch};
use crate::skill::{NewSkill, SkillPatch};

/// One violated input constraint, tagged with the offending field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

pub type FieldErrors = Vec<FieldError>;

/// Error accumulator over one JSON object. Field errors are recorded
/// in the order the checks run, which follows field declaration order.
struct Checker<'a> {
    obj: Option<&'a Map<String, Value>>,
    errors: FieldErrors,
}

impl<'a> Checker<'a> {
    fn new(input: &'a Value) -> Self {
        match input.as_object() {
            Some(obj) => Self { obj: Some(obj), errors: Vec::new() },
            None => Self {
                obj: None,
                errors: vec![FieldError {
                    field: String::new(),
                    message: "Expected a JSON object".into(),
                }],
            },
        }
    }

    /// JSON null counts as absent.
    fn field(&self, name: &str) -> Option<&'a Value> {
        self.obj.and_then(|o| o.get(name)).filter(|v| !v.is_null())
    }

    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError { field: field.into(), message: message.into() });
    }

    fn required_string(&mut self, field: &str) -> Option<String> {
        match self.field(field) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.push(field, "Expected a string");
                None
            }
            None => {
                if self.obj.is_some() {
                    self.push(field, "Required");
                }
                None
            }
        }
    }

    fn optional_string(&mut self, field: &str) -> Option<String> {
        match self.field(field) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.push(field, "Expected a string");
                None
            }
            None => None,
        }
    }

    fn required_i32(&mut self, field: &str) -> Option<i32> {
        match self.field(field) {
            Some(Value::Number(n)) => match n.as_i64().and_then(|v| i32::try_from(v).ok()) {
                Some(v) => Some(v),
                None => {
                    self.push(field, "Expected an integer");
                    None
                }
            },
            Some(_) => {
                self.push(field, "Expected an integer");
                None
            }
            None => {
                if self.obj.is_some() {
                    self.push(field, "Required");
                }
                None
            }
        }
    }

    fn optional_i32(&mut self, field: &str) -> Option<i32> {
        match self.field(field) {
            Some(Value::Number(n)) => match n.as_i64().and_then(|v| i32::try_from(v).ok()) {
                Some(v) => Some(v),
                None => {
                    self.push(field, "Expected an integer");
                    None
                }
            },
            Some(_) => {
                self.push(field, "Expected an integer");
                None
            }
            None => None,
        }
    }

    fn optional_string_array(&mut self, field: &str) -> Option<Vec<String>> {
        match self.field(field) {
            Some(Value::Array(items)) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(s) => out.push(s.clone()),
                        _ => {
                            self.push(field, "Expected an array of strings");
                            return None;
                        }
                    }
                }
                Some(out)
            }
            Some(_) => {
                self.push(field, "Expected an array of strings");
                None
            }
            None => None,
        }
    }

    fn non_empty(&mut self, field: &str, value: &Option<String>) {
        if let Some(v) = value {
            if v.is_empty() {
                self.push(field, "Must not be empty");
            }
        }
    }

    fn max_len(&mut self, field: &str, value: &Option<String>, max: usize) {
        if let Some(v) = value {
            if v.chars().count() > max {
                self.push(field, format!("Must be at most {max} characters"));
            }
        }
    }

    fn min_len(&mut self, field: &str, value: &Option<String>, min: usize) {
        if let Some(v) = value {
            if v.chars().count() < min {
                self.push(field, format!("Must be at least {min} characters"));
            }
        }
    }

    fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn account(input: &Value) -> Result<NewAccount, FieldErrors> {
    let mut c = Checker::new(input);
    let username = c.required_string("username");
    c.non_empty("username", &username);
    let password = c.required_string("password");
    c.non_empty("password", &password);
    let name = c.optional_string("name");
    let email = c.optional_string("email");
    let bio = c.optional_string("bio");
    let profile_image = c.optional_string("profileImage");

    match (username, password) {
        (Some(username), Some(password)) if c.ok() => {
            Ok(NewAccount { username, password, name, email, bio, profile_image })
        }
        _ => Err(c.errors),
    }
}

pub fn project(input: &Value) -> Result<NewProject, FieldErrors> {
    let mut c = Checker::new(input);
    let title = c.required_string("title");
    c.max_len("title", &title, 100);
    let description = c.required_string("description");
    c.non_empty("description", &description);
    let image = c.optional_string("image");
    // Absent tags normalize to an empty ordered sequence.
    let tags = c.optional_string_array("tags").unwrap_or_default();
    let link = c.optional_string("link");

    match (title, description) {
        (Some(title), Some(description)) if c.ok() => {
            Ok(NewProject { title, description, image, tags, link })
        }
        _ => Err(c.errors),
    }
}

pub fn skill(input: &Value) -> Result<NewSkill, FieldErrors> {
    let mut c = Checker::new(input);
    let name = c.required_string("name");
    c.max_len("name", &name, 50);
    let icon = c.required_string("icon");
    let proficiency = c.required_i32("proficiency");
    let category = c.optional_string("category");
    c.max_len("category", &category, 50);

    match (name, icon, proficiency) {
        (Some(name), Some(icon), Some(proficiency)) if c.ok() => {
            Ok(NewSkill { name, icon, proficiency, category })
        }
        _ => Err(c.errors),
    }
}

pub fn message(input: &Value) -> Result<NewMessage, FieldErrors> {
    let mut c = Checker::new(input);
    let name = c.required_string("name");
    c.non_empty("name", &name);
    c.max_len("name", &name, 100);
    let email = c.required_string("email");
    let subject = c.optional_string("subject");
    c.max_len("subject", &subject, 200);
    let message = c.required_string("message");
    c.min_len("message", &message, 10);

    match (name, email, message) {
        (Some(name), Some(email), Some(message)) if c.ok() => {
            Ok(NewMessage { name, email, subject, message })
        }
        _ => Err(c.errors),
    }
}

pub fn project_patch(input: &Value) -> Result<ProjectPatch, FieldErrors> {
    let mut c = Checker::new(input);
    let title = c.optional_string("title");
    c.max_len("title", &title, 100);
    let description = c.optional_string("description");
    c.non_empty("description", &description);
    let image = c.optional_string("image");
    let tags = c.optional_string_array("tags");
    let link = c.optional_string("link");

    if c.ok() {
        Ok(ProjectPatch { title, description, image, tags, link })
    } else {
        Err(c.errors)
    }
}

pub fn skill_patch(input: &Value) -> Result<SkillPatch, FieldErrors> {
    let mut c = Checker::new(input);
    let name = c.optional_string("name");
    c.max_len("name", &name, 50);
    let icon = c.optional_string("icon");
    let proficiency = c.optional_i32("proficiency");
    let category = c.optional_string("category");
    c.max_len("category", &category, 50);

    if c.ok() {
        Ok(SkillPatch { name, icon, proficiency, category })
    } else {
        Err(c.errors)
    }
}

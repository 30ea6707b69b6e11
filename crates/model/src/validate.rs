//! Structural guard for CV documents read from untrusted JSON.
//!
//! This checks shape only. It does not check that `sectionConfig.order`
//! names known sections or that ids are unique; import normalizes `order`
//! itself and renderers skip unknown entries.

use crate::error::ValidationError;
use serde_json::{Map, Value};

/// True when `candidate` has the structure of a CV document. Never panics.
pub fn validate(candidate: &Value) -> bool {
    validate_report(candidate).is_ok()
}

/// Like [`validate`], reporting the first failing path. Checks run in a
/// fixed order and stop at the first failure.
pub fn validate_report(candidate: &Value) -> Result<(), ValidationError> {
    let root = object(candidate, "$")?;

    let basic = object_field(root, "basicInfo", "basicInfo")?;
    for key in ["name", "role", "email", "phone"] {
        string_field(basic, key, &format!("basicInfo.{}", key))?;
    }

    let summary = object_field(root, "summary", "summary")?;
    string_field(summary, "content", "summary.content")?;

    each_entry(root, "experiences", |entry, path| {
        for key in ["id", "role", "company", "startDate", "endDate"] {
            string_field(entry, key, &format!("{}.{}", path, key))?;
        }
        array_field(entry, "achievements", &format!("{}.achievements", path)).map(|_| ())
    })?;

    each_entry(root, "education", |entry, path| {
        for key in ["id", "degree", "institute", "location", "startDate", "endDate"] {
            string_field(entry, key, &format!("{}.{}", path, key))?;
        }
        Ok(())
    })?;

    each_entry(root, "skills", |entry, path| {
        for key in ["id", "title", "details"] {
            string_field(entry, key, &format!("{}.{}", path, key))?;
        }
        Ok(())
    })?;

    each_entry(root, "projects", |entry, path| {
        for key in ["id", "name", "description"] {
            string_field(entry, key, &format!("{}.{}", path, key))?;
        }
        array_field(entry, "technologies", &format!("{}.technologies", path)).map(|_| ())
    })?;

    match root.get("activeTheme") {
        Some(Value::String(s)) if !s.is_empty() => {}
        _ => return Err(ValidationError::new("activeTheme", "non-empty string")),
    }

    let config = object_field(root, "sectionConfig", "sectionConfig")?;
    object_field(config, "visibility", "sectionConfig.visibility")?;
    object_field(config, "titles", "sectionConfig.titles")?;
    array_field(config, "order", "sectionConfig.order")?;

    Ok(())
}

fn object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, ValidationError> {
    value
        .as_object()
        .ok_or_else(|| ValidationError::new(path, "object"))
}

fn object_field<'a>(
    parent: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a Map<String, Value>, ValidationError> {
    parent
        .get(key)
        .and_then(Value::as_object)
        .ok_or_else(|| ValidationError::new(path, "object"))
}

fn string_field(parent: &Map<String, Value>, key: &str, path: &str) -> Result<(), ValidationError> {
    match parent.get(key) {
        Some(Value::String(_)) => Ok(()),
        _ => Err(ValidationError::new(path, "string")),
    }
}

fn array_field<'a>(
    parent: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a Vec<Value>, ValidationError> {
    parent
        .get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| ValidationError::new(path, "array"))
}

/// Requires `root[key]` to be an array of objects and runs `check` on each.
fn each_entry<F>(root: &Map<String, Value>, key: &str, mut check: F) -> Result<(), ValidationError>
where
    F: FnMut(&Map<String, Value>, &str) -> Result<(), ValidationError>,
{
    let entries = array_field(root, key, key)?;
    for (i, entry) in entries.iter().enumerate() {
        let path = format!("{}[{}]", key, i);
        let entry = object(entry, &path)?;
        check(entry, &path)?;
    }
    Ok(())
}

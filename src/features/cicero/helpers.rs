use std::collections::HashSet;

use serde_json::Value;

use crate::features::cicero::dto::{District, Official};

// Ids keep their JSON type: 5 and "5" are different officials. Ids never
// collide with derived name/office composites.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdentityKey {
    Text(String),
    Number(String),
    Other(String),
    Composite(String),
}

pub fn identity_key(official: &Official) -> IdentityKey {
    if let Some(key) = official.id().and_then(id_key) {
        return key;
    }

    let record = official.record();
    let composite = format!(
        "{}-{}-{}",
        composite_part(record.get("first_name")),
        composite_part(record.get("last_name")),
        composite_part(record.get("office").and_then(|office| office.get("name"))),
    );
    IdentityKey::Composite(composite.to_lowercase())
}

pub fn dedupe_officials(officials: Vec<Official>) -> Vec<Official> {
    let mut seen = HashSet::new();
    officials
        .into_iter()
        .filter(|official| seen.insert(identity_key(official)))
        .collect()
}

// Query value for the district-scoped official lookup; falsy ids yield none.
pub fn district_id(district: &District) -> Option<String> {
    match district.id().and_then(id_key)? {
        IdentityKey::Text(id) | IdentityKey::Number(id) => Some(id),
        IdentityKey::Other(_) | IdentityKey::Composite(_) => None,
    }
}

pub fn parse_districts(payload: &Value) -> Option<Vec<District>> {
    let items = extract_records(payload, "districts")?;
    Some(items.iter().cloned().map(District::new).collect())
}

pub fn parse_officials(payload: &Value) -> Option<Vec<Official>> {
    let items = extract_records(payload, "officials")?;
    Some(items.iter().cloned().map(Official::new).collect())
}

pub fn has_results(payload: &Value) -> bool {
    payload
        .get("response")
        .and_then(|response| response.get("results"))
        .is_some_and(|results| !results.is_null())
}

fn extract_records<'a>(payload: &'a Value, field: &str) -> Option<&'a Vec<Value>> {
    payload
        .get("response")?
        .get("results")?
        .get(field)?
        .as_array()
}

// null, false, 0 and "" count as a missing id.
fn id_key(value: &Value) -> Option<IdentityKey> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(IdentityKey::Text(text.clone())),
        Value::Number(number) => number_key(number).map(IdentityKey::Number),
        other => Some(IdentityKey::Other(other.to_string())),
    }
}

fn number_key(number: &serde_json::Number) -> Option<String> {
    if let Some(integer) = number.as_i64() {
        return (integer != 0).then(|| integer.to_string());
    }
    if let Some(integer) = number.as_u64() {
        return Some(integer.to_string());
    }
    number
        .as_f64()
        .filter(|float| *float != 0.0 && !float.is_nan())
        .map(|float| float.to_string())
}

fn composite_part(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

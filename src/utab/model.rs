use crate::error::{Result, UtabError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geo {
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub lng: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub suite: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
    #[serde(default)]
    pub geo: Geo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "catchPhrase")]
    pub catch_phrase: String,
    // The upstream resource calls this field "bs"
    #[serde(default, rename = "bs")]
    pub business_strategy: String,
}

/// A user profile as served by the upstream resource.
///
/// Every string field defaults to empty when absent from the payload, never
/// null, so downstream formatting needs no null checks. A user is built once
/// from a raw payload and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub company: Company,
}

impl User {
    /// Builds a user from a raw decoded JSON value. Missing or blank fields
    /// are tolerated and filled with defaults; only a value that is not an
    /// object at all is an error.
    pub fn from_value(raw: Value) -> Result<User> {
        if !raw.is_object() {
            return Err(UtabError::MalformedRecord(format!(
                "expected a JSON object, got {}",
                json_kind(&raw)
            )));
        }
        serde_json::from_value(raw).map_err(|e| UtabError::MalformedRecord(e.to_string()))
    }

    /// Resolves a dotted field path (e.g. `name`, `address.city`,
    /// `company.name`) to its string representation. Unknown or missing
    /// segments resolve to the empty string, never an error.
    pub fn field(&self, path: &str) -> String {
        let value = match serde_json::to_value(self) {
            Ok(v) => v,
            Err(_) => return String::new(),
        };
        let pointer = format!("/{}", path.split('.').collect::<Vec<_>>().join("/"));
        match value.pointer(&pointer) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(_) | None => String::new(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_fills_missing_fields_with_defaults() {
        let user = User::from_value(json!({ "id": 3, "name": "Bob" })).unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.name, "Bob");
        assert_eq!(user.email, "");
        assert_eq!(user.address.city, "");
        assert_eq!(user.company.name, "");
        assert_eq!(user.address.geo.lat, "");
    }

    #[test]
    fn from_value_rejects_non_objects() {
        assert!(User::from_value(json!([1, 2, 3])).is_err());
        assert!(User::from_value(json!("hello")).is_err());
        assert!(User::from_value(json!(null)).is_err());
    }

    #[test]
    fn from_value_maps_upstream_field_names() {
        let user = User::from_value(json!({
            "id": 1,
            "company": { "name": "Acme", "catchPhrase": "Go far", "bs": "synergize" }
        }))
        .unwrap();
        assert_eq!(user.company.catch_phrase, "Go far");
        assert_eq!(user.company.business_strategy, "synergize");
    }

    #[test]
    fn field_resolves_top_level_and_nested_paths() {
        let user = User::from_value(json!({
            "id": 7,
            "name": "Amy",
            "address": { "city": "Berlin" },
            "company": { "name": "Acme" }
        }))
        .unwrap();
        assert_eq!(user.field("name"), "Amy");
        assert_eq!(user.field("id"), "7");
        assert_eq!(user.field("address.city"), "Berlin");
        assert_eq!(user.field("company.name"), "Acme");
    }

    #[test]
    fn field_resolves_missing_paths_to_empty_string() {
        let user = User::default();
        assert_eq!(user.field("address.city"), "");
        assert_eq!(user.field("no.such.path"), "");
        assert_eq!(user.field("address"), "");
    }
}

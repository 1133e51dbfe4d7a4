//! Ordered, point-in-time view of an entity's fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};

/// Ordered mapping from field name to JSON value.
///
/// Field order is insertion order and is kept through serialization, so the
/// persisted JSON object lists fields exactly as the entity produced them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(Map<String, Value>);

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. Re-inserting a name replaces the value in place.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field names in snapshot order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Required string field.
    pub fn require_str(&self, name: &str) -> DomainResult<&str> {
        match self.0.get(name) {
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(DomainError::validation(format!("field '{name}' must be a string"))),
            None => Err(DomainError::validation(format!("missing field '{name}'"))),
        }
    }

    /// Required numeric field.
    pub fn require_f64(&self, name: &str) -> DomainResult<f64> {
        match self.0.get(name) {
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| DomainError::validation(format!("field '{name}' is out of range"))),
            Some(_) => Err(DomainError::validation(format!("field '{name}' must be a number"))),
            None => Err(DomainError::validation(format!("missing field '{name}'"))),
        }
    }
}

impl From<Map<String, Value>> for Snapshot {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

impl From<Snapshot> for Value {
    fn from(value: Snapshot) -> Self {
        Value::Object(value.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_when_serialized() {
        let snapshot = Snapshot::new()
            .with("zeta", 1)
            .with("alpha", "a")
            .with("mid", 2.5);

        let names: Vec<&str> = snapshot.field_names().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);

        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"{"zeta":1,"alpha":"a","mid":2.5}"#);
    }

    #[test]
    fn reinserting_replaces_value_without_reordering() {
        let snapshot = Snapshot::new().with("a", 1).with("b", 2).with("a", 3);
        let names: Vec<&str> = snapshot.field_names().collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(snapshot.get("a"), Some(&Value::from(3)));
    }

    #[test]
    fn require_helpers_report_missing_and_mistyped_fields() {
        let snapshot = Snapshot::new().with("name", "Budget").with("balance", 10.0);

        assert_eq!(snapshot.require_str("name").unwrap(), "Budget");
        assert_eq!(snapshot.require_f64("balance").unwrap(), 10.0);

        match snapshot.require_str("owner").unwrap_err() {
            DomainError::Validation(msg) if msg.contains("missing field 'owner'") => {}
            other => panic!("unexpected error: {other:?}"),
        }
        match snapshot.require_f64("name").unwrap_err() {
            DomainError::Validation(msg) if msg.contains("must be a number") => {}
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

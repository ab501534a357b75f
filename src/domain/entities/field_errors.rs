//! Per-field validation message store.

use std::collections::BTreeMap;
use validator::ValidationErrors;

use super::credentials::CredentialField;

/// Field error map: at most one human-readable message per credential field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<CredentialField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map from a failed schema run, keeping the first violation
    /// reported for each field.
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let mut map = BTreeMap::new();

        for (name, violations) in errors.field_errors() {
            let Some(field) = CredentialField::from_name(&name) else {
                continue;
            };

            let message = violations
                .iter()
                .find_map(|v| v.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| format!("Invalid {field}"));

            map.insert(field, message);
        }

        Self(map)
    }

    pub fn get(&self, field: CredentialField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[cfg(test)]
    pub fn set(&mut self, field: CredentialField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear(&mut self, field: CredentialField) {
        self.0.remove(&field);
    }

    pub fn clear_all(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First message in field declaration order (email before password).
    pub fn first(&self) -> Option<(CredentialField, &str)> {
        self.0.iter().next().map(|(f, m)| (*f, m.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (CredentialField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

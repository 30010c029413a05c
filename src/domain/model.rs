use serde::{Deserialize, Serialize};

/// A random person name as returned by the name service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamePair {
    pub first_name: String,
    pub last_name: String,
}

impl NamePair {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Joke service payload: `{"value": {"joke": "..."}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct JokeEnvelope {
    pub value: JokeValue,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JokeValue {
    pub joke: String,
}

impl JokeEnvelope {
    pub fn into_text(self) -> String {
        self.value.joke
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_pair_uses_snake_case_fields() {
        let name: NamePair =
            serde_json::from_str(r#"{"first_name": "Ada", "last_name": "Lovelace"}"#).unwrap();
        assert_eq!(name, NamePair::new("Ada", "Lovelace"));
    }

    #[test]
    fn test_name_pair_requires_both_fields() {
        assert!(serde_json::from_str::<NamePair>(r#"{"first_name": "Ada"}"#).is_err());
        assert!(serde_json::from_str::<NamePair>(r#"{"first_name": 1, "last_name": "x"}"#).is_err());
    }

    #[test]
    fn test_joke_envelope_ignores_extra_fields() {
        let body = r#"{"type": "success", "value": {"id": 7, "joke": "  spaced  ", "categories": []}}"#;
        let envelope: JokeEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.into_text(), "  spaced  ");
    }
}

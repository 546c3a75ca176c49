use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;
use uuid::Uuid;

pub trait Entity {
    fn id(&self) -> &ID;
}

/// Identifier of a stored record.
///
/// Seeded records use short ids like `s1` or `b4`, generated ids are a
/// one letter prefix followed by a random uuid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ID(String);

impl ID {
    /// Generates a new unique id starting with `prefix`
    pub fn generate(prefix: &str) -> Self {
        Self(format!("{}{}", prefix, Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn inner(self) -> String {
        self.0
    }
}

impl Default for ID {
    fn default() -> Self {
        Self::generate("")
    }
}

impl Display for ID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ID {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Error, Debug)]
pub enum InvalidIDError {
    #[error("ID: {0} is malformed")]
    Malformed(String),
}

impl FromStr for ID {
    type Err = InvalidIDError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.chars().any(char::is_whitespace) {
            return Err(InvalidIDError::Malformed(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_generates_unique_prefixed_ids() {
        let a = ID::generate("b");
        let b = ID::generate("b");
        assert!(a.as_str().starts_with('b'));
        assert_ne!(a, b);
    }

    #[test]
    fn it_rejects_malformed_ids() {
        assert!("".parse::<ID>().is_err());
        assert!("s 1".parse::<ID>().is_err());
        assert_eq!("s1".parse::<ID>().unwrap(), ID::from("s1"));
    }

    #[test]
    fn it_serializes_as_plain_string() {
        let id = ID::from("p3");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"p3\"");
        let parsed: ID = serde_json::from_str("\"p3\"").unwrap();
        assert_eq!(parsed, id);
    }
}

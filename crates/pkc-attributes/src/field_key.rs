use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::AttributeType;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldKeyError {
    #[error("invalid field key '{value}': expected name:TYPE or name:TYPE:instance")]
    InvalidShape { value: String },
    #[error("invalid field key '{value}': unknown attribute type '{declared}'")]
    UnknownType { value: String, declared: String },
}

/// Join point between a rendered form field and the descriptor it was
/// generated from. Wire form `<name>:<TYPE>[:<instance>]`; the declared
/// type is informational only — the descriptor's type is authoritative
/// during marshalling, so a stale type segment is tolerated there.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldKey {
    pub name: String,
    pub declared: AttributeType,
    pub instance: Option<String>,
}

impl FieldKey {
    pub fn new(name: impl Into<String>, declared: AttributeType) -> Self {
        FieldKey {
            name: name.into(),
            declared,
            instance: None,
        }
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    pub fn parse(value: &str) -> Result<Self, FieldKeyError> {
        let mut segments = value.split(':');
        let name = segments.next().unwrap_or_default();
        let declared = segments.next();
        let instance = segments.next();
        if name.is_empty() || segments.next().is_some() {
            return Err(FieldKeyError::InvalidShape {
                value: value.to_string(),
            });
        }
        let declared = declared.ok_or_else(|| FieldKeyError::InvalidShape {
            value: value.to_string(),
        })?;
        let declared_type =
            AttributeType::parse(declared).ok_or_else(|| FieldKeyError::UnknownType {
                value: value.to_string(),
                declared: declared.to_string(),
            })?;
        if instance.is_some_and(str::is_empty) {
            return Err(FieldKeyError::InvalidShape {
                value: value.to_string(),
            });
        }
        Ok(FieldKey {
            name: name.to_string(),
            declared: declared_type,
            instance: instance.map(str::to_string),
        })
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.declared)?;
        if let Some(instance) = &self.instance {
            write!(f, ":{instance}")?;
        }
        Ok(())
    }
}

impl FromStr for FieldKey {
    type Err = FieldKeyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::parse(s)
    }
}

impl Serialize for FieldKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for FieldKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FieldKey::parse(&s).map_err(serde::de::Error::custom)
    }
}

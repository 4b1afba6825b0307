use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

pub type AttributeName = String;
pub type KindName = String;

/// Declared type of a configurable attribute. Issued by the backend and
/// immutable for the lifetime of the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttributeType {
    Boolean,
    Integer,
    Float,
    String,
    Text,
    Date,
    Time,
    Datetime,
    File,
    Secret,
    Credential,
    Json,
}

impl AttributeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::Boolean => "BOOLEAN",
            AttributeType::Integer => "INTEGER",
            AttributeType::Float => "FLOAT",
            AttributeType::String => "STRING",
            AttributeType::Text => "TEXT",
            AttributeType::Date => "DATE",
            AttributeType::Time => "TIME",
            AttributeType::Datetime => "DATETIME",
            AttributeType::File => "FILE",
            AttributeType::Secret => "SECRET",
            AttributeType::Credential => "CREDENTIAL",
            AttributeType::Json => "JSON",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let ty = match value {
            "BOOLEAN" => AttributeType::Boolean,
            "INTEGER" => AttributeType::Integer,
            "FLOAT" => AttributeType::Float,
            "STRING" => AttributeType::String,
            "TEXT" => AttributeType::Text,
            "DATE" => AttributeType::Date,
            "TIME" => AttributeType::Time,
            "DATETIME" => AttributeType::Datetime,
            "FILE" => AttributeType::File,
            "SECRET" => AttributeType::Secret,
            "CREDENTIAL" => AttributeType::Credential,
            "JSON" => AttributeType::Json,
            _ => return None,
        };
        Some(ty)
    }
}

impl std::fmt::Display for AttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describes one configurable field of an object (used to generate the form).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDescriptor {
    pub uuid: Uuid,
    pub name: AttributeName,
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub required: bool,
    pub read_only: bool,
    pub visible: bool,
    pub list: bool,
    pub multi_select: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_regex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_callback: Option<AttributeCallbackDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<AttributeContent>,
}

/// Server-driven dynamic option list attached to a descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeCallbackDescriptor {
    pub callback_context: String,
    pub callback_method: String,
    pub mappings: Vec<AttributeCallbackMapping>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeCallbackMapping {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_type: Option<AttributeType>,
    pub to: String,
    pub targets: Vec<CallbackMappingTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CallbackMappingTarget {
    PathVariable,
    RequestParameter,
    Body,
}

/// Content envelope: the actual payload under `value`, plus any
/// descriptor-specific extra fields the backend attaches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentObject {
    pub value: Value,
    #[serde(flatten, default, skip_serializing_if = "IndexMap::is_empty")]
    pub extras: IndexMap<String, Value>,
}

impl ContentObject {
    pub fn new(value: impl Into<Value>) -> Self {
        ContentObject {
            value: value.into(),
            extras: IndexMap::new(),
        }
    }
}

/// The marshalled content of an attribute. File, credential and json
/// attributes carry structured payloads the console does not interpret,
/// so a raw passthrough arm is part of the wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeContent {
    Object(ContentObject),
    List(Vec<Value>),
    Raw(Value),
}

impl AttributeContent {
    pub fn wrapped(value: impl Into<Value>) -> Self {
        AttributeContent::Object(ContentObject::new(value))
    }
}

/// The marshalled unit sent to the backend. `uuid` is present only when
/// updating a previously persisted attribute instance; absence means the
/// backend assigns or matches by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: AttributeName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    pub content: AttributeContent,
}

//! Attribute data model and form-value marshalling for the PKI console.

pub mod catalog;
mod collect;
mod field_key;
mod model;
pub mod validate;

pub use collect::{attribute_bucket, collect_form_attributes};
pub use field_key::{FieldKey, FieldKeyError};
pub use model::*;
pub use validate::{DescriptorError, validate_descriptor, validate_descriptors};

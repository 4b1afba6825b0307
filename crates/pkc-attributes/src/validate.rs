//! Descriptor sanity checks run when a descriptor set is loaded, before any
//! form is generated from it. The marshalling layer never calls these;
//! required-ness and format validation belong to the form layer.

use std::collections::HashSet;

use regex::Regex;
use thiserror::Error;

use crate::{AttributeDescriptor, AttributeName};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("descriptor {uuid} has an empty name")]
    EmptyName { uuid: String },
    #[error("descriptor '{name}' has an empty label")]
    EmptyLabel { name: AttributeName },
    #[error("descriptor set contains duplicate name '{name}'")]
    DuplicateName { name: AttributeName },
    #[error("descriptor '{name}' is multiSelect but not list")]
    MultiSelectWithoutList { name: AttributeName },
    #[error("descriptor '{name}' has an invalid validation regex: {reason}")]
    InvalidRegex { name: AttributeName, reason: String },
    #[error("descriptor '{name}' is read-only but carries no content")]
    ReadOnlyWithoutContent { name: AttributeName },
}

pub fn validate_descriptor(descriptor: &AttributeDescriptor) -> Result<(), DescriptorError> {
    if descriptor.name.is_empty() {
        return Err(DescriptorError::EmptyName {
            uuid: descriptor.uuid.to_string(),
        });
    }
    if descriptor.label.is_empty() {
        return Err(DescriptorError::EmptyLabel {
            name: descriptor.name.clone(),
        });
    }
    if descriptor.multi_select && !descriptor.list {
        return Err(DescriptorError::MultiSelectWithoutList {
            name: descriptor.name.clone(),
        });
    }
    if let Some(pattern) = &descriptor.validation_regex
        && let Err(err) = Regex::new(pattern)
    {
        return Err(DescriptorError::InvalidRegex {
            name: descriptor.name.clone(),
            reason: err.to_string(),
        });
    }
    if descriptor.read_only && descriptor.content.is_none() {
        return Err(DescriptorError::ReadOnlyWithoutContent {
            name: descriptor.name.clone(),
        });
    }
    Ok(())
}

pub fn validate_descriptors(descriptors: &[AttributeDescriptor]) -> Result<(), DescriptorError> {
    let mut names = HashSet::new();
    for descriptor in descriptors {
        validate_descriptor(descriptor)?;
        if !names.insert(&descriptor.name) {
            return Err(DescriptorError::DuplicateName {
                name: descriptor.name.clone(),
            });
        }
    }
    Ok(())
}

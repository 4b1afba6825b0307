//! Descriptor collections keyed by function group and kind, plus the
//! display-label table for descriptor field names.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{AttributeDescriptor, KindName};

/// Backend-defined category determining which descriptor set applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FunctionGroupCode {
    CredentialProvider,
    AuthorityProvider,
    LegacyAuthorityProvider,
    DiscoveryProvider,
    ComplianceProvider,
    EntityProvider,
}

impl FunctionGroupCode {
    pub const ALL: [FunctionGroupCode; 6] = [
        FunctionGroupCode::CredentialProvider,
        FunctionGroupCode::AuthorityProvider,
        FunctionGroupCode::LegacyAuthorityProvider,
        FunctionGroupCode::DiscoveryProvider,
        FunctionGroupCode::ComplianceProvider,
        FunctionGroupCode::EntityProvider,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionGroupCode::CredentialProvider => "credentialProvider",
            FunctionGroupCode::AuthorityProvider => "authorityProvider",
            FunctionGroupCode::LegacyAuthorityProvider => "legacyAuthorityProvider",
            FunctionGroupCode::DiscoveryProvider => "discoveryProvider",
            FunctionGroupCode::ComplianceProvider => "complianceProvider",
            FunctionGroupCode::EntityProvider => "entityProvider",
        }
    }
}

impl std::fmt::Display for FunctionGroupCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete set of descriptors a connector exposes, per function group and
/// kind. Fetched once per editing session and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeDescriptorCollection(
    IndexMap<FunctionGroupCode, IndexMap<KindName, Vec<AttributeDescriptor>>>,
);

impl AttributeDescriptorCollection {
    pub fn get(&self, group: FunctionGroupCode, kind: &str) -> Option<&[AttributeDescriptor]> {
        self.0.get(&group)?.get(kind).map(Vec::as_slice)
    }

    pub fn function_groups(&self) -> impl Iterator<Item = FunctionGroupCode> + '_ {
        self.0.keys().copied()
    }

    pub fn kinds(&self, group: FunctionGroupCode) -> impl Iterator<Item = &str> {
        self.0.get(&group).into_iter().flat_map(|kinds| kinds.keys().map(String::as_str))
    }
}

static FIELD_NAME_LABELS: Lazy<IndexMap<&'static str, &'static str>> = Lazy::new(|| {
    IndexMap::from([
        ("name", "Name"),
        ("credentialProvider", "Credential Provider"),
        ("authorityProvider", "Authority Provider"),
        ("discoveryProvider", "Discovery Provider"),
        ("legacyAuthorityProvider", "Legacy Authority Provider"),
        ("complianceProvider", "Compliance Provider"),
        ("entityProvider", "Entity Provider"),
    ])
});

/// Display label for a descriptor field name, falling back to the name itself.
pub fn field_name_label(name: &str) -> &str {
    FIELD_NAME_LABELS.get(name).copied().unwrap_or(name)
}

use pkc_attributes::Attribute;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaComplianceProfileDto {
    pub uuid: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaProfileDto {
    pub uuid: Uuid,
    pub name: String,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub authority_instance_uuid: Uuid,
    pub authority_instance_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_protocols: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_profiles: Option<Vec<RaComplianceProfileDto>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaAuthorizedClientDto {
    pub uuid: Uuid,
    pub name: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaAcmeLinkDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_certificate_attributes: Option<Vec<Attribute>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revoke_certificate_attributes: Option<Vec<Attribute>>,
    pub acme_available: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RaComplianceProfileModel {
    pub uuid: Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RaProfileModel {
    pub uuid: Uuid,
    pub name: String,
    pub enabled: bool,
    pub description: Option<String>,
    pub authority_instance_uuid: Uuid,
    pub authority_instance_name: String,
    pub attributes: Vec<Attribute>,
    pub enabled_protocols: Option<Vec<String>>,
    pub compliance_profiles: Option<Vec<RaComplianceProfileModel>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RaAuthorizedClientModel {
    pub uuid: Uuid,
    pub name: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RaAcmeLinkModel {
    pub uuid: Option<Uuid>,
    pub name: Option<String>,
    pub directory_url: Option<String>,
    pub issue_certificate_attributes: Option<Vec<Attribute>>,
    pub revoke_certificate_attributes: Option<Vec<Attribute>>,
    pub acme_available: bool,
}

impl From<RaComplianceProfileDto> for RaComplianceProfileModel {
    fn from(dto: RaComplianceProfileDto) -> Self {
        RaComplianceProfileModel {
            uuid: dto.uuid,
            name: dto.name,
            description: dto.description,
        }
    }
}

impl From<RaProfileDto> for RaProfileModel {
    fn from(dto: RaProfileDto) -> Self {
        RaProfileModel {
            uuid: dto.uuid,
            name: dto.name,
            enabled: dto.enabled,
            description: dto.description,
            authority_instance_uuid: dto.authority_instance_uuid,
            authority_instance_name: dto.authority_instance_name,
            // An absent attribute list means none are set, not unknown.
            attributes: dto.attributes.unwrap_or_default(),
            enabled_protocols: dto.enabled_protocols,
            compliance_profiles: dto
                .compliance_profiles
                .map(|profiles| profiles.into_iter().map(Into::into).collect()),
        }
    }
}

impl From<RaAuthorizedClientDto> for RaAuthorizedClientModel {
    fn from(dto: RaAuthorizedClientDto) -> Self {
        RaAuthorizedClientModel {
            uuid: dto.uuid,
            name: dto.name,
            enabled: dto.enabled,
        }
    }
}

impl From<RaAcmeLinkDto> for RaAcmeLinkModel {
    fn from(dto: RaAcmeLinkDto) -> Self {
        RaAcmeLinkModel {
            uuid: dto.uuid,
            name: dto.name,
            directory_url: dto.directory_url,
            issue_certificate_attributes: dto.issue_certificate_attributes,
            revoke_certificate_attributes: dto.revoke_certificate_attributes,
            acme_available: dto.acme_available,
        }
    }
}

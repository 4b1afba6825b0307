use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCertificateDto {
    pub uuid: Uuid,
    pub fingerprint: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDto {
    pub uuid: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub system_role: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub uuid: Uuid,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub enabled: bool,
    pub system_user: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailDto {
    #[serde(flatten)]
    pub user: UserDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<UserCertificateDto>,
    #[serde(default)]
    pub roles: Vec<RoleDto>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserCertificateModel {
    pub uuid: Uuid,
    pub fingerprint: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoleModel {
    pub uuid: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub system_role: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserModel {
    pub uuid: Uuid,
    pub username: String,
    pub description: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub enabled: bool,
    pub system_user: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserDetailModel {
    pub user: UserModel,
    pub certificate: Option<UserCertificateModel>,
    pub roles: Vec<RoleModel>,
}

impl From<UserCertificateDto> for UserCertificateModel {
    fn from(dto: UserCertificateDto) -> Self {
        UserCertificateModel {
            uuid: dto.uuid,
            fingerprint: dto.fingerprint,
        }
    }
}

impl From<RoleDto> for RoleModel {
    fn from(dto: RoleDto) -> Self {
        RoleModel {
            uuid: dto.uuid,
            name: dto.name,
            description: dto.description,
            system_role: dto.system_role,
        }
    }
}

impl From<UserDto> for UserModel {
    fn from(dto: UserDto) -> Self {
        UserModel {
            uuid: dto.uuid,
            username: dto.username,
            description: dto.description,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            enabled: dto.enabled,
            system_user: dto.system_user,
        }
    }
}

impl From<UserDetailDto> for UserDetailModel {
    fn from(dto: UserDetailDto) -> Self {
        UserDetailModel {
            user: dto.user.into(),
            certificate: dto.certificate.map(Into::into),
            roles: dto.roles.into_iter().map(Into::into).collect(),
        }
    }
}

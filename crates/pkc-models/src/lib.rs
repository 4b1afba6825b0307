//! Console-side view models and DTO conversions for the PKI console.

mod common;
mod error;
mod ra_profiles;
mod users;

pub use common::{DeleteObjectErrorDto, DeleteObjectErrorModel};
pub use error::{ApiErrorBody, HttpErrorResponse, extract_error};
pub use ra_profiles::{
    RaAcmeLinkDto, RaAcmeLinkModel, RaAuthorizedClientDto, RaAuthorizedClientModel,
    RaComplianceProfileDto, RaComplianceProfileModel, RaProfileDto, RaProfileModel,
};
pub use users::{
    RoleDto, RoleModel, UserCertificateDto, UserCertificateModel, UserDetailDto, UserDetailModel,
    UserDto, UserModel,
};

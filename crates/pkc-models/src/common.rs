use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Returned by delete endpoints when an object is still referenced elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteObjectErrorDto {
    pub uuid: Uuid,
    pub name: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteObjectErrorModel {
    pub uuid: Uuid,
    pub name: String,
    pub message: String,
}

impl From<DeleteObjectErrorDto> for DeleteObjectErrorModel {
    fn from(dto: DeleteObjectErrorDto) -> Self {
        DeleteObjectErrorModel {
            uuid: dto.uuid,
            name: dto.name,
            message: dto.message,
        }
    }
}

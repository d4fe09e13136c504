use serde::{Deserialize, Serialize};
use std::fmt;

/// The authenticated user as persisted by the login flow. The component only
/// ever reads it; it is never refreshed or mutated here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "rol", default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

impl SessionUser {
    /// Only nursing and medical staff may create appointments. A session
    /// without a role is treated as restricted, not as an error.
    pub fn can_create_appointments(&self) -> bool {
        matches!(self.role, Some(UserRole::Nurse) | Some(UserRole::Physician))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "enfermero")]
    Nurse,
    #[serde(rename = "medico")]
    Physician,
    #[serde(rename = "paciente")]
    Patient,
    #[serde(rename = "admin")]
    Admin,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Nurse => write!(f, "enfermero"),
            UserRole::Physician => write!(f, "medico"),
            UserRole::Patient => write!(f, "paciente"),
            UserRole::Admin => write!(f, "admin"),
        }
    }
}

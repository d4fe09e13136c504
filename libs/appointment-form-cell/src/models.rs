// libs/appointment-form-cell/src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;

// ==============================================================================
// REFERENCE DATA MODELS
// ==============================================================================

/// Display-only projection of the patient the appointment is for. Fetched once
/// per mount, keyed by the route-supplied identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "nombre")]
    pub first_name: String,

    #[serde(rename = "apellido")]
    pub last_name: String,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One entry of the physician selector. The backend denormalizes the person's
/// name into a nested `usuario` sub-record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Physician {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "usuario")]
    pub user: PhysicianUser,

    #[serde(rename = "especialidad")]
    pub specialty: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicianUser {
    #[serde(rename = "nombre")]
    pub first_name: String,

    #[serde(rename = "apellido")]
    pub last_name: String,
}

impl Physician {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.user.first_name, self.user.last_name)
    }

    /// Selector label: "Carlos Ruiz - Cardiología".
    pub fn display_label(&self) -> String {
        format!("{} - {}", self.full_name(), self.specialty)
    }
}

// ==============================================================================
// APPOINTMENT DRAFT
// ==============================================================================

/// The in-progress appointment exactly as the backend expects it. Field names
/// are pinned to the existing wire vocabulary; every value is carried as a
/// string and unfilled optionals submit as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentDraft {
    #[serde(rename = "fecha")]
    pub date: String,

    #[serde(rename = "hora")]
    pub time: String,

    #[serde(rename = "paciente")]
    pub patient_id: String,

    #[serde(rename = "medico")]
    pub physician_id: String,

    #[serde(rename = "estado")]
    pub status: AppointmentStatus,

    #[serde(rename = "presionArterial")]
    pub blood_pressure: String,

    #[serde(rename = "temperatura")]
    pub temperature: String,

    #[serde(rename = "estudios")]
    pub studies: String,

    #[serde(rename = "observaciones")]
    pub notes: String,
}

impl AppointmentDraft {
    /// Initial values for a fresh mount. The patient identifier is pre-filled
    /// from the route when present; everything else starts empty.
    pub fn initial(patient_id: Option<&str>) -> Self {
        Self {
            date: String::new(),
            time: String::new(),
            patient_id: patient_id.unwrap_or_default().to_string(),
            physician_id: String::new(),
            status: AppointmentStatus::default(),
            blood_pressure: String::new(),
            temperature: String::new(),
            studies: String::new(),
            notes: String::new(),
        }
    }

}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[default]
    #[serde(rename = "pendiente")]
    Pending,

    #[serde(rename = "confirmada")]
    Confirmed,

    #[serde(rename = "cancelada")]
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_wire(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pendiente",
            AppointmentStatus::Confirmed => "confirmada",
            AppointmentStatus::Cancelled => "cancelada",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "pendiente" => Some(AppointmentStatus::Pending),
            "confirmada" => Some(AppointmentStatus::Confirmed),
            "cancelada" => Some(AppointmentStatus::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

// ==============================================================================
// FORM FIELDS
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Date,
    Time,
    PatientId,
    PhysicianId,
    Status,
    BloodPressure,
    Temperature,
    Studies,
    Notes,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Date,
        Field::Time,
        Field::PatientId,
        Field::PhysicianId,
        Field::Status,
        Field::BloodPressure,
        Field::Temperature,
        Field::Studies,
        Field::Notes,
    ];

    /// Wire/input name, matching the draft's serialized field names.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Date => "fecha",
            Field::Time => "hora",
            Field::PatientId => "paciente",
            Field::PhysicianId => "medico",
            Field::Status => "estado",
            Field::BloodPressure => "presionArterial",
            Field::Temperature => "temperatura",
            Field::Studies => "estudios",
            Field::Notes => "observaciones",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }
}

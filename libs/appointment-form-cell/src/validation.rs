use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{AppointmentDraft, Field};

/// Calendar dates arrive from a date input as ISO `YYYY-MM-DD`.
const DATE_FORMAT: &str = "%Y-%m-%d";

pub const MSG_DATE_REQUIRED: &str = "Fecha es requerida";
pub const MSG_DATE_INVALID: &str = "Fecha no es válida";
pub const MSG_TIME_REQUIRED: &str = "Hora es requerida";
pub const MSG_PATIENT_REQUIRED: &str = "Paciente es requerido";
pub const MSG_PHYSICIAN_REQUIRED: &str = "Médico es requerido";
pub const MSG_BLOOD_PRESSURE_NUMERIC: &str = "Presión arterial debe ser un número";
pub const MSG_TEMPERATURE_NUMERIC: &str = "Temperatura debe ser un número";

/// Validates one field of the draft, returning the message to display beneath
/// it on failure. There is no cross-field validation.
pub fn validate_field(draft: &AppointmentDraft, field: Field) -> Result<(), String> {
    match field {
        Field::Date => {
            if draft.date.is_empty() {
                return Err(MSG_DATE_REQUIRED.to_string());
            }
            if NaiveDate::parse_from_str(&draft.date, DATE_FORMAT).is_err() {
                return Err(MSG_DATE_INVALID.to_string());
            }
            Ok(())
        }
        Field::Time => {
            if draft.time.is_empty() {
                return Err(MSG_TIME_REQUIRED.to_string());
            }
            Ok(())
        }
        Field::PatientId => {
            if draft.patient_id.is_empty() {
                return Err(MSG_PATIENT_REQUIRED.to_string());
            }
            Ok(())
        }
        Field::PhysicianId => {
            if draft.physician_id.is_empty() {
                return Err(MSG_PHYSICIAN_REQUIRED.to_string());
            }
            Ok(())
        }
        // The status is enum-typed, so an out-of-range value cannot reach the
        // draft; free-text input is rejected at the form boundary instead.
        Field::Status => Ok(()),
        Field::BloodPressure => optional_numeric(&draft.blood_pressure, MSG_BLOOD_PRESSURE_NUMERIC),
        Field::Temperature => optional_numeric(&draft.temperature, MSG_TEMPERATURE_NUMERIC),
        Field::Studies | Field::Notes => Ok(()),
    }
}

fn optional_numeric(value: &str, message: &str) -> Result<(), String> {
    if value.is_empty() || value.parse::<f64>().is_ok() {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

/// Validates the whole draft, returning every failing field with its message.
pub fn validate(draft: &AppointmentDraft) -> BTreeMap<Field, String> {
    let mut errors = BTreeMap::new();

    for field in Field::ALL {
        if let Err(message) = validate_field(draft, field) {
            errors.insert(field, message);
        }
    }

    errors
}

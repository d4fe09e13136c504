use std::collections::BTreeMap;

use crate::models::{AppointmentDraft, AppointmentStatus, Field, Patient, Physician};
use crate::validation;

pub const MSG_STATUS_INVALID: &str = "Estado no es válido";

/// The component's local state: the draft being edited, the per-field error
/// messages currently on display, and the reference data loaded on mount.
#[derive(Debug)]
pub struct FormState {
    pub values: AppointmentDraft,
    pub errors: BTreeMap<Field, String>,
    pub patient: Option<Patient>,
    pub physicians: Vec<Physician>,
}

impl FormState {
    pub fn new(patient_id: Option<&str>) -> Self {
        Self {
            values: AppointmentDraft::initial(patient_id),
            errors: BTreeMap::new(),
            patient: None,
            physicians: Vec::new(),
        }
    }

    /// Applies one keystroke/selection and re-validates just that field, so
    /// the error under it appears or clears as the user types.
    pub fn set_field(&mut self, field: Field, raw: &str) {
        match field {
            Field::Status => match AppointmentStatus::from_wire(raw) {
                Some(status) => {
                    self.values.status = status;
                    self.errors.remove(&field);
                }
                None => {
                    self.errors.insert(field, MSG_STATUS_INVALID.to_string());
                }
            },
            Field::Date => self.values.date = raw.to_string(),
            Field::Time => self.values.time = raw.to_string(),
            Field::PatientId => self.values.patient_id = raw.to_string(),
            Field::PhysicianId => self.values.physician_id = raw.to_string(),
            Field::BloodPressure => self.values.blood_pressure = raw.to_string(),
            Field::Temperature => self.values.temperature = raw.to_string(),
            Field::Studies => self.values.studies = raw.to_string(),
            Field::Notes => self.values.notes = raw.to_string(),
        }

        if field != Field::Status {
            match validation::validate_field(&self.values, field) {
                Ok(()) => {
                    self.errors.remove(&field);
                }
                Err(message) => {
                    self.errors.insert(field, message);
                }
            }
        }
    }

    /// Full-draft validation pass run on submit. Returns whether submission
    /// may proceed.
    pub fn validate_all(&mut self) -> bool {
        self.errors = validation::validate(&self.values);
        self.errors.is_empty()
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Clears all fields back to their initial values. Reference data is kept;
    /// it is fetched once per mount and never invalidated.
    pub fn reset(&mut self, patient_id: Option<&str>) {
        self.values = AppointmentDraft::initial(patient_id);
        self.errors.clear();
    }
}

use std::sync::Arc;

use tracing::debug;

use shared_api::ApiClient;
use shared_models::error::ApiError;

use crate::models::{Patient, Physician};

/// Read-only data that populates the form: the patient's display record and
/// the physician selector. Fetched once per mount, never refetched.
pub struct ReferenceDataService {
    api: Arc<ApiClient>,
}

impl ReferenceDataService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn fetch_patient(&self, patient_id: &str) -> Result<Patient, ApiError> {
        debug!("Fetching patient record: {}", patient_id);

        let path = format!("/api/pacientes/{}", urlencoding::encode(patient_id));
        self.api.get(&path).await
    }

    pub async fn fetch_physicians(&self) -> Result<Vec<Physician>, ApiError> {
        debug!("Fetching physician list");

        self.api.get("/api/medicos").await
    }
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use shared_api::ApiClient;
use shared_models::error::ApiError;

use crate::models::AppointmentDraft;

const CREATE_APPOINTMENT_PATH: &str = "/api/citas/new";

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("A submission is already in flight")]
    InFlight,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Issues the one write of this component. The in-flight flag rejects a
/// second submit while one is outstanding, so a rapid double click cannot
/// create two appointments.
pub struct SubmissionService {
    api: Arc<ApiClient>,
    in_flight: AtomicBool,
}

impl SubmissionService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            in_flight: AtomicBool::new(false),
        }
    }

    pub async fn submit(&self, draft: &AppointmentDraft) -> Result<(), SubmitError> {
        let body = serde_json::to_value(draft)?;

        if self.in_flight.swap(true, Ordering::SeqCst) {
            debug!("Submit rejected: a request is already in flight");
            return Err(SubmitError::InFlight);
        }

        debug!("Submitting appointment draft for patient {}", draft.patient_id);
        let result = self.api.post::<Value>(CREATE_APPOINTMENT_PATH, body).await;
        self.in_flight.store(false, Ordering::SeqCst);

        result?;
        Ok(())
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }
}

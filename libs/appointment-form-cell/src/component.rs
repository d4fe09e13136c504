use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, error};

use shared_api::ApiClient;
use shared_models::session::SessionUser;

use crate::form::FormState;
use crate::models::Field;
use crate::services::{ReferenceDataService, SubmissionService, SubmitError};
use crate::view::{self, FormView};

pub const RESTRICTED_NOTICE: &str = "Acceso restringido";
pub const SUCCESS_TITLE: &str = "Cita creada exitosamente";
pub const ERROR_TITLE: &str = "Oops...";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Modal-style user feedback (the alert-dialog seam).
pub trait Notifier: Send + Sync {
    fn success(&self, title: &str);
    fn error(&self, title: &str, message: &str);
}

/// Route changes requested by the component (the router seam).
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Cancellation flag scoped to one mount of the component. The host flips it
/// on unmount; fetch results that resolve afterwards are dropped instead of
/// applied to state.
#[derive(Clone, Default)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// The appointment-creation form. One instance per mount: it guards on the
/// session role, loads reference data, drives the validated draft, and issues
/// the single write.
pub struct AppointmentCreationForm {
    session: SessionUser,
    patient_id: Option<String>,
    reference: ReferenceDataService,
    submission: SubmissionService,
    state: FormState,
    cancel: CancelHandle,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl AppointmentCreationForm {
    pub fn new(
        session: SessionUser,
        api: Arc<ApiClient>,
        patient_id: Option<String>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            state: FormState::new(patient_id.as_deref()),
            session,
            patient_id,
            reference: ReferenceDataService::new(Arc::clone(&api)),
            submission: SubmissionService::new(api),
            cancel: CancelHandle::default(),
            notifier,
            navigator,
        }
    }

    pub fn can_access(&self) -> bool {
        self.session.can_create_appointments()
    }

    /// Handle for the host to cancel this mount; see [`CancelHandle`].
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Loads reference data. The two fetches are independent and concurrent:
    /// each failure is logged and degrades its own piece of the UI without
    /// affecting the other. A restricted session triggers no fetches at all.
    pub async fn mount(&mut self) {
        if !self.can_access() {
            debug!("Session role not permitted; skipping reference-data fetch");
            return;
        }

        let patient_id = self.patient_id.clone();
        let reference = &self.reference;

        let patient_fut = async {
            match patient_id.as_deref() {
                Some(id) => Some(reference.fetch_patient(id).await),
                None => None,
            }
        };
        let physicians_fut = reference.fetch_physicians();

        let (patient_res, physicians_res) = tokio::join!(patient_fut, physicians_fut);

        if self.cancel.is_cancelled() {
            debug!("Unmounted while fetching reference data; dropping results");
            return;
        }

        match patient_res {
            Some(Ok(patient)) => self.state.patient = Some(patient),
            Some(Err(e)) => error!("Failed to fetch patient: {}", e),
            None => {}
        }

        match physicians_res {
            Ok(physicians) => self.state.physicians = physicians,
            Err(e) => error!("Failed to fetch physicians: {}", e),
        }
    }

    pub fn handle_change(&mut self, field: Field, value: &str) {
        self.state.set_field(field, value);
    }

    /// Validates and, when clean, issues the write. Success notifies, resets
    /// the fields to their initial values, then navigates to the dashboard.
    /// Failure notifies with the server's message and keeps every entered
    /// value.
    pub async fn submit(&mut self) {
        if !self.state.validate_all() {
            debug!("Submission blocked by validation errors");
            return;
        }

        let outcome = self.submission.submit(&self.state.values).await;

        if self.cancel.is_cancelled() {
            debug!("Unmounted while submitting; dropping outcome");
            return;
        }

        match outcome {
            Ok(()) => {
                self.notifier.success(SUCCESS_TITLE);
                self.state.reset(self.patient_id.as_deref());
                self.navigator.navigate(DASHBOARD_ROUTE);
            }
            Err(SubmitError::InFlight) => {
                debug!("Duplicate submit ignored");
            }
            Err(SubmitError::Api(e)) => {
                self.notifier.error(ERROR_TITLE, &e.user_message());
            }
            Err(SubmitError::Serialization(e)) => {
                error!("Failed to serialize draft: {}", e);
            }
        }
    }

    pub fn render(&self) -> FormView {
        if !self.can_access() {
            return FormView::Restricted {
                notice: RESTRICTED_NOTICE.to_string(),
            };
        }

        FormView::Form(view::form_body(&self.state))
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }
}

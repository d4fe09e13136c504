use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use mockall::mock;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use appointment_form_cell::component::{
    AppointmentCreationForm, Navigator, Notifier, DASHBOARD_ROUTE, ERROR_TITLE, RESTRICTED_NOTICE,
    SUCCESS_TITLE,
};
use appointment_form_cell::models::Field;
use appointment_form_cell::view::{Control, FormView, PATIENT_LOADING};
use shared_api::ApiClient;
use shared_config::AppConfig;
use shared_models::error::GENERIC_SERVER_ERROR;
use shared_utils::test_utils::{MockBackendResponses, TestSession};

mock! {
    pub TestNotifier {}
    impl Notifier for TestNotifier {
        fn success(&self, title: &str);
        fn error(&self, title: &str, message: &str);
    }
}

mock! {
    pub TestNavigator {}
    impl Navigator for TestNavigator {
        fn navigate(&self, route: &str);
    }
}

/// Records notifications and navigations in one ordered log, so tests can
/// assert the success sequence as a whole.
#[derive(Default)]
struct ShellProbe {
    events: Mutex<Vec<String>>,
}

impl ShellProbe {
    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl Notifier for ShellProbe {
    fn success(&self, title: &str) {
        self.events.lock().unwrap().push(format!("success:{title}"));
    }

    fn error(&self, title: &str, message: &str) {
        self.events.lock().unwrap().push(format!("error:{title}:{message}"));
    }
}

impl Navigator for ShellProbe {
    fn navigate(&self, route: &str) {
        self.events.lock().unwrap().push(format!("navigate:{route}"));
    }
}

fn test_client(server: &MockServer, token: &str) -> Arc<ApiClient> {
    let config = AppConfig {
        api_base_url: server.uri(),
        session_file: ".clinica-session.json".to_string(),
    };
    Arc::new(ApiClient::new(&config, token))
}

fn quiet_shell() -> (Arc<dyn Notifier>, Arc<dyn Navigator>) {
    let probe = Arc::new(ShellProbe::default());
    (probe.clone() as Arc<dyn Notifier>, probe as Arc<dyn Navigator>)
}

async fn mount_reference_mocks(server: &MockServer, token: &str) {
    Mock::given(method("GET"))
        .and(path("/api/pacientes/P1"))
        .and(header("Authorization", format!("Bearer {token}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(MockBackendResponses::patient_response("P1", "Ana", "García")),
        )
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/medicos"))
        .and(header("Authorization", format!("Bearer {token}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(MockBackendResponses::physicians_response()),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_restricted_role_renders_notice_and_issues_no_requests() {
    let mock_server = MockServer::start().await;
    let session = TestSession::patient("Pedro");
    let (notifier, navigator) = quiet_shell();

    let mut form = AppointmentCreationForm::new(
        session.user,
        test_client(&mock_server, &session.token),
        Some("P1".to_string()),
        notifier,
        navigator,
    );

    form.mount().await;

    assert_matches!(form.render(), FormView::Restricted { notice } if notice == RESTRICTED_NOTICE);
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_roleless_session_is_restricted() {
    let mock_server = MockServer::start().await;
    let session = TestSession::without_role();
    let (notifier, navigator) = quiet_shell();

    let mut form = AppointmentCreationForm::new(
        session.user,
        test_client(&mock_server, &session.token),
        Some("P1".to_string()),
        notifier,
        navigator,
    );

    form.mount().await;

    assert_matches!(form.render(), FormView::Restricted { .. });
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_mount_loads_patient_name_and_physician_options() {
    let mock_server = MockServer::start().await;
    let session = TestSession::nurse("Laura");
    mount_reference_mocks(&mock_server, &session.token).await;
    let (notifier, navigator) = quiet_shell();

    let mut form = AppointmentCreationForm::new(
        session.user,
        test_client(&mock_server, &session.token),
        Some("P1".to_string()),
        notifier,
        navigator,
    );

    form.mount().await;

    let body = match form.render() {
        FormView::Form(body) => body,
        FormView::Restricted { .. } => panic!("nurse session should render the form"),
    };

    let patient_field = body.field(Field::PatientId).unwrap();
    assert_eq!(patient_field.control, Control::ReadOnly);
    assert_eq!(patient_field.value, "Ana García");

    match &body.field(Field::PhysicianId).unwrap().control {
        Control::Select { options, .. } => {
            assert_eq!(options.len(), 2);
            assert_eq!(options[0].label, "Carlos Ruiz - Cardiología");
        }
        other => panic!("expected a select, got {other:?}"),
    }

    mock_server.verify().await;
}

#[tokio::test]
async fn test_mount_without_patient_id_skips_patient_fetch() {
    let mock_server = MockServer::start().await;
    let session = TestSession::physician("Marta");

    Mock::given(method("GET"))
        .and(path("/api/medicos"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(MockBackendResponses::physicians_response()),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let (notifier, navigator) = quiet_shell();
    let mut form = AppointmentCreationForm::new(
        session.user,
        test_client(&mock_server, &session.token),
        None,
        notifier,
        navigator,
    );

    form.mount().await;

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/api/medicos");
}

#[tokio::test]
async fn test_patient_fetch_failure_leaves_loading_state() {
    let mock_server = MockServer::start().await;
    let session = TestSession::nurse("Laura");

    Mock::given(method("GET"))
        .and(path("/api/pacientes/P1"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(MockBackendResponses::error_response("fallo interno")),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/medicos"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(MockBackendResponses::physicians_response()),
        )
        .mount(&mock_server)
        .await;

    let (notifier, navigator) = quiet_shell();
    let mut form = AppointmentCreationForm::new(
        session.user,
        test_client(&mock_server, &session.token),
        Some("P1".to_string()),
        notifier,
        navigator,
    );

    form.mount().await;

    // The patient display degrades; the physician list is unaffected.
    let body = match form.render() {
        FormView::Form(body) => body,
        FormView::Restricted { .. } => panic!("expected the form"),
    };
    assert_eq!(body.field(Field::PatientId).unwrap().value, PATIENT_LOADING);
    assert_eq!(form.state().physicians.len(), 2);
}

#[tokio::test]
async fn test_physician_fetch_failure_leaves_selector_empty() {
    let mock_server = MockServer::start().await;
    let session = TestSession::nurse("Laura");

    Mock::given(method("GET"))
        .and(path("/api/pacientes/P1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(MockBackendResponses::patient_response("P1", "Ana", "García")),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/medicos"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let (notifier, navigator) = quiet_shell();
    let mut form = AppointmentCreationForm::new(
        session.user,
        test_client(&mock_server, &session.token),
        Some("P1".to_string()),
        notifier,
        navigator,
    );

    form.mount().await;

    let body = match form.render() {
        FormView::Form(body) => body,
        FormView::Restricted { .. } => panic!("expected the form"),
    };
    match &body.field(Field::PhysicianId).unwrap().control {
        Control::Select { options, .. } => assert!(options.is_empty()),
        other => panic!("expected a select, got {other:?}"),
    }
    assert_eq!(body.field(Field::PatientId).unwrap().value, "Ana García");
}

#[tokio::test]
async fn test_cancelled_mount_drops_fetched_results() {
    let mock_server = MockServer::start().await;
    let session = TestSession::nurse("Laura");
    mount_reference_mocks(&mock_server, &session.token).await;

    let (notifier, navigator) = quiet_shell();
    let mut form = AppointmentCreationForm::new(
        session.user,
        test_client(&mock_server, &session.token),
        Some("P1".to_string()),
        notifier,
        navigator,
    );

    form.cancel_handle().cancel();
    form.mount().await;

    assert!(form.state().patient.is_none());
    assert!(form.state().physicians.is_empty());
}

#[tokio::test]
async fn test_submit_with_missing_fields_blocks_the_write() {
    let mock_server = MockServer::start().await;
    let session = TestSession::physician("Marta");

    Mock::given(method("POST"))
        .and(path("/api/citas/new"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let (notifier, navigator) = quiet_shell();
    let mut form = AppointmentCreationForm::new(
        session.user,
        test_client(&mock_server, &session.token),
        Some("P1".to_string()),
        notifier,
        navigator,
    );

    form.submit().await;

    let body = match form.render() {
        FormView::Form(body) => body,
        FormView::Restricted { .. } => panic!("expected the form"),
    };
    assert_eq!(
        body.field(Field::Date).unwrap().error.as_deref(),
        Some("Fecha es requerida")
    );
    assert_eq!(
        body.field(Field::PhysicianId).unwrap().error.as_deref(),
        Some("Médico es requerido")
    );

    mock_server.verify().await;
}

#[tokio::test]
async fn test_successful_submit_posts_exact_body_then_notifies_resets_and_navigates() {
    let mock_server = MockServer::start().await;
    let session = TestSession::physician("Marta");

    Mock::given(method("POST"))
        .and(path("/api/citas/new"))
        .and(header("Authorization", format!("Bearer {}", session.token)))
        .and(body_json(json!({
            "fecha": "2024-05-01",
            "hora": "09:30",
            "paciente": "P1",
            "medico": "M1",
            "estado": "pendiente",
            "presionArterial": "",
            "temperatura": "",
            "estudios": "",
            "observaciones": ""
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(MockBackendResponses::appointment_created_response("C1")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let probe = Arc::new(ShellProbe::default());
    let mut form = AppointmentCreationForm::new(
        session.user,
        test_client(&mock_server, &session.token),
        Some("P1".to_string()),
        probe.clone() as Arc<dyn Notifier>,
        probe.clone() as Arc<dyn Navigator>,
    );

    form.handle_change(Field::Date, "2024-05-01");
    form.handle_change(Field::Time, "09:30");
    form.handle_change(Field::PhysicianId, "M1");
    // estado is left unset and must default to "pendiente".

    form.submit().await;

    assert_eq!(
        probe.events(),
        vec![
            format!("success:{SUCCESS_TITLE}"),
            format!("navigate:{DASHBOARD_ROUTE}"),
        ]
    );

    // Reset back to initial values, with the route patient id still pre-filled.
    assert_eq!(form.state().values.date, "");
    assert_eq!(form.state().values.time, "");
    assert_eq!(form.state().values.physician_id, "");
    assert_eq!(form.state().values.patient_id, "P1");

    mock_server.verify().await;
}

#[tokio::test]
async fn test_failed_submit_preserves_values_and_shows_server_message() {
    let mock_server = MockServer::start().await;
    let session = TestSession::physician("Marta");

    Mock::given(method("POST"))
        .and(path("/api/citas/new"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(MockBackendResponses::error_response("Horario no disponible")),
        )
        .mount(&mock_server)
        .await;

    let mut notifier = MockTestNotifier::new();
    notifier
        .expect_error()
        .withf(|title, message| title == ERROR_TITLE && message == "Horario no disponible")
        .times(1)
        .returning(|_, _| ());

    // No expectations on the navigator: any navigation would fail the test.
    let navigator = MockTestNavigator::new();

    let mut form = AppointmentCreationForm::new(
        session.user,
        test_client(&mock_server, &session.token),
        Some("P1".to_string()),
        Arc::new(notifier),
        Arc::new(navigator),
    );

    form.handle_change(Field::Date, "2024-05-01");
    form.handle_change(Field::Time, "09:30");
    form.handle_change(Field::PhysicianId, "M1");
    form.handle_change(Field::Notes, "control anual");

    form.submit().await;

    assert_eq!(form.state().values.date, "2024-05-01");
    assert_eq!(form.state().values.time, "09:30");
    assert_eq!(form.state().values.physician_id, "M1");
    assert_eq!(form.state().values.notes, "control anual");
}

#[tokio::test]
async fn test_failure_without_error_field_falls_back_to_generic_message() {
    let mock_server = MockServer::start().await;
    let session = TestSession::physician("Marta");

    Mock::given(method("POST"))
        .and(path("/api/citas/new"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let mut notifier = MockTestNotifier::new();
    notifier
        .expect_error()
        .withf(|title, message| title == ERROR_TITLE && message == GENERIC_SERVER_ERROR)
        .times(1)
        .returning(|_, _| ());

    let mut form = AppointmentCreationForm::new(
        session.user,
        test_client(&mock_server, &session.token),
        Some("P1".to_string()),
        Arc::new(notifier),
        Arc::new(MockTestNavigator::new()),
    );

    form.handle_change(Field::Date, "2024-05-01");
    form.handle_change(Field::Time, "09:30");
    form.handle_change(Field::PhysicianId, "M1");

    form.submit().await;
}

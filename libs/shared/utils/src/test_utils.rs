use serde_json::{json, Value};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::session::{SessionUser, UserRole};

pub struct TestConfig {
    pub api_base_url: String,
    pub session_file: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            session_file: ".clinica-session.json".to_string(),
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            api_base_url: self.api_base_url.clone(),
            session_file: self.session_file.clone(),
        }
    }
}

pub struct TestSession {
    pub token: String,
    pub user: SessionUser,
}

impl TestSession {
    pub fn new(name: &str, role: UserRole) -> Self {
        Self {
            token: format!("test-token-{}", Uuid::new_v4()),
            user: SessionUser {
                id: Some(Uuid::new_v4().to_string()),
                name: Some(name.to_string()),
                role: Some(role),
            },
        }
    }

    pub fn nurse(name: &str) -> Self {
        Self::new(name, UserRole::Nurse)
    }

    pub fn physician(name: &str) -> Self {
        Self::new(name, UserRole::Physician)
    }

    pub fn patient(name: &str) -> Self {
        Self::new(name, UserRole::Patient)
    }

    pub fn without_role() -> Self {
        Self {
            token: format!("test-token-{}", Uuid::new_v4()),
            user: SessionUser::default(),
        }
    }
}

/// Canned backend payloads in the clinic API's wire shape.
pub struct MockBackendResponses;

impl MockBackendResponses {
    pub fn patient_response(id: &str, first_name: &str, last_name: &str) -> Value {
        json!({
            "_id": id,
            "nombre": first_name,
            "apellido": last_name
        })
    }

    pub fn physician_response(id: &str, first_name: &str, last_name: &str, specialty: &str) -> Value {
        json!({
            "_id": id,
            "usuario": {
                "nombre": first_name,
                "apellido": last_name
            },
            "especialidad": specialty
        })
    }

    pub fn physicians_response() -> Value {
        json!([
            Self::physician_response("M1", "Carlos", "Ruiz", "Cardiología"),
            Self::physician_response("M2", "Elena", "Soto", "Pediatría"),
        ])
    }

    pub fn appointment_created_response(id: &str) -> Value {
        json!({
            "_id": id,
            "estado": "pendiente"
        })
    }

    pub fn error_response(message: &str) -> Value {
        json!({ "error": message })
    }
}

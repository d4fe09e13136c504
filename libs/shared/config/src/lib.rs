use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub session_file: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            api_base_url: env::var("CLINICA_API_URL")
                .unwrap_or_else(|_| {
                    warn!("CLINICA_API_URL not set, using default");
                    "http://localhost:8000".to_string()
                }),
            session_file: env::var("CLINICA_SESSION_FILE")
                .unwrap_or_else(|_| {
                    warn!("CLINICA_SESSION_FILE not set, using default");
                    ".clinica-session.json".to_string()
                }),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.api_base_url.is_empty() && !self.session_file.is_empty()
    }
}

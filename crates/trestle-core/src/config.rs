//! Configuration module
//!
//! Environment-driven configuration for the API and its three external
//! collaborators (file storage, datastore, spreadsheet webhooks).

use std::env;

const DEFAULT_PORT: u16 = 8080;
const WEBHOOK_TIMEOUT_SECS: u64 = 30;
const MAX_REQUEST_BODY_MB: usize = 64;

/// Which spreadsheet webhook a submission type relays to.
///
/// Each target maps to its own environment variable; a target with no URL
/// configured skips the relay step entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WebhookTarget {
    /// `SHEETS_WEBHOOK_URL` - team competition, essay, event registrations.
    Default,
    /// `SHEETS_WEBHOOK_URL_TEAM_REGISTRATION` - JSON-only team registration.
    TeamRegistration,
    /// `SHEETS_WEBHOOK_URL_PROPOSAL` - proposal submissions.
    Proposal,
}

/// Application configuration.
///
/// Storage and datastore settings are optional here; their absence is
/// reported per request as a configuration error response, never as a
/// startup crash.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    // File storage collaborator (Google Drive service account)
    pub drive_service_account_key: Option<String>,
    pub drive_folder_id: Option<String>,
    // Datastore collaborator (hosted Postgres REST)
    pub supabase_url: Option<String>,
    pub supabase_service_key: Option<String>,
    // Spreadsheet webhook collaborator
    pub sheets_webhook_url: Option<String>,
    pub sheets_webhook_url_team_registration: Option<String>,
    pub sheets_webhook_url_proposal: Option<String>,
    pub webhook_timeout_seconds: u64,
    pub max_request_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .unwrap_or(DEFAULT_PORT),
            environment,
            cors_origins,
            drive_service_account_key: env::var("DRIVE_SERVICE_ACCOUNT_KEY").ok(),
            drive_folder_id: env::var("DRIVE_FOLDER_ID").ok(),
            supabase_url: env::var("SUPABASE_URL").ok(),
            supabase_service_key: env::var("SUPABASE_SERVICE_KEY").ok(),
            sheets_webhook_url: env::var("SHEETS_WEBHOOK_URL").ok(),
            sheets_webhook_url_team_registration: env::var(
                "SHEETS_WEBHOOK_URL_TEAM_REGISTRATION",
            )
            .ok(),
            sheets_webhook_url_proposal: env::var("SHEETS_WEBHOOK_URL_PROPOSAL").ok(),
            webhook_timeout_seconds: env::var("WEBHOOK_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(WEBHOOK_TIMEOUT_SECS),
            max_request_body_bytes: env::var("MAX_REQUEST_BODY_MB")
                .ok()
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(MAX_REQUEST_BODY_MB)
                * 1024
                * 1024,
        })
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    /// Resolve the webhook URL for a relay target, if one is configured.
    pub fn webhook_url(&self, target: WebhookTarget) -> Option<&str> {
        match target {
            WebhookTarget::Default => self.sheets_webhook_url.as_deref(),
            WebhookTarget::TeamRegistration => {
                self.sheets_webhook_url_team_registration.as_deref()
            }
            WebhookTarget::Proposal => self.sheets_webhook_url_proposal.as_deref(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_port: DEFAULT_PORT,
            environment: "development".to_string(),
            cors_origins: vec!["*".to_string()],
            drive_service_account_key: None,
            drive_folder_id: None,
            supabase_url: None,
            supabase_service_key: None,
            sheets_webhook_url: None,
            sheets_webhook_url_team_registration: None,
            sheets_webhook_url_proposal: None,
            webhook_timeout_seconds: WEBHOOK_TIMEOUT_SECS,
            max_request_body_bytes: MAX_REQUEST_BODY_MB * 1024 * 1024,
        }
    }
}

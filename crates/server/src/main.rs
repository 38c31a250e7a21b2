// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use slot_admission_api::{
    AdmitRequest, AdmitResponse, ApiError, AuditHistoryResponse, CompanyResponse,
    EligibilityRequest, EligibilityResponse, admit, check_eligibility, get_audit_history,
    get_company, list_companies,
};
use slot_admission_domain::{AdmissionSettings, ReasonCode};
use slot_admission_persistence::Persistence;
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Slot Admission Server - HTTP server for membership slot registration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// JSON file with admission settings. Defaults apply when omitted.
    #[arg(short, long)]
    settings: Option<String>,
}

/// Application state shared across handlers.
///
/// Every admission holds the persistence lock from snapshot to commit.
#[derive(Clone)]
struct AppState {
    persistence: Arc<Mutex<Persistence>>,
    settings: Arc<AdmissionSettings>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Machine-readable reason, present for admission refusals.
    #[serde(skip_serializing_if = "Option::is_none")]
    reason_code: Option<ReasonCode>,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    reason_code: Option<ReasonCode>,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            reason_code: self.reason_code,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::AdmissionRejected {
                reason_code,
                message,
            } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                reason_code: Some(reason_code),
                message,
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                reason_code: None,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                reason_code: None,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    reason_code: None,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Handler for GET `/health`.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for GET `/companies`.
async fn handle_list_companies(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<CompanyResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_companies(&mut persistence)?))
}

/// Handler for GET `/companies/{company_id}`.
async fn handle_get_company(
    AxumState(app_state): AxumState<AppState>,
    Path(company_id): Path<i64>,
) -> Result<Json<CompanyResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(get_company(&mut persistence, company_id)?))
}

/// Handler for POST `/eligibility`.
///
/// Read-only: nothing is reserved.
async fn handle_eligibility(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<EligibilityRequest>,
) -> Result<Json<EligibilityResponse>, HttpError> {
    info!(
        company_id = req.company_id,
        user_id = req.member.user_id,
        "Handling eligibility request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: EligibilityResponse = check_eligibility(
        &mut persistence,
        &app_state.settings,
        req.company_id,
        &req.member.to_user(),
    )?;

    Ok(Json(response))
}

/// Handler for POST `/admissions`.
///
/// On success the body carries the payment hand-off. Refusals are 422 with
/// a `reason_code`.
async fn handle_admit(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AdmitRequest>,
) -> Result<Json<AdmitResponse>, HttpError> {
    info!(
        company_id = req.company_id,
        user_id = req.member.user_id,
        product_id = ?req.product_id,
        "Handling admission request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: AdmitResponse = admit(
        &mut persistence,
        &app_state.settings,
        req,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);

    info!(
        purchase_id = response.purchase_id,
        audit_event_id = response.audit_event_id,
        total_amount = response.handoff.total_amount,
        "Admission committed"
    );

    Ok(Json(response))
}

/// Handler for GET `/companies/{company_id}/audit`.
async fn handle_get_audit_history(
    AxumState(app_state): AxumState<AppState>,
    Path(company_id): Path<i64>,
) -> Result<Json<AuditHistoryResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(get_audit_history(&mut persistence, company_id)?))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/companies", get(handle_list_companies))
        .route("/companies/{company_id}", get(handle_get_company))
        .route("/companies/{company_id}/audit", get(handle_get_audit_history))
        .route("/eligibility", post(handle_eligibility))
        .route("/admissions", post(handle_admit))
        .with_state(app_state)
}

/// Parses admission settings from JSON. Missing fields take their defaults.
fn parse_settings(json: &str) -> Result<AdmissionSettings, serde_json::Error> {
    serde_json::from_str(json)
}

fn load_settings(path: Option<&str>) -> Result<AdmissionSettings, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        info!("No settings file given, using defaults");
        return Ok(AdmissionSettings::default());
    };
    info!("Loading admission settings from: {}", path);
    let contents: String = std::fs::read_to_string(path)?;
    let settings: AdmissionSettings = parse_settings(&contents)?;
    if !settings.enforce_registration_window {
        warn!("Registration window enforcement is disabled");
    }
    Ok(settings)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Slot Admission Server");

    let settings: AdmissionSettings = load_settings(args.settings.as_deref())?;

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        settings: Arc::new(settings),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

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
    extract::State as AxumState,
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{error, info};

use rota_api::{
    ApiError, AssignShiftRequest, AssignShiftResponse, CreateShiftRequest, CreateShiftResponse,
    CreateStaffRequest, CreateStaffResponse, assign_shift, create_shift, create_staff,
    list_assignments, list_shifts, list_staff,
};
use rota_domain::{AssignmentDetail, Shift, StaffMember};
use rota_persistence::Persistence;

/// Rota Server - HTTP server for the Rota staff scheduler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses the
    /// `MySQL` configuration from the environment when `DB_HOST` is set,
    /// otherwise an in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Browser origins allowed by CORS. Repeat to allow several.
    #[arg(
        long = "cors-origin",
        default_values_t = [
            String::from("http://localhost:5173"),
            String::from("http://127.0.0.1:5173"),
        ]
    )]
    cors_origin: Vec<String>,
}

/// Builds a `MySQL` connection URL from the environment, if configured.
///
/// Returns `Some` only when `DB_HOST` is set. The remaining variables
/// (`DB_NAME`, `DB_USER`, `DB_PASS`) fall back to the development
/// defaults when absent.
fn mysql_url_from_env() -> Option<String> {
    let host: String = std::env::var("DB_HOST").ok()?;
    let name: String = std::env::var("DB_NAME").unwrap_or_else(|_| String::from("staff_scheduler"));
    let user: String = std::env::var("DB_USER").unwrap_or_else(|_| String::from("devuser"));
    let pass: String = std::env::var("DB_PASS").unwrap_or_else(|_| String::from("devpass"));
    Some(format!("mysql://{user}:{pass}@{host}/{name}"))
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for the scheduling tables.
    persistence: Arc<Mutex<Persistence>>,
}

/// Error response type.
///
/// The `error` field always carries the canonical message. The optional
/// fields are populated per failure kind: `required` for missing-field
/// errors, `staff_role` and `required_role` for role mismatches.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// The canonical error message.
    error: String,
    /// The full set of required fields, for missing-field errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<Vec<String>>,
    /// The staff member's actual role, for role mismatches.
    #[serde(skip_serializing_if = "Option::is_none")]
    staff_role: Option<String>,
    /// The role the shift requires, for role mismatches.
    #[serde(skip_serializing_if = "Option::is_none")]
    required_role: Option<String>,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The JSON error body.
    body: ErrorResponse,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::MissingFields { .. }
            | ApiError::InvalidRole { .. }
            | ApiError::InvalidPhone { .. }
            | ApiError::RoleMismatch { .. } => StatusCode::BAD_REQUEST,
            ApiError::UnknownStaffOrShift => StatusCode::NOT_FOUND,
            ApiError::AlreadyAssigned => StatusCode::CONFLICT,
            ApiError::WriteFailure { .. } | ApiError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if matches!(&err, ApiError::Internal { .. }) {
            error!(error = %err, "Internal error");
        }

        let mut body = ErrorResponse {
            error: err.to_string(),
            required: None,
            staff_role: None,
            required_role: None,
        };
        match err {
            ApiError::MissingFields { required } => {
                body.required = Some(required.iter().map(ToString::to_string).collect());
            }
            ApiError::RoleMismatch {
                staff_role,
                required_role,
            } => {
                body.staff_role = Some(staff_role);
                body.required_role = Some(required_role);
            }
            _ => {}
        }

        Self { status, body }
    }
}

/// Handler for POST `/staff` endpoint.
///
/// Creates a new staff member.
async fn handle_create_staff(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateStaffRequest>,
) -> Result<Json<CreateStaffResponse>, HttpError> {
    info!("Handling create_staff request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateStaffResponse = create_staff(&mut *persistence, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/staff` endpoint.
///
/// Lists all staff members in insertion order.
async fn handle_list_staff(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<StaffMember>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let staff: Vec<StaffMember> = list_staff(&mut *persistence)?;
    drop(persistence);

    Ok(Json(staff))
}

/// Handler for POST `/shifts` endpoint.
///
/// Creates a new shift.
async fn handle_create_shift(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateShiftRequest>,
) -> Result<Json<CreateShiftResponse>, HttpError> {
    info!("Handling create_shift request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateShiftResponse = create_shift(&mut *persistence, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/shifts` endpoint.
///
/// Lists all shifts in insertion order.
async fn handle_list_shifts(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<Shift>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let shifts: Vec<Shift> = list_shifts(&mut *persistence)?;
    drop(persistence);

    Ok(Json(shifts))
}

/// Handler for POST `/assign` endpoint.
///
/// Assigns a staff member to a shift after running the validation
/// gauntlet.
async fn handle_assign_shift(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AssignShiftRequest>,
) -> Result<Json<AssignShiftResponse>, HttpError> {
    info!("Handling assign_shift request");

    let mut persistence = app_state.persistence.lock().await;
    let response: AssignShiftResponse = assign_shift(&mut *persistence, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/assignments` endpoint.
///
/// Lists the joined schedule view, ordered by day then start time.
async fn handle_list_assignments(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<AssignmentDetail>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let details: Vec<AssignmentDetail> = list_assignments(&mut *persistence)?;
    drop(persistence);

    Ok(Json(details))
}

/// Builds the CORS layer for the configured browser origins.
fn cors_layer(origins: &[String]) -> Result<CorsLayer, axum::http::header::InvalidHeaderValue> {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .map(|origin| origin.parse())
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/staff", post(handle_create_staff))
        .route("/staff", get(handle_list_staff))
        .route("/shifts", post(handle_create_shift))
        .route("/shifts", get(handle_list_shifts))
        .route("/assign", post(handle_assign_shift))
        .route("/assignments", get(handle_list_assignments))
        .layer(cors)
        .with_state(app_state)
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

    info!("Initializing Rota Server");

    // Initialize persistence. Precedence: explicit SQLite file, then the
    // MySQL environment configuration, then in-memory SQLite.
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else if let Some(mysql_url) = mysql_url_from_env() {
        info!("Using MySQL database from environment configuration");
        Persistence::new_with_mysql(&mysql_url)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state, cors_layer(&args.cors_origin)?);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

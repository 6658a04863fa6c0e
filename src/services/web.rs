//! Axum-based HTTP server for the calculator API.
//!
//! Provides REST endpoints for:
//! - GET `/api/session` - Last valid inputs
//! - GET `/api/presets` - Reference distances and speed presets
//! - POST `/api/reaction-time` - Reaction time for a speed/distance pair
//! - POST `/api/equivalent` - Equivalent speed at one target distance
//! - POST `/api/table` - Full 15–60.5 ft equivalency table
//! - POST `/api/chart` - Chart data for the page
//! - GET `/` - Web UI (serves index.html)
//!
//! Validation failures are answered with HTTP 200 and `success: false`; the
//! error string lists every failed constraint.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, warn};

use crate::config::{Config, WebConfig};
use crate::messages::{parse_equivalent_speed_request, parse_inputs_request};
use crate::presentation::ChartSpec;
use crate::validation::{check_distance, validation_problems};
use crate::{reaction_time, CalculatorInputs, EquivalencyQuery};

use super::api::{
    ApiResponse, ChartResponse, EquivalentSpeedResponse, PresetsResponse, ReactionTimeResponse,
    SessionResponse, TableResponse,
};
use super::shared::SharedCalculatorState;

const INDEX_HTML: &str = include_str!("../../www/index.html");

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/session - Returns the last valid inputs
async fn get_session(
    State(state): State<Arc<SharedCalculatorState>>,
) -> Json<ApiResponse<SessionResponse>> {
    Json(ApiResponse::ok(SessionResponse::from(state.inputs())))
}

/// GET /api/presets - Returns reference distances and speed presets
async fn get_presets() -> Json<ApiResponse<PresetsResponse>> {
    Json(ApiResponse::ok(PresetsResponse::builtin()))
}

/// POST /api/reaction-time - Reaction time for a speed/distance pair
///
/// Accepts JSON: `{"speed_mph": 90, "distance_ft": 60.5}`
async fn post_reaction_time(body: Bytes) -> Json<ApiResponse<ReactionTimeResponse>> {
    let Some(req) = parse_inputs_request(&body) else {
        return Json(ApiResponse::err("Invalid reaction time request"));
    };

    let report = validation_problems(req.speed_mph, req.distance_ft);
    if !report.is_valid() {
        warn!(speed_mph = req.speed_mph, distance_ft = req.distance_ft, %report, "rejected reaction time request");
        return Json(ApiResponse::err(report.to_string()));
    }

    match reaction_time(req.speed_mph, req.distance_ft) {
        Ok(reaction_time_sec) => Json(ApiResponse::ok(ReactionTimeResponse {
            speed_mph: req.speed_mph,
            distance_ft: req.distance_ft,
            reaction_time_sec,
        })),
        Err(err) => Json(ApiResponse::err(err.to_string())),
    }
}

/// POST /api/equivalent - Equivalent speed at a target distance
///
/// Accepts JSON: `{"speed_mph": 90, "distance_ft": 60.5, "target_distance_ft": 46}`
///
/// The reference pair must pass full validation; the target only has to be
/// positive.
async fn post_equivalent(body: Bytes) -> Json<ApiResponse<EquivalentSpeedResponse>> {
    let Some(req) = parse_equivalent_speed_request(&body) else {
        return Json(ApiResponse::err("Invalid equivalent speed request"));
    };

    let report = validation_problems(req.speed_mph, req.distance_ft);
    if !report.is_valid() {
        warn!(%report, "rejected equivalent speed request");
        return Json(ApiResponse::err(report.to_string()));
    }

    let checked = check_distance(req.target_distance_ft)
        .and_then(|()| EquivalencyQuery::from(req).evaluate());

    match checked {
        Ok(result) => {
            debug!(
                target_distance_ft = req.target_distance_ft,
                speed_mph = result.speed_mph,
                "equivalent speed"
            );
            Json(ApiResponse::ok(EquivalentSpeedResponse {
                target_distance_ft: req.target_distance_ft,
                speed_mph: result.speed_mph,
                reaction_time_sec: result.reaction_time_sec,
            }))
        }
        Err(err) => {
            warn!(%err, "rejected equivalent speed request");
            Json(ApiResponse::err(err.to_string()))
        }
    }
}

/// POST /api/table - Full equivalency table, remembering the inputs
///
/// Accepts JSON: `{"speed_mph": 90, "distance_ft": 60.5}`
async fn post_table(
    State(state): State<Arc<SharedCalculatorState>>,
    body: Bytes,
) -> Json<ApiResponse<TableResponse>> {
    let Some(req) = parse_inputs_request(&body) else {
        return Json(ApiResponse::err("Invalid table request"));
    };

    match state.recompute(CalculatorInputs::from(req)) {
        Ok(view) => Json(ApiResponse::ok(TableResponse::from(&view.table))),
        Err(report) => {
            warn!(%report, "rejected table request");
            Json(ApiResponse::err(report.to_string()))
        }
    }
}

/// POST /api/chart - Chart data for the page, remembering the inputs
///
/// Accepts JSON: `{"speed_mph": 90, "distance_ft": 60.5}`
async fn post_chart(
    State(state): State<Arc<SharedCalculatorState>>,
    body: Bytes,
) -> Json<ApiResponse<ChartResponse>> {
    let Some(req) = parse_inputs_request(&body) else {
        return Json(ApiResponse::err("Invalid chart request"));
    };

    let view = match state.recompute(CalculatorInputs::from(req)) {
        Ok(view) => view,
        Err(report) => {
            warn!(%report, "rejected chart request");
            return Json(ApiResponse::err(report.to_string()));
        }
    };

    let calculator = &state.config().calculator;
    let mut chart = ChartSpec::from_view(&view, calculator.speed_decimals as usize);
    if !calculator.show_reference_markers {
        chart.markers.clear();
    }
    Json(ApiResponse::ok(ChartResponse::from(&chart)))
}

/// GET / - Serve the web UI
async fn index(State(state): State<Arc<SharedCalculatorState>>) -> impl IntoResponse {
    Html(render_index(&state.config().app.title))
}

/// Fallback handler for 404
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::err("Not found")),
    )
}

/// Fill the page template with the configured title.
fn render_index(title: &str) -> String {
    INDEX_HTML.replace("{{title}}", title)
}

// ============================================================================
// Server Builder
// ============================================================================

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct WebServerConfig {
    /// Address to bind to
    pub addr: SocketAddr,
    /// Whether to enable CORS for all origins
    pub cors_permissive: bool,
}

impl Default for WebServerConfig {
    fn default() -> Self {
        Self::from_config(&WebConfig::default())
    }
}

impl WebServerConfig {
    /// Create a new config with the given address
    pub fn new(addr: impl Into<SocketAddr>) -> Self {
        Self {
            addr: addr.into(),
            ..Default::default()
        }
    }

    /// Set whether CORS should be permissive
    pub fn cors(mut self, permissive: bool) -> Self {
        self.cors_permissive = permissive;
        self
    }

    /// Create from shared WebConfig
    pub fn from_config(config: &WebConfig) -> Self {
        Self {
            addr: ([0, 0, 0, 0], config.port).into(),
            cors_permissive: config.cors_permissive,
        }
    }
}

/// Build the Axum router with all routes
pub fn build_router(state: Arc<SharedCalculatorState>, config: &WebServerConfig) -> Router {
    let mut router = Router::new()
        // API routes
        .route("/api/session", get(get_session))
        .route("/api/presets", get(get_presets))
        .route("/api/reaction-time", post(post_reaction_time))
        .route("/api/equivalent", post(post_equivalent))
        .route("/api/table", post(post_table))
        .route("/api/chart", post(post_chart))
        // Web UI
        .route("/", get(index))
        // Fallback
        .fallback(not_found)
        .with_state(state);

    // Add CORS if requested
    if config.cors_permissive {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router
}

/// Start the web server
///
/// This function blocks until the server is shut down.
pub async fn run_server(config: Config) -> Result<(), std::io::Error> {
    let server_config = WebServerConfig::from_config(&config.web);
    let state = Arc::new(SharedCalculatorState::new(config));
    run_server_with_state(state, server_config).await
}

/// Start the web server with existing shared state
pub async fn run_server_with_state(
    state: Arc<SharedCalculatorState>,
    config: WebServerConfig,
) -> Result<(), std::io::Error> {
    let router = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "web server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

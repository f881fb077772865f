//! HTTP transport: one simulation endpoint plus a health probe.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use ptera_core::{PteraError, RequestPayload, SimulationRequest, SimulationResult};
use ptera_solver::Simulator;
use serde_json::json;
use tokio::net::TcpListener;

use crate::describe::SERVICE_NAME;

/// Builds the service router over a shared simulator.
pub fn router(simulator: Arc<Simulator>) -> Router {
    Router::new()
        .route("/simulate", post(simulate))
        .route("/healthz", get(healthz))
        .with_state(simulator)
}

/// Binds the listener and serves requests until the process stops.
pub async fn serve(port: u16) -> std::io::Result<()> {
    let simulator = Arc::new(Simulator::new());
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    log::info!("pterasim HTTP API listening on http://{addr}");
    axum::serve(listener, router(simulator)).await
}

async fn simulate(
    State(simulator): State<Arc<Simulator>>,
    Json(payload): Json<RequestPayload>,
) -> Result<Json<SimulationResult>, (StatusCode, Json<PteraError>)> {
    let request =
        SimulationRequest::new(payload).map_err(|err| (StatusCode::BAD_REQUEST, Json(err)))?;
    Ok(Json(simulator.simulate(&request)))
}

async fn healthz() -> Json<serde_json::Value> {
    Json(json!({
        "name": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "status": "ok",
    }))
}

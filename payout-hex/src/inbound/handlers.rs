//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use payout_types::{AppError, DiagnosticSink, IpLookup, PayoutGateway, PayoutRequest};

use crate::PayoutService;

/// Application state shared across handlers.
///
/// The payout forwarder and the identity lookup are independent; they only
/// share the hosting runtime.
pub struct AppState<G: PayoutGateway, S: DiagnosticSink, I: IpLookup> {
    pub service: PayoutService<G, S>,
    pub ip_lookup: I,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AppError::InvalidInput
            | AppError::MissingFields
            | AppError::BelowMinimum { .. }
            | AppError::NoEndpoint => StatusCode::BAD_REQUEST,
            AppError::ServerMisconfigured => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UpstreamUnreachable(_) | AppError::UpstreamInvalidResponse { .. } => {
                StatusCode::BAD_GATEWAY
            }
            // The upstream's own status is propagated verbatim.
            AppError::UpstreamRejected { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
        };

        let mut body = serde_json::json!({ "error": self.0.to_string() });
        match self.0 {
            AppError::UpstreamInvalidResponse { raw } => {
                body["raw"] = serde_json::Value::String(raw);
            }
            AppError::UpstreamRejected { details, .. } => {
                body["details"] = details;
            }
            _ => {}
        }

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Forward one payout request upstream.
///
/// The `Json` rejection is taken by value so that an unparseable body maps
/// to the proxy's own `InvalidInput` error instead of Axum's default reply.
#[tracing::instrument(skip(state, body))]
pub async fn create_payout<G: PayoutGateway, S: DiagnosticSink, I: IpLookup>(
    State(state): State<Arc<AppState<G, S, I>>>,
    body: Result<Json<PayoutRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body.map_err(|_| AppError::InvalidInput)?;
    let reply = state.service.forward(req).await?;
    Ok(Json(reply))
}

/// Report the caller's public network address.
///
/// Transport failures keep the 200 status of the original interface; the
/// body shape (`error` + `curlErr`) is what clients key off.
#[tracing::instrument(skip(state))]
pub async fn whoami<G: PayoutGateway, S: DiagnosticSink, I: IpLookup>(
    State(state): State<Arc<AppState<G, S, I>>>,
) -> Response {
    match state.ip_lookup.public_ip().await {
        Ok(ip) => Json(payout_types::WhoAmIResponse { ip }).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "public IP lookup failed");
            Json(serde_json::json!({
                "error": "Unable to determine the public IP",
                "curlErr": err.to_string(),
            }))
            .into_response()
        }
    }
}

use axum::{Router, body::Body, http::Request, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use backoffice_core::health::healthz;
use backoffice_core::middleware::{
    REQUEST_ID_HEADER, propagate_request_id_layer, request_id_layer,
};

use crate::handlers::{health::readyz, staff::list_staffs};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Staffs
        .route("/api/v1/staffs", get(list_staffs))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                    let request_id = req
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default();
                    tracing::info_span!(
                        "http_request",
                        method = %req.method(),
                        uri = %req.uri(),
                        request_id,
                    )
                }))
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}

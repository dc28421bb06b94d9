use axum::{extract::RawQuery, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{ContextInfo, SignalInputs};
use super::params::QueryParams;

pub const PATHNAME_PARAM: &str = "pathname";
pub const REFERRER_PARAM: &str = "referrer";

/// JSON body accepted by `POST /api/v1/intent/context`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextRequest {
    pub pathname: String,
    #[serde(default)]
    pub referrer: Option<String>,
    /// Raw query string of the visited page, e.g. `intent=buyer&utm_campaign=x`.
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextResponse {
    #[serde(flatten)]
    pub context: ContextInfo,
    pub requires_confirmation: bool,
}

impl From<ContextInfo> for ContextResponse {
    fn from(context: ContextInfo) -> Self {
        let requires_confirmation = context.requires_confirmation();
        Self {
            context,
            requires_confirmation,
        }
    }
}

/// Router builder exposing the classifier over HTTP.
pub fn intent_router() -> Router {
    Router::new().route(
        "/api/v1/intent/context",
        get(context_query_handler).post(context_json_handler),
    )
}

/// `pathname` and `referrer` travel beside the page's own query parameters; a
/// missing `pathname` classifies as an empty path.
pub(crate) async fn context_query_handler(RawQuery(raw): RawQuery) -> Json<ContextResponse> {
    let params = QueryParams::from_query_str(raw.as_deref().unwrap_or_default());
    let inputs = SignalInputs::from_parts(
        params.get(PATHNAME_PARAM).unwrap_or_default(),
        params.get(REFERRER_PARAM),
        Some(&params),
    );
    Json(classify(&inputs))
}

pub(crate) async fn context_json_handler(
    Json(request): Json<ContextRequest>,
) -> Json<ContextResponse> {
    let params = request
        .query
        .as_deref()
        .map(QueryParams::from_query_str)
        .unwrap_or_default();
    let inputs = SignalInputs::from_parts(
        &request.pathname,
        request.referrer.as_deref(),
        Some(&params),
    );
    Json(classify(&inputs))
}

fn classify(inputs: &SignalInputs) -> ContextResponse {
    let context = super::detect_from_inputs(inputs);
    debug!(
        pathname = %inputs.pathname,
        intent = %context.intent,
        confidence = %context.confidence,
        source = %context.signal_source,
        "classified visitor intent"
    );
    ContextResponse::from(context)
}

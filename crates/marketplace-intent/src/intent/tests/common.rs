use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::intent::QueryParams;

pub(super) const HIGH_SELLER_PATHS: &[&str] = &[
    "/for-sellers",
    "/sell",
    "/sell-my-company",
    "/list-business",
    "/seller/dashboard",
    "/valuation",
];

pub(super) const HIGH_BUYER_PATHS: &[&str] = &[
    "/search",
    "/search?industry=retail",
    "/buy",
    "/for-buyers",
    "/listings/42",
    "/discover",
];

pub(super) const BROWSE_SELLER_PATHS: &[&str] = &["/business/123", "/opportunities"];

pub(super) const NEUTRAL_PATHS: &[&str] = &["", "/", "/about", "/pricing", "/FOR-SELLERS"];

pub(super) fn params(pairs: &[(&str, &str)]) -> QueryParams {
    pairs.iter().copied().collect()
}

pub(super) fn utm(campaign: &str) -> QueryParams {
    params(&[("utm_campaign", campaign)])
}

pub(super) fn explicit(intent: &str) -> QueryParams {
    params(&[("intent", intent)])
}

pub(super) async fn json_body(response: Response) -> Value {
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is json")
}

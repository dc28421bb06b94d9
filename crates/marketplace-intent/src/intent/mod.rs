//! Visitor intent classification.
//!
//! Four independent rule tables feed one evaluation: the path and referrer
//! classifiers propose candidate intents, the fusion table ranks them against
//! the explicit `intent` and `utm_campaign` query parameters, and the CTA table
//! turns the winning intent into button copy. Every table is a `'static` slice
//! and evaluation reads nothing but its arguments, so identical inputs always
//! produce identical [`ContextInfo`] values.

pub mod cta;
pub mod domain;
pub mod fusion;
pub mod params;
pub mod path;
pub mod referrer;
pub mod router;
pub mod rules;

#[cfg(test)]
mod tests;

pub use cta::generate_cta;
pub use domain::{
    ActionId, Confidence, ContextInfo, CtaDescriptor, CtaPair, Intent, SignalInputs, SignalSource,
    UnknownIntent,
};
pub use fusion::{resolve, Resolution};
pub use params::QueryParams;
pub use path::{classify_path, match_path, PathMatch, PathTier};
pub use referrer::classify_referrer;
pub use router::{intent_router, ContextRequest, ContextResponse};

/// Classifies a visit from its path, optional referrer and query parameters.
pub fn detect_user_context(
    pathname: &str,
    referrer: Option<&str>,
    search_params: Option<&QueryParams>,
) -> ContextInfo {
    detect_from_inputs(&SignalInputs::from_parts(
        pathname,
        referrer,
        search_params,
    ))
}

pub fn detect_from_inputs(inputs: &SignalInputs) -> ContextInfo {
    let path_hit = path::match_path(&inputs.pathname);
    let path_intent = path_hit.map(|hit| hit.intent).unwrap_or(Intent::Neutral);
    let referrer_intent = referrer::classify_referrer(inputs.referrer.as_deref());

    let resolution = fusion::resolve(
        path_intent,
        referrer_intent,
        inputs.explicit_intent_param,
        inputs.utm_campaign.as_deref(),
    );
    let CtaPair { primary, secondary } = cta::generate_cta(resolution.intent, &inputs.pathname);

    ContextInfo {
        intent: resolution.intent,
        confidence: resolution.confidence,
        primary_cta: primary,
        secondary_cta: secondary,
        page_context: path::page_context(&inputs.pathname, path_hit),
        signal_source: resolution.source,
    }
}

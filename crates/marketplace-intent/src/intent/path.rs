use serde::Serialize;

use super::domain::Intent;
use super::rules::{first_match, Contains, Rule};

/// Strength of the path marker that matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathTier {
    /// Pages dedicated to one side of the marketplace (`/for-sellers`, `/search`).
    Direct,
    /// Pages that lean towards one side without committing (`/business`).
    Browse,
}

/// Path marker hit produced by [`match_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathMatch {
    pub marker: &'static str,
    pub intent: Intent,
    pub tier: PathTier,
}

impl PathMatch {
    /// Marker without its leading slash, e.g. `for-sellers`.
    pub fn label(&self) -> &'static str {
        self.marker.trim_start_matches('/')
    }
}

const fn marker(marker: &'static str, intent: Intent, tier: PathTier) -> Rule<Contains, PathMatch> {
    Rule {
        predicate: Contains(marker),
        result: PathMatch {
            marker,
            intent,
            tier,
        },
    }
}

/// Seller pages first, then buyer pages, then the weaker seller-leaning pages.
pub static PATH_RULES: &[Rule<Contains, PathMatch>] = &[
    marker("/for-sellers", Intent::Seller, PathTier::Direct),
    marker("/sell", Intent::Seller, PathTier::Direct),
    marker("/list-business", Intent::Seller, PathTier::Direct),
    marker("/seller", Intent::Seller, PathTier::Direct),
    marker("/valuation", Intent::Seller, PathTier::Direct),
    marker("/search", Intent::Buyer, PathTier::Direct),
    marker("/buy", Intent::Buyer, PathTier::Direct),
    marker("/for-buyers", Intent::Buyer, PathTier::Direct),
    marker("/listings", Intent::Buyer, PathTier::Direct),
    marker("/discover", Intent::Buyer, PathTier::Direct),
    marker("/business", Intent::Seller, PathTier::Browse),
    marker("/opportunities", Intent::Seller, PathTier::Browse),
];

pub fn match_path(pathname: &str) -> Option<PathMatch> {
    first_match(PATH_RULES, pathname).map(|rule| rule.result)
}

pub fn classify_path(pathname: &str) -> Intent {
    match_path(pathname)
        .map(|hit| hit.intent)
        .unwrap_or(Intent::Neutral)
}

/// Label describing the page the visitor landed on.
pub fn page_context(pathname: &str, hit: Option<PathMatch>) -> String {
    match hit {
        Some(hit) => hit.label().to_string(),
        None if pathname.is_empty() || pathname == "/" => "home".to_string(),
        None => "general".to_string(),
    }
}

use super::domain::Intent;
use super::rules::{first_match, AnyOf, Rule};

pub static REFERRER_RULES: &[Rule<AnyOf, Intent>] = &[
    Rule {
        predicate: AnyOf(&[
            "business-sale",
            "sell-business",
            "business-broker",
            "company-sale",
        ]),
        result: Intent::Seller,
    },
    Rule {
        predicate: AnyOf(&[
            "buy-business",
            "business-acquisition",
            "company-acquisition",
        ]),
        result: Intent::Buyer,
    },
];

/// Keyword match against the lower-cased referrer URL.
pub fn classify_referrer(referrer: Option<&str>) -> Intent {
    let Some(referrer) = referrer.filter(|value| !value.is_empty()) else {
        return Intent::Neutral;
    };

    let lowered = referrer.to_lowercase();
    first_match(REFERRER_RULES, lowered.as_str())
        .map(|rule| rule.result)
        .unwrap_or(Intent::Neutral)
}

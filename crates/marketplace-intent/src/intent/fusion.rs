use serde::Serialize;

use super::domain::{Confidence, Intent, SignalSource};
use super::rules::{first_match, AnyOf, Predicate, Rule};

const UTM_SELLER: AnyOf = AnyOf(&["seller", "sell"]);
const UTM_BUYER: AnyOf = AnyOf(&["buyer", "buy"]);

/// Signals handed to the precedence table, with the UTM text lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FusionSignals {
    pub path_intent: Intent,
    pub referrer_intent: Intent,
    pub explicit_intent: Option<Intent>,
    pub utm_campaign: Option<String>,
}

impl FusionSignals {
    pub fn new(
        path_intent: Intent,
        referrer_intent: Intent,
        explicit_intent: Option<Intent>,
        utm_campaign: Option<&str>,
    ) -> Self {
        Self {
            path_intent,
            referrer_intent,
            explicit_intent,
            utm_campaign: utm_campaign.map(str::to_lowercase),
        }
    }
}

/// What a precedence rule contributes once its predicate holds.
#[derive(Clone, Copy)]
pub struct FusionOutcome {
    pub source: SignalSource,
    pub confidence: Confidence,
    pub intent: fn(&FusionSignals) -> Intent,
}

pub type FusionRule = Rule<fn(&FusionSignals) -> bool, FusionOutcome>;

/// Final intent and confidence after fusing every signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub intent: Intent,
    pub confidence: Confidence,
    pub source: SignalSource,
}

impl Resolution {
    fn undetermined() -> Self {
        Self {
            intent: Intent::Neutral,
            confidence: Confidence::Low,
            source: SignalSource::Default,
        }
    }
}

fn has_explicit_intent(signals: &FusionSignals) -> bool {
    signals.explicit_intent.is_some()
}

fn path_is_decisive(signals: &FusionSignals) -> bool {
    !signals.path_intent.is_neutral()
}

fn utm_mentions_seller(signals: &FusionSignals) -> bool {
    signals
        .utm_campaign
        .as_deref()
        .is_some_and(|campaign| UTM_SELLER.matches(campaign))
}

fn utm_mentions_buyer(signals: &FusionSignals) -> bool {
    signals
        .utm_campaign
        .as_deref()
        .is_some_and(|campaign| UTM_BUYER.matches(campaign))
}

fn referrer_is_decisive(signals: &FusionSignals) -> bool {
    !signals.referrer_intent.is_neutral()
}

fn always(_: &FusionSignals) -> bool {
    true
}

fn explicit_intent(signals: &FusionSignals) -> Intent {
    signals.explicit_intent.unwrap_or(Intent::Neutral)
}

fn path_intent(signals: &FusionSignals) -> Intent {
    signals.path_intent
}

fn referrer_intent(signals: &FusionSignals) -> Intent {
    signals.referrer_intent
}

fn seller(_: &FusionSignals) -> Intent {
    Intent::Seller
}

fn buyer(_: &FusionSignals) -> Intent {
    Intent::Buyer
}

fn neutral(_: &FusionSignals) -> Intent {
    Intent::Neutral
}

/// Precedence from strongest to weakest signal. The last rule always holds.
pub static FUSION_RULES: &[FusionRule] = &[
    Rule {
        predicate: has_explicit_intent,
        result: FusionOutcome {
            source: SignalSource::ExplicitParam,
            confidence: Confidence::High,
            intent: explicit_intent,
        },
    },
    Rule {
        predicate: path_is_decisive,
        result: FusionOutcome {
            source: SignalSource::Path,
            confidence: Confidence::High,
            intent: path_intent,
        },
    },
    Rule {
        predicate: utm_mentions_seller,
        result: FusionOutcome {
            source: SignalSource::UtmCampaign,
            confidence: Confidence::Medium,
            intent: seller,
        },
    },
    Rule {
        predicate: utm_mentions_buyer,
        result: FusionOutcome {
            source: SignalSource::UtmCampaign,
            confidence: Confidence::Medium,
            intent: buyer,
        },
    },
    Rule {
        predicate: referrer_is_decisive,
        result: FusionOutcome {
            source: SignalSource::Referrer,
            confidence: Confidence::Medium,
            intent: referrer_intent,
        },
    },
    Rule {
        predicate: always,
        result: FusionOutcome {
            source: SignalSource::Default,
            confidence: Confidence::Low,
            intent: neutral,
        },
    },
];

pub fn resolve(
    path_intent: Intent,
    referrer_intent: Intent,
    explicit_intent: Option<Intent>,
    utm_campaign: Option<&str>,
) -> Resolution {
    let signals = FusionSignals::new(path_intent, referrer_intent, explicit_intent, utm_campaign);
    resolve_signals(&signals)
}

pub fn resolve_signals(signals: &FusionSignals) -> Resolution {
    match first_match(FUSION_RULES, signals) {
        Some(rule) => Resolution {
            intent: (rule.result.intent)(signals),
            confidence: rule.result.confidence,
            source: rule.result.source,
        },
        None => Resolution::undetermined(),
    }
}

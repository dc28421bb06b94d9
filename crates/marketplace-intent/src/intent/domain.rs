use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Inferred goal of the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Buyer,
    Seller,
    Neutral,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Buyer => "buyer",
            Intent::Seller => "seller",
            Intent::Neutral => "neutral",
        }
    }

    pub fn is_neutral(&self) -> bool {
        matches!(self, Intent::Neutral)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when an `intent` value is not one of the recognized labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized intent '{0}'")]
pub struct UnknownIntent(pub String);

impl FromStr for Intent {
    type Err = UnknownIntent;

    /// Labels are matched exactly; `Buyer` or ` buyer` are not recognized.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "buyer" => Ok(Intent::Buyer),
            "seller" => Ok(Intent::Seller),
            "neutral" => Ok(Intent::Neutral),
            other => Err(UnknownIntent(other.to_string())),
        }
    }
}

/// Grade of trust in the inferred intent. Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }

    /// Only a high-confidence inference may pre-select a role without asking.
    pub fn requires_confirmation(&self) -> bool {
        *self != Confidence::High
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which precedence rule produced the final intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalSource {
    ExplicitParam,
    Path,
    UtmCampaign,
    Referrer,
    Default,
}

impl SignalSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalSource::ExplicitParam => "explicit_param",
            SignalSource::Path => "path",
            SignalSource::UtmCampaign => "utm_campaign",
            SignalSource::Referrer => "referrer",
            SignalSource::Default => "default",
        }
    }
}

impl fmt::Display for SignalSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of actions a call-to-action can trigger in the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionId {
    SignupBuyer,
    SignupSeller,
    SignupNeutral,
    BusinessValuation,
    BusinessListing,
    Login,
    ExploreAlternative,
}

impl ActionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionId::SignupBuyer => "signup-buyer",
            ActionId::SignupSeller => "signup-seller",
            ActionId::SignupNeutral => "signup-neutral",
            ActionId::BusinessValuation => "business-valuation",
            ActionId::BusinessListing => "business-listing",
            ActionId::Login => "login",
            ActionId::ExploreAlternative => "explore-alternative",
        }
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Button copy, action and opaque style token rendered by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaDescriptor {
    pub text: String,
    pub action: ActionId,
    pub style_token: String,
}

/// Primary and secondary call-to-action for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaPair {
    pub primary: CtaDescriptor,
    pub secondary: CtaDescriptor,
}

/// Snapshot of every signal the engine reads for a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SignalInputs {
    pub pathname: String,
    pub referrer: Option<String>,
    pub explicit_intent_param: Option<Intent>,
    pub utm_campaign: Option<String>,
}

/// Result of one classification. Built fresh per call and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextInfo {
    pub intent: Intent,
    pub confidence: Confidence,
    pub primary_cta: CtaDescriptor,
    pub secondary_cta: CtaDescriptor,
    pub page_context: String,
    pub signal_source: SignalSource,
}

impl ContextInfo {
    pub fn requires_confirmation(&self) -> bool {
        self.confidence.requires_confirmation()
    }
}

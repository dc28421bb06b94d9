use super::domain::{ActionId, CtaDescriptor, CtaPair, Intent};
use super::rules::{first_match, Predicate, Rule};

/// Static copy for one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtaTemplate {
    pub text: &'static str,
    pub action: ActionId,
    pub style_token: &'static str,
}

impl CtaTemplate {
    fn render(&self) -> CtaDescriptor {
        CtaDescriptor {
            text: self.text.to_string(),
            action: self.action,
            style_token: self.style_token.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtaPairTemplate {
    pub primary: CtaTemplate,
    pub secondary: CtaTemplate,
}

impl CtaPairTemplate {
    fn render(&self) -> CtaPair {
        CtaPair {
            primary: self.primary.render(),
            secondary: self.secondary.render(),
        }
    }
}

pub struct CtaContext<'a> {
    pub intent: Intent,
    pub pathname: &'a str,
}

/// Selects a CTA pair for an intent, optionally narrowed to pages containing `path_marker`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtaWhen {
    pub intent: Intent,
    pub path_marker: Option<&'static str>,
}

impl<'a> Predicate<CtaContext<'a>> for CtaWhen {
    fn matches(&self, context: &CtaContext<'a>) -> bool {
        self.intent == context.intent
            && self
                .path_marker
                .map_or(true, |marker| context.pathname.contains(marker))
    }
}

const SELLER_SECONDARY: CtaTemplate = CtaTemplate {
    text: "Create Seller Account",
    action: ActionId::SignupSeller,
    style_token: "cta-outline",
};

const NEUTRAL_PAIR: CtaPairTemplate = CtaPairTemplate {
    primary: CtaTemplate {
        text: "Get Started",
        action: ActionId::SignupNeutral,
        style_token: "cta-neutral",
    },
    secondary: CtaTemplate {
        text: "Log In",
        action: ActionId::Login,
        style_token: "cta-ghost",
    },
};

pub static CTA_RULES: &[Rule<CtaWhen, CtaPairTemplate>] = &[
    Rule {
        predicate: CtaWhen {
            intent: Intent::Seller,
            path_marker: Some("/valuation"),
        },
        result: CtaPairTemplate {
            primary: CtaTemplate {
                text: "Get Free Valuation",
                action: ActionId::BusinessValuation,
                style_token: "cta-seller",
            },
            secondary: SELLER_SECONDARY,
        },
    },
    Rule {
        predicate: CtaWhen {
            intent: Intent::Seller,
            path_marker: Some("/for-sellers"),
        },
        result: CtaPairTemplate {
            primary: CtaTemplate {
                text: "Value Your Business",
                action: ActionId::BusinessValuation,
                style_token: "cta-seller",
            },
            secondary: SELLER_SECONDARY,
        },
    },
    Rule {
        predicate: CtaWhen {
            intent: Intent::Seller,
            path_marker: None,
        },
        result: CtaPairTemplate {
            primary: CtaTemplate {
                text: "List Your Business",
                action: ActionId::BusinessListing,
                style_token: "cta-seller",
            },
            secondary: SELLER_SECONDARY,
        },
    },
    Rule {
        predicate: CtaWhen {
            intent: Intent::Buyer,
            path_marker: None,
        },
        result: CtaPairTemplate {
            primary: CtaTemplate {
                text: "Start Browsing Businesses",
                action: ActionId::SignupBuyer,
                style_token: "cta-buyer",
            },
            secondary: CtaTemplate {
                text: "Thinking of Selling?",
                action: ActionId::ExploreAlternative,
                style_token: "cta-outline",
            },
        },
    },
    Rule {
        predicate: CtaWhen {
            intent: Intent::Neutral,
            path_marker: None,
        },
        result: NEUTRAL_PAIR,
    },
];

pub fn generate_cta(intent: Intent, pathname: &str) -> CtaPair {
    let context = CtaContext { intent, pathname };
    first_match(CTA_RULES, &context)
        .map(|rule| rule.result)
        .unwrap_or(NEUTRAL_PAIR)
        .render()
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::{form_urlencoded, Url};

use super::domain::{Intent, SignalInputs};

pub const INTENT_PARAM: &str = "intent";
pub const UTM_CAMPAIGN_PARAM: &str = "utm_campaign";

/// Decoded query parameters of the visited URL.
///
/// When a key repeats, the first occurrence is kept, the way
/// `URLSearchParams::get` behaves in the browser.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `a=1&b=2`, with or without a leading `?`.
    pub fn from_query_str(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.entry(key.into()).or_insert_with(|| value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// The `intent` parameter, when it names a recognized intent.
    pub fn intent(&self) -> Option<Intent> {
        self.get(INTENT_PARAM).and_then(|raw| raw.parse().ok())
    }

    pub fn utm_campaign(&self) -> Option<&str> {
        self.get(UTM_CAMPAIGN_PARAM)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::default(), |params, (key, value)| params.with(key, value))
    }
}

impl SignalInputs {
    pub fn from_parts(
        pathname: &str,
        referrer: Option<&str>,
        search_params: Option<&QueryParams>,
    ) -> Self {
        Self {
            pathname: pathname.to_string(),
            referrer: referrer.map(str::to_string),
            explicit_intent_param: search_params.and_then(QueryParams::intent),
            utm_campaign: search_params
                .and_then(QueryParams::utm_campaign)
                .map(str::to_string),
        }
    }

    /// Splits an absolute URL or a path with query string into signal inputs.
    /// The fragment is ignored.
    pub fn from_href(href: &str, referrer: Option<&str>) -> Self {
        match Url::parse(href) {
            Ok(url) => {
                let params: QueryParams = url.query_pairs().collect();
                Self::from_parts(url.path(), referrer, Some(&params))
            }
            Err(_) => {
                let without_fragment = href.split('#').next().unwrap_or_default();
                let (pathname, query) = without_fragment
                    .split_once('?')
                    .unwrap_or((without_fragment, ""));
                let params = QueryParams::from_query_str(query);
                Self::from_parts(pathname, referrer, Some(&params))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leading_question_mark_and_decodes_values() {
        let params = QueryParams::from_query_str("?utm_campaign=spring+seller%20promo&intent=buyer");
        assert_eq!(params.utm_campaign(), Some("spring seller promo"));
        assert_eq!(params.intent(), Some(Intent::Buyer));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn first_occurrence_of_repeated_key_wins() {
        let params = QueryParams::from_query_str("intent=seller&intent=buyer");
        assert_eq!(params.intent(), Some(Intent::Seller));
    }

    #[test]
    fn unrecognized_intent_is_treated_as_absent() {
        let params = QueryParams::new().with("intent", "investor");
        assert_eq!(params.get("intent"), Some("investor"));
        assert_eq!(params.intent(), None);
    }

    #[test]
    fn empty_query_yields_no_params() {
        assert!(QueryParams::from_query_str("").is_empty());
        assert!(QueryParams::from_query_str("?").is_empty());
    }

    #[test]
    fn href_with_host_is_split_into_path_and_query() {
        let inputs = SignalInputs::from_href(
            "https://market.example/for-sellers?utm_campaign=buyer-retarget#faq",
            Some("https://news.example/"),
        );
        assert_eq!(inputs.pathname, "/for-sellers");
        assert_eq!(inputs.utm_campaign.as_deref(), Some("buyer-retarget"));
        assert_eq!(inputs.referrer.as_deref(), Some("https://news.example/"));
        assert_eq!(inputs.explicit_intent_param, None);
    }

    #[test]
    fn relative_href_keeps_path_verbatim() {
        let inputs = SignalInputs::from_href("/valuation?intent=seller#top", None);
        assert_eq!(inputs.pathname, "/valuation");
        assert_eq!(inputs.explicit_intent_param, Some(Intent::Seller));
        assert_eq!(inputs.utm_campaign, None);
    }
}

//! Per-report configuration derived once from the payload and request tags.

use crate::payload::AnalyticsPayload;
use crate::types::{Language, Originator, Platform};
use crate::NA;

const DEFAULT_CURRENCY_SYMBOL: &str = "$";
const DEFAULT_CURRENCY_CODE: &str = "USD";

/// Immutable per-report configuration threaded through sheet assembly.
///
/// Derived exactly once, immediately after the payload fetch. All the
/// defensive extraction of optional sub-records (country → currency,
/// profile → names) happens here so that downstream code works with a flat,
/// total structure.
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub platform: Platform,
    pub language: Language,
    pub originator: Originator,
    /// Currency sign appended to monetary cells. Defaults to `"$"`.
    pub currency_symbol: String,
    /// ISO currency code shown on the profile sheet. Defaults to `"USD"`.
    pub currency_code: String,
    pub full_name: String,
    pub user_name: String,
}

impl ReportContext {
    /// Derives the context from request tags and a fetched payload.
    ///
    /// Missing or empty currency fields fall back to `$` / `USD`; missing
    /// or empty names fall back to the `"NA"` placeholder.
    #[must_use]
    pub fn derive(
        platform: Platform,
        language: Language,
        originator: Originator,
        payload: &AnalyticsPayload,
    ) -> Self {
        let currency_symbol = payload
            .country
            .as_ref()
            .and_then(|c| non_empty(c.currency_symbol.as_deref()))
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string());
        let currency_code = payload
            .country
            .as_ref()
            .and_then(|c| non_empty(c.currency_code.as_deref()))
            .unwrap_or_else(|| DEFAULT_CURRENCY_CODE.to_string());

        let full_name = non_empty(payload.profile.full_name.as_deref())
            .unwrap_or_else(|| NA.to_string());
        let user_name = non_empty(payload.profile.user_name.as_deref())
            .unwrap_or_else(|| NA.to_string());

        Self {
            platform,
            language,
            originator,
            currency_symbol,
            currency_code,
            full_name,
            user_name,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    let v = value?.trim();
    if v.is_empty() {
        return None;
    }
    Some(v.to_string())
}

//! Flattens the wire shapes into the shared [`AnalyticsPayload`].
//!
//! Normalization happens once, right after deserialization. Blank strings
//! become `None`, metric records without a period label are dropped, and
//! the platform-specific trend lists (`sounds`, `brands`) both land in
//! [`TrendData`] so the report layer can stay platform-agnostic.

use anex_core::{
    AnalyticsPayload, CountryInfo, MetricRecord, NotableFollower, ProfileInfo, ReachabilityBucket,
    RequestRecord, TrendData,
};

use crate::types::{RawAnalytics, RawPartnershipContent};

/// Builds the normalized payload from one creator's raw analytics plus the
/// request metadata (if the export references a partnership content record).
#[must_use]
pub fn normalize_analytics(
    raw: RawAnalytics,
    request: Option<RequestRecord>,
) -> AnalyticsPayload {
    let profile = ProfileInfo {
        full_name: non_blank(raw.full_name),
        user_name: non_blank(raw.user_name),
        followers: raw.followers,
    };

    let country = raw.country.map(|c| CountryInfo {
        currency_symbol: non_blank(c.currency_symbol),
        currency_code: non_blank(c.currency_code),
    });

    let metrics = raw
        .metrics
        .into_iter()
        .filter_map(|m| {
            let period = non_blank(m.period)?;
            Some(MetricRecord {
                period,
                followers: m.followers,
                engagement_rate: m.engagement_rate,
                avg_likes: m.avg_likes,
                avg_comments: m.avg_comments,
                avg_views: m.avg_views,
                earned_media_value: m.earned_media_value,
                sponsored_engagement_rate: m.sponsored_engagement_rate,
                estimated_reach: m.estimated_reach,
            })
        })
        .collect();

    let audience = raw
        .audience
        .into_iter()
        .filter_map(|b| {
            let range = non_blank(b.range)?;
            Some(ReachabilityBucket {
                range,
                male_share: b.male,
                female_share: b.female,
            })
        })
        .collect();

    let notable_followers = raw
        .notable_followers
        .into_iter()
        .map(|f| NotableFollower {
            user_name: f.user_name,
            followers: f.followers,
        })
        .collect();

    let trends = raw
        .trends
        .map(|t| TrendData {
            hashtags: trimmed_entries(t.hashtags),
            sounds: trimmed_entries(t.sounds),
            brands: trimmed_entries(t.brands),
            interests: trimmed_entries(t.interests),
        })
        .unwrap_or_default();

    AnalyticsPayload {
        profile,
        country,
        requests: request.into_iter().collect(),
        metrics,
        audience,
        notable_followers,
        trends,
    }
}

/// Extracts campaign/brand/product titles from a raw partnership content
/// record.
#[must_use]
pub fn normalize_content(raw: &RawPartnershipContent) -> RequestRecord {
    let campaign_title = raw
        .campaign
        .as_ref()
        .and_then(|c| non_blank(c.title.clone()));
    let brand_title = raw
        .campaign
        .as_ref()
        .and_then(|c| c.brand.as_ref())
        .and_then(|b| non_blank(b.title.clone()));
    let product_name = raw.product.as_ref().and_then(|p| non_blank(p.name.clone()));

    RequestRecord {
        campaign_title,
        brand_title,
        product_name,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}

fn trimmed_entries(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .filter_map(|e| non_blank(Some(e)))
        .collect()
}

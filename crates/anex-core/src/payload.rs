//! Normalized analytics payload shared by the provider and report crates.
//!
//! Providers deserialize platform-specific wire shapes and flatten them into
//! this structure once; everything downstream reads it without re-checking
//! nesting. Absent or empty upstream fields become `None` here; the report
//! layer decides whether that renders as `"NA"` or a quantitative zero.

use serde::{Deserialize, Serialize};

/// One creator's analytics, scoped to a single platform. Read-only after
/// normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsPayload {
    pub profile: ProfileInfo,
    /// Locale/currency sub-record; absent for creators without a resolved
    /// country.
    pub country: Option<CountryInfo>,
    /// Request metadata (campaign/brand/product) attached to this export.
    pub requests: Vec<RequestRecord>,
    /// One record per metric period or category.
    pub metrics: Vec<MetricRecord>,
    /// Gender-segmented follower reachability buckets, in payload order.
    pub audience: Vec<ReachabilityBucket>,
    /// Fetched alongside the rest of the payload; no sheet renders these.
    pub notable_followers: Vec<NotableFollower>,
    pub trends: TrendData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileInfo {
    pub full_name: Option<String>,
    pub user_name: Option<String>,
    pub followers: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryInfo {
    pub currency_symbol: Option<String>,
    pub currency_code: Option<String>,
}

/// Campaign/brand/product titles for one export request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestRecord {
    pub campaign_title: Option<String>,
    pub brand_title: Option<String>,
    pub product_name: Option<String>,
}

/// One metric period (e.g. "last 30 days") or category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricRecord {
    pub period: String,
    pub followers: Option<f64>,
    /// Fraction of followers engaging, already expressed in percent points.
    pub engagement_rate: Option<f64>,
    pub avg_likes: Option<f64>,
    pub avg_comments: Option<f64>,
    pub avg_views: Option<f64>,
    /// Monetary value in the creator's local currency.
    pub earned_media_value: Option<f64>,
    /// Control-report-only metrics; ignored for client reports.
    pub sponsored_engagement_rate: Option<f64>,
    pub estimated_reach: Option<f64>,
}

/// One follower-reachability range with its gender split, in percent points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReachabilityBucket {
    /// Range label, e.g. `"500-1000"` or `"1500+"`.
    pub range: String,
    pub male_share: Option<f64>,
    pub female_share: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotableFollower {
    pub user_name: String,
    pub followers: Option<f64>,
}

/// Trend entry lists. Both `sounds` (TikTok) and `brands` (Instagram) are
/// always present here; the column registry decides which one a given
/// report shows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendData {
    pub hashtags: Vec<String>,
    pub sounds: Vec<String>,
    pub brands: Vec<String>,
    pub interests: Vec<String>,
}

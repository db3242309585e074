//! Wire types for the platform analytics and content services.
//!
//! Both analytics services wrap responses in a `{"status": "OK", ...}`
//! envelope; `"status": "ERROR"` carries an `alert.message`. Fields are
//! camelCase on the wire. Everything is optional-by-default here; the
//! normalization layer, not the deserializer, decides what a missing field
//! means.

use serde::Deserialize;

/// `getAnalytics` response: `{ "status": "OK", "user": { ... } | null }`.
///
/// A present envelope with a `null` user means "no analytics data for this
/// creator", a valid outcome rather than an error.
#[derive(Debug, Deserialize)]
pub struct AnalyticsResponse {
    pub status: String,
    #[serde(default)]
    pub user: Option<RawAnalytics>,
}

/// One creator's analytics as delivered by either platform service. The
/// TikTok service populates `sounds`, the Instagram service `brands`; the
/// rest of the shape is shared.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAnalytics {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub followers: Option<f64>,
    #[serde(default)]
    pub country: Option<RawCountry>,
    #[serde(default)]
    pub metrics: Vec<RawMetric>,
    #[serde(default)]
    pub audience: Vec<RawReachability>,
    #[serde(default)]
    pub notable_followers: Vec<RawNotableFollower>,
    #[serde(default)]
    pub trends: Option<RawTrends>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCountry {
    #[serde(default)]
    pub currency_symbol: Option<String>,
    #[serde(default)]
    pub currency_code: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMetric {
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub followers: Option<f64>,
    #[serde(default)]
    pub engagement_rate: Option<f64>,
    #[serde(default)]
    pub avg_likes: Option<f64>,
    #[serde(default)]
    pub avg_comments: Option<f64>,
    #[serde(default)]
    pub avg_views: Option<f64>,
    #[serde(default)]
    pub earned_media_value: Option<f64>,
    #[serde(default)]
    pub sponsored_engagement_rate: Option<f64>,
    #[serde(default)]
    pub estimated_reach: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReachability {
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub male: Option<f64>,
    #[serde(default)]
    pub female: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNotableFollower {
    pub user_name: String,
    #[serde(default)]
    pub followers: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTrends {
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub sounds: Vec<String>,
    #[serde(default)]
    pub brands: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// Content service response: `{ "status": "OK", "content": { ... } | null }`.
#[derive(Debug, Deserialize)]
pub struct ContentResponse {
    pub status: String,
    #[serde(default)]
    pub content: Option<RawPartnershipContent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPartnershipContent {
    #[serde(default)]
    pub campaign: Option<RawCampaign>,
    #[serde(default)]
    pub product: Option<RawProduct>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCampaign {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub brand: Option<RawBrand>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBrand {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    #[serde(default)]
    pub name: Option<String>,
}

//! Column registry: which columns exist per sheet for a given report
//! context, and their localized labels.
//!
//! Platform-specific columns are declared once on the spec
//! (`platform: Some(..)`) instead of being filtered ad hoc at each call
//! site; the same mechanism covers any future platform-conditional column.
//! `control_only` columns appear only on internal control reports.

use anex_core::{Language, Originator, Platform, ReportContext};

use crate::document::SheetKind;
use crate::format::{MissingPolicy, ValueKind};

/// Identity of a column, unique within any one sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    // Request
    Campaign,
    Brand,
    Product,
    RequestOriginator,
    // Profile
    FullName,
    UserName,
    Followers,
    Currency,
    // Metrics
    Period,
    EngagementRate,
    AvgLikes,
    AvgComments,
    AvgViews,
    EarnedMediaValue,
    SponsoredEngagementRate,
    EstimatedReach,
    // Audience
    ReachabilityRange,
    MaleShare,
    FemaleShare,
    // Trends
    TopHashtags,
    TopSounds,
    TopBrands,
    TopInterests,
}

/// Static declaration of one column: identity, value rendering, and the
/// conditions under which it exists.
#[derive(Debug, Clone, Copy)]
struct ColumnSpec {
    key: ColumnKey,
    kind: ValueKind,
    missing: MissingPolicy,
    /// `Some(p)` restricts the column to platform `p`; `None` means both.
    platform: Option<Platform>,
    /// Present only on `Originator::Control` reports.
    control_only: bool,
}

impl ColumnSpec {
    const fn plain(key: ColumnKey, kind: ValueKind) -> Self {
        Self {
            key,
            kind,
            missing: MissingPolicy::Na,
            platform: None,
            control_only: false,
        }
    }

    const fn zeroed(key: ColumnKey, kind: ValueKind) -> Self {
        Self {
            key,
            kind,
            missing: MissingPolicy::Zero,
            platform: None,
            control_only: false,
        }
    }

    const fn control(key: ColumnKey, kind: ValueKind, missing: MissingPolicy) -> Self {
        Self {
            key,
            kind,
            missing,
            platform: None,
            control_only: true,
        }
    }

    const fn only_on(key: ColumnKey, kind: ValueKind, platform: Platform) -> Self {
        Self {
            key,
            kind,
            missing: MissingPolicy::Na,
            platform: Some(platform),
            control_only: false,
        }
    }
}

const REQUEST_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::plain(ColumnKey::Campaign, ValueKind::Text),
    ColumnSpec::plain(ColumnKey::Brand, ValueKind::Text),
    ColumnSpec::plain(ColumnKey::Product, ValueKind::Text),
    ColumnSpec::control(ColumnKey::RequestOriginator, ValueKind::Text, MissingPolicy::Na),
];

const PROFILE_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::plain(ColumnKey::FullName, ValueKind::Text),
    ColumnSpec::plain(ColumnKey::UserName, ValueKind::Text),
    ColumnSpec::plain(ColumnKey::Followers, ValueKind::PlainNumber),
    ColumnSpec::plain(ColumnKey::Currency, ValueKind::Text),
];

// Metrics numerics use the quantitative-zero substitution: a missing value
// renders "0", not "NA" (see the formatter's MissingPolicy).
const METRICS_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::plain(ColumnKey::Period, ValueKind::Text),
    ColumnSpec::zeroed(ColumnKey::Followers, ValueKind::PlainNumber),
    ColumnSpec::zeroed(ColumnKey::EngagementRate, ValueKind::Percentage),
    ColumnSpec::zeroed(ColumnKey::AvgLikes, ValueKind::PlainNumber),
    ColumnSpec::zeroed(ColumnKey::AvgComments, ValueKind::PlainNumber),
    ColumnSpec::zeroed(ColumnKey::AvgViews, ValueKind::PlainNumber),
    ColumnSpec::zeroed(ColumnKey::EarnedMediaValue, ValueKind::Currency),
    ColumnSpec::control(
        ColumnKey::SponsoredEngagementRate,
        ValueKind::Percentage,
        MissingPolicy::Zero,
    ),
    ColumnSpec::control(
        ColumnKey::EstimatedReach,
        ValueKind::PlainNumber,
        MissingPolicy::Zero,
    ),
];

const AUDIENCE_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::plain(ColumnKey::ReachabilityRange, ValueKind::Text),
    ColumnSpec::plain(ColumnKey::MaleShare, ValueKind::Percentage),
    ColumnSpec::plain(ColumnKey::FemaleShare, ValueKind::Percentage),
];

const TRENDS_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::plain(ColumnKey::TopHashtags, ValueKind::Text),
    ColumnSpec::only_on(ColumnKey::TopSounds, ValueKind::Text, Platform::Tiktok),
    ColumnSpec::only_on(ColumnKey::TopBrands, ValueKind::Text, Platform::Instagram),
    ColumnSpec::plain(ColumnKey::TopInterests, ValueKind::Text),
];

/// A resolved column: spec plus the localized label for the report language.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub key: ColumnKey,
    pub kind: ValueKind,
    pub missing: MissingPolicy,
    pub label: &'static str,
}

/// Ordered, de-conditionalized column list for one sheet. Order defines the
/// output column order.
#[derive(Debug, Clone, Default)]
pub struct ColumnSet {
    columns: Vec<Column>,
}

impl ColumnSet {
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Header labels in column order.
    #[must_use]
    pub fn labels(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.label).collect()
    }

    #[must_use]
    pub fn contains(&self, key: ColumnKey) -> bool {
        self.columns.iter().any(|c| c.key == key)
    }
}

/// Resolves the ordered column set for one sheet kind under the given
/// report context. Pure and deterministic: the same context always yields
/// the same columns.
#[must_use]
pub fn columns_for(kind: SheetKind, ctx: &ReportContext) -> ColumnSet {
    let specs = match kind {
        SheetKind::Request => REQUEST_COLUMNS,
        SheetKind::Profile => PROFILE_COLUMNS,
        SheetKind::Metrics => METRICS_COLUMNS,
        SheetKind::Audience => AUDIENCE_COLUMNS,
        SheetKind::Trends => TRENDS_COLUMNS,
    };

    let columns = specs
        .iter()
        .filter(|spec| spec.platform.is_none_or(|p| p == ctx.platform))
        .filter(|spec| !spec.control_only || ctx.originator == Originator::Control)
        .map(|spec| Column {
            key: spec.key,
            kind: spec.kind,
            missing: spec.missing,
            label: label(spec.key, ctx.language),
        })
        .collect();

    ColumnSet { columns }
}

/// Localized label for a column. Total over both enums: adding a variant
/// without a label is a compile error, so a registered language can never
/// silently produce an empty or partial header row.
#[must_use]
pub fn label(key: ColumnKey, language: Language) -> &'static str {
    use ColumnKey as K;
    match (key, language) {
        (K::Campaign, Language::En) => "Campaign",
        (K::Campaign, Language::Es) => "Campaña",
        (K::Brand, Language::En) => "Brand",
        (K::Brand, Language::Es) => "Marca",
        (K::Product, Language::En) => "Product",
        (K::Product, Language::Es) => "Producto",
        (K::RequestOriginator, Language::En) => "Originator",
        (K::RequestOriginator, Language::Es) => "Origen",
        (K::FullName, Language::En) => "Full name",
        (K::FullName, Language::Es) => "Nombre completo",
        (K::UserName, Language::En) => "Username",
        (K::UserName, Language::Es) => "Usuario",
        (K::Followers, Language::En) => "Followers",
        (K::Followers, Language::Es) => "Seguidores",
        (K::Currency, Language::En) => "Currency",
        (K::Currency, Language::Es) => "Moneda",
        (K::Period, Language::En) => "Period",
        (K::Period, Language::Es) => "Período",
        (K::EngagementRate, Language::En) => "Engagement rate",
        (K::EngagementRate, Language::Es) => "Tasa de interacción",
        (K::AvgLikes, Language::En) => "Avg likes",
        (K::AvgLikes, Language::Es) => "Promedio de me gusta",
        (K::AvgComments, Language::En) => "Avg comments",
        (K::AvgComments, Language::Es) => "Promedio de comentarios",
        (K::AvgViews, Language::En) => "Avg views",
        (K::AvgViews, Language::Es) => "Promedio de vistas",
        (K::EarnedMediaValue, Language::En) => "Earned media value",
        (K::EarnedMediaValue, Language::Es) => "Valor de medios ganados",
        (K::SponsoredEngagementRate, Language::En) => "Sponsored engagement rate",
        (K::SponsoredEngagementRate, Language::Es) => "Tasa de interacción patrocinada",
        (K::EstimatedReach, Language::En) => "Estimated reach",
        (K::EstimatedReach, Language::Es) => "Alcance estimado",
        (K::ReachabilityRange, Language::En) => "Reachability range",
        (K::ReachabilityRange, Language::Es) => "Rango de alcance",
        (K::MaleShare, Language::En) => "Male",
        (K::MaleShare, Language::Es) => "Hombres",
        (K::FemaleShare, Language::En) => "Female",
        (K::FemaleShare, Language::Es) => "Mujeres",
        (K::TopHashtags, Language::En) => "Top hashtags",
        (K::TopHashtags, Language::Es) => "Hashtags principales",
        (K::TopSounds, Language::En) => "Top sounds",
        (K::TopSounds, Language::Es) => "Sonidos principales",
        (K::TopBrands, Language::En) => "Top brands",
        (K::TopBrands, Language::Es) => "Marcas principales",
        (K::TopInterests, Language::En) => "Top interests",
        (K::TopInterests, Language::Es) => "Intereses principales",
    }
}

/// Localized worksheet title for a sheet kind.
#[must_use]
pub fn sheet_title(kind: SheetKind, language: Language) -> &'static str {
    match (kind, language) {
        (SheetKind::Request, Language::En) => "Request",
        (SheetKind::Request, Language::Es) => "Solicitud",
        (SheetKind::Profile, Language::En) => "Profile",
        (SheetKind::Profile, Language::Es) => "Perfil",
        (SheetKind::Metrics, Language::En) => "Metrics",
        (SheetKind::Metrics, Language::Es) => "Métricas",
        (SheetKind::Audience, Language::En) => "Audience",
        (SheetKind::Audience, Language::Es) => "Audiencia",
        (SheetKind::Trends, Language::En) => "Trends",
        (SheetKind::Trends, Language::Es) => "Tendencias",
    }
}

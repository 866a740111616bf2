//! Data types for the VideoBot admin panel
//!
//! These types mirror the backend API payloads for serialization/deserialization.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Envelope
// ============================================================================

/// `{status, ...}` wrapper every endpoint answers with.
///
/// Failures carry `message` or `error` (the backend uses both spellings).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub body: T,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }

    /// Text a user should see for this response, if the server sent any.
    pub fn user_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .filter(|m| !m.trim().is_empty())
    }
}

/// Body of responses that only carry `status` / `message`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ack {
    #[serde(default)]
    pub product_id: Option<i64>,
}

// ============================================================================
// Dashboard
// ============================================================================

/// Dashboard counters. Any of them may be missing or `null` on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Stats {
    #[serde(default)]
    pub total_products: Option<u64>,
    #[serde(default)]
    pub total_sales: Option<u64>,
    /// Sum of Stars; the backend may report it as a float.
    #[serde(default)]
    pub total_revenue: Option<f64>,
    #[serde(default)]
    pub total_users: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StatsBody {
    #[serde(default)]
    pub stats: Stats,
}

/// Values actually shown in the four dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatCounters {
    pub products: u64,
    pub sales: u64,
    pub revenue: f64,
    pub users: u64,
}

impl From<&Stats> for StatCounters {
    fn from(stats: &Stats) -> Self {
        Self {
            products: stats.total_products.unwrap_or(0),
            sales: stats.total_sales.unwrap_or(0),
            revenue: stats.total_revenue.unwrap_or(0.0),
            users: stats.total_users.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Sale,
    Download,
    User,
    Product,
    #[serde(other)]
    Other,
}

impl ActivityKind {
    /// Icon name used by the activity feed.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Sale => "shopping-cart",
            Self::Download => "download",
            Self::User => "user-plus",
            Self::Product => "film",
            Self::Other => "info-circle",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl ActivityEntry {
    pub fn time_ago(&self, now: DateTime<Utc>) -> String {
        relative_time(now, self.at)
    }
}

/// "just now", "5 min ago", "3 h ago", "2 d ago".
pub fn relative_time(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    if elapsed < Duration::minutes(1) {
        "just now".to_string()
    } else if elapsed < Duration::hours(1) {
        format!("{} min ago", elapsed.num_minutes())
    } else if elapsed < Duration::days(1) {
        format!("{} h ago", elapsed.num_hours())
    } else {
        format!("{} d ago", elapsed.num_days())
    }
}

// ============================================================================
// Products
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price_stars: i64,
    #[serde(default = "default_true", deserialize_with = "bool_or_int")]
    pub is_active: bool,
    #[serde(default)]
    pub thumbnail_path: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub duration_seconds: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Product {
    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Active"
        } else {
            "Inactive"
        }
    }

    pub fn badge_class(&self) -> &'static str {
        if self.is_active {
            "badge-success"
        } else {
            "badge-secondary"
        }
    }
}

fn default_true() -> bool {
    true
}

/// SQLite hands booleans back as 0/1.
fn bool_or_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(i) => i != 0,
    })
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductsBody {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Text fields of the add-product modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price_stars: String,
    pub description: String,
}

impl ProductForm {
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.price_stars.is_empty() && self.description.is_empty()
    }

    /// Hint shown instead of submitting when a required field is empty.
    pub fn missing_hint(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() || self.price_stars.trim().is_empty() {
            Some("Name and price are required")
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductPatch {
    pub is_active: bool,
}

impl ProductPatch {
    pub fn active(is_active: bool) -> Self {
        Self { is_active }
    }
}

// ============================================================================
// Sales / Downloads / Users
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: i64,
    pub user: String,
    pub product: String,
    pub amount_stars: i64,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesSummary {
    pub period_days: u32,
    pub sales: u64,
    pub revenue: u64,
    pub average: u64,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeliverySummary {
    #[serde(default)]
    pub total_deliveries: Option<u64>,
    #[serde(default)]
    pub unique_users: Option<u64>,
    #[serde(default)]
    pub total_downloads: Option<u64>,
    #[serde(default)]
    pub avg_downloads_per_delivery: Option<f64>,
    #[serde(default)]
    pub usage_rate: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDeliveries {
    pub name: String,
    #[serde(default)]
    pub deliveries: u64,
    #[serde(default)]
    pub downloads: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeliveryReport {
    #[serde(default)]
    pub period_days: Option<u32>,
    #[serde(default)]
    pub summary: Option<DeliverySummary>,
    #[serde(default)]
    pub products: Vec<ProductDeliveries>,
}

impl DeliveryReport {
    pub fn active_downloads(&self) -> u64 {
        self.summary.as_ref().and_then(|s| s.total_deliveries).unwrap_or(0)
    }

    pub fn total_downloads(&self) -> u64 {
        self.summary.as_ref().and_then(|s| s.total_downloads).unwrap_or(0)
    }

    pub fn unique_users(&self) -> u64 {
        self.summary.as_ref().and_then(|s| s.unique_users).unwrap_or(0)
    }

    pub fn usage_rate(&self) -> f64 {
        self.summary.as_ref().and_then(|s| s.usage_rate).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeliveryBody {
    #[serde(default)]
    pub data: DeliveryReport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub joined_at: String,
    pub is_active: bool,
}

impl UserRow {
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.username.to_lowercase().contains(&query)
            || self.first_name.to_lowercase().contains(&query)
    }
}

// ============================================================================
// Settings
// ============================================================================

/// Settings form; values stay as typed so a bad entry can be shown back.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SettingsForm {
    pub download_expiry: String,
    pub max_downloads: String,
    pub bot_token: String,
    pub webhook_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn stats_missing_fields_default_to_zero() {
        let env: Envelope<StatsBody> = serde_json::from_str(
            r#"{"status":"success","stats":{"total_products":4,"total_sales":null,"total_users":9}}"#,
        )
        .unwrap();
        assert!(env.is_success());
        let counters = StatCounters::from(&env.body.stats);
        assert_eq!(
            counters,
            StatCounters { products: 4, sales: 0, revenue: 0.0, users: 9 }
        );
    }

    #[test]
    fn fractional_revenue_is_kept() {
        let env: Envelope<StatsBody> = serde_json::from_str(
            r#"{"status":"success","stats":{"total_products":1,"total_revenue":12.5}}"#,
        )
        .unwrap();
        let counters = StatCounters::from(&env.body.stats);
        assert_eq!(counters.revenue, 12.5);
        assert_eq!(counters.revenue.to_string(), "12.5");
        assert_eq!(StatCounters::default().revenue.to_string(), "0");
    }

    #[test]
    fn product_form_requires_name_and_price() {
        let mut form = ProductForm {
            name: "Intro".into(),
            price_stars: "  ".into(),
            description: String::new(),
        };
        assert_eq!(form.missing_hint(), Some("Name and price are required"));

        form.price_stars = "50".into();
        assert_eq!(form.missing_hint(), None);

        form.name.clear();
        assert!(form.missing_hint().is_some());
    }

    #[test]
    fn error_envelope_exposes_message() {
        let env: Envelope<Ack> =
            serde_json::from_str(r#"{"error":"Arquivo de vídeo é obrigatório"}"#).unwrap();
        assert!(!env.is_success());
        assert_eq!(env.user_message(), Some("Arquivo de vídeo é obrigatório"));

        let env: Envelope<Ack> =
            serde_json::from_str(r#"{"status":"error","message":"  "}"#).unwrap();
        assert_eq!(env.user_message(), None);
    }

    #[test]
    fn product_accepts_sqlite_flags() {
        let body: ProductsBody = serde_json::from_str(
            r#"{"products":[
                {"id":1,"name":"Intro","price_stars":50,"is_active":1},
                {"id":2,"name":"Outro","price_stars":75,"is_active":false},
                {"id":3,"name":"Bonus","price_stars":10}
            ]}"#,
        )
        .unwrap();
        let flags: Vec<_> = body.products.iter().map(|p| p.is_active).collect();
        assert_eq!(flags, vec![true, false, true]);
        assert_eq!(body.products[1].status_label(), "Inactive");
        assert_eq!(body.products[0].badge_class(), "badge-success");
    }

    #[test]
    fn delivery_report_defaults() {
        let body: DeliveryBody = serde_json::from_str(r#"{"data":{"period_days":7}}"#).unwrap();
        assert_eq!(body.data.active_downloads(), 0);
        assert_eq!(body.data.total_downloads(), 0);

        let body: DeliveryBody = serde_json::from_str(
            r#"{"data":{"summary":{"total_deliveries":12,"total_downloads":30,"usage_rate":75.5},
                "products":[{"name":"Intro","deliveries":12,"downloads":null}]}}"#,
        )
        .unwrap();
        assert_eq!(body.data.active_downloads(), 12);
        assert_eq!(body.data.total_downloads(), 30);
        assert_eq!(body.data.usage_rate(), 75.5);
        assert_eq!(body.data.products[0].downloads, None);
    }

    #[test]
    fn unknown_activity_kind_uses_info_icon() {
        let kind: ActivityKind = serde_json::from_str(r#""refund""#).unwrap();
        assert_eq!(kind, ActivityKind::Other);
        assert_eq!(kind.icon(), "info-circle");
        assert_eq!(ActivityKind::Sale.icon(), "shopping-cart");
    }

    #[test]
    fn relative_time_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(relative_time(now, now - Duration::seconds(20)), "just now");
        assert_eq!(relative_time(now, now - Duration::minutes(5)), "5 min ago");
        assert_eq!(relative_time(now, now - Duration::hours(3)), "3 h ago");
        assert_eq!(relative_time(now, now - Duration::days(2)), "2 d ago");
    }

    #[test]
    fn user_search_is_case_insensitive() {
        let row = UserRow {
            id: 1,
            username: "@Usuario123".into(),
            first_name: "Ana".into(),
            joined_at: "2024-05-01".into(),
            is_active: true,
        };
        assert!(row.matches("usuario"));
        assert!(row.matches("ANA"));
        assert!(row.matches("  "));
        assert!(!row.matches("bob"));
    }
}

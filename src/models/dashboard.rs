//! Read-only data shown on the role dashboards.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Financials {
    pub gross_sales: String,
    pub net_payout: String,
    pub marketing_cost: String,
    pub total_transactions: u32,
}

/// Merchant dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub popular_dishes: Vec<String>,
    pub trending_ingredients: Vec<String>,
    pub financials: Financials,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MarketingCampaign {
    pub id: String,
    pub dish_name: String,
    pub restaurant: String,
    pub commission_rate: String,
    pub potential_earning: String,
    pub clicks: u32,
    pub conversions: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MarketerStats {
    pub total_commission: String,
    pub total_sales_generated: String,
    pub conversion_rate: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MarketerData {
    pub name: String,
    pub active_campaigns: Vec<MarketingCampaign>,
    pub stats: MarketerStats,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MemberOrder {
    pub id: String,
    pub dish_name: String,
    pub restaurant: String,
    pub date: String,
    pub price: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MemberData {
    pub name: String,
    pub order_history: Vec<MemberOrder>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_merchants: u32,
    pub total_marketers: u32,
    pub total_infaq_collected: String,
    pub total_platform_revenue: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MerchantStatus {
    Active,
    Pending,
    Suspended,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KycDocuments {
    pub ssm: bool,
    pub halal_cert: bool,
    pub shop_photo: bool,
}

impl KycDocuments {
    pub fn is_complete(&self) -> bool {
        self.ssm && self.halal_cert && self.shop_photo
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MerchantKyc {
    pub id: String,
    pub name: String,
    pub location: String,
    pub status: MerchantStatus,
    pub documents: KycDocuments,
    pub join_date: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdRequest {
    pub id: String,
    pub merchant_name: String,
    pub content: String,
    pub duration: String,
    pub budget: String,
    pub status: ReviewStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialLog {
    pub id: String,
    pub merchant: String,
    pub amount: String,
    pub agency_fee: String,
    pub date: String,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Open,
    Resolved,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserReport {
    pub id: String,
    pub reporter: String,
    pub target: String,
    pub reason: String,
    pub status: ReportStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SystemStatus {
    Online,
    Maintenance,
    Issues,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdminData {
    pub stats: AdminStats,
    pub merchants: Vec<MerchantKyc>,
    pub ad_requests: Vec<AdRequest>,
    pub finance_logs: Vec<FinancialLog>,
    pub reports: Vec<UserReport>,
    pub system_status: SystemStatus,
}

impl AdminData {
    pub fn pending_merchants(&self) -> impl Iterator<Item = &MerchantKyc> {
        self.merchants
            .iter()
            .filter(|m| m.status == MerchantStatus::Pending)
    }

    pub fn open_reports(&self) -> impl Iterator<Item = &UserReport> {
        self.reports
            .iter()
            .filter(|r| r.status == ReportStatus::Open)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TerritoryStats {
    pub region_name: String,
    pub total_merchants: u32,
    pub total_sales_volume: String,
    pub supervision_fee: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PerformerRole {
    Merchant,
    Marketer,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopPerformer {
    pub name: String,
    pub role: PerformerRole,
    pub volume: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TerritoryData {
    pub stats: TerritoryStats,
    pub top_performers: Vec<TopPerformer>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderStatus {
    #[serde(rename = "Pending Pickup")]
    PendingPickup,
    #[serde(rename = "In Transit")]
    InTransit,
    Delivered,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub restaurant: String,
    pub customer_name: String,
    pub delivery_address: String,
    pub status: OrderStatus,
}

impl Order {
    pub fn is_active(&self) -> bool {
        self.status != OrderStatus::Delivered
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    NewOrder,
    Urgent,
    Warning,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunnerAlert {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RunnerStats {
    pub completed_deliveries: u32,
    pub average_delivery_time: String,
    pub total_earnings: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RunnerData {
    pub active_orders: Vec<Order>,
    pub alerts: Vec<RunnerAlert>,
    pub stats: RunnerStats,
}

impl RunnerData {
    /// Delivery addresses of orders that still need to be driven.
    pub fn pending_addresses(&self) -> Vec<String> {
        self.active_orders
            .iter()
            .filter(|o| o.is_active())
            .map(|o| o.delivery_address.clone())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LiveLogLevel {
    Info,
    Warning,
    Error,
}

impl LiveLogLevel {
    pub fn as_upper(&self) -> &'static str {
        match self {
            LiveLogLevel::Info => "INFO",
            LiveLogLevel::Warning => "WARNING",
            LiveLogLevel::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LiveLog {
    pub id: u32,
    pub timestamp: String,
    pub level: LiveLogLevel,
    pub message: String,
}

impl LiveLog {
    pub fn line(&self) -> String {
        format!("[{}] [{}] {}", self.timestamp, self.level.as_upper(), self.message)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WatcherPerformance {
    pub uptime: String,
    pub api_latency: String,
    pub db_usage: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WatcherData {
    pub performance: WatcherPerformance,
    pub live_logs: Vec<LiveLog>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(id: &str, address: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            restaurant: "Pagi Sore".to_string(),
            customer_name: "Ibu Ani".to_string(),
            delivery_address: address.to_string(),
            status,
        }
    }

    #[test]
    fn test_pending_addresses_skip_delivered() {
        let data = RunnerData {
            active_orders: vec![
                order("ORD-1", "Jl. Melawai No. 12", OrderStatus::InTransit),
                order("ORD-2", "Jl. Kemang Raya 3", OrderStatus::Delivered),
                order("ORD-3", "Apt. Senopati Unit 5B", OrderStatus::PendingPickup),
            ],
            alerts: vec![],
            stats: RunnerStats {
                completed_deliveries: 0,
                average_delivery_time: "0 mins".to_string(),
                total_earnings: "Rp 0".to_string(),
            },
        };
        assert_eq!(
            data.pending_addresses(),
            vec!["Jl. Melawai No. 12", "Apt. Senopati Unit 5B"]
        );
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_value(OrderStatus::PendingPickup).unwrap(),
            json!("Pending Pickup")
        );
        assert_eq!(serde_json::to_value(AlertKind::NewOrder).unwrap(), json!("new_order"));
        let alert: RunnerAlert =
            serde_json::from_value(json!({ "id": 2, "type": "urgent", "message": "Late" }))
                .unwrap();
        assert_eq!(alert.kind, AlertKind::Urgent);
    }

    #[test]
    fn test_live_log_line() {
        let log = LiveLog {
            id: 1,
            timestamp: "10:00:01".to_string(),
            level: LiveLogLevel::Warning,
            message: "High latency on /orders".to_string(),
        };
        assert_eq!(log.line(), "[10:00:01] [WARNING] High latency on /orders");
    }

    #[test]
    fn test_kyc_completeness() {
        let docs = KycDocuments {
            ssm: true,
            halal_cert: false,
            shop_photo: true,
        };
        assert!(!docs.is_complete());
    }
}

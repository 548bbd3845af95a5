use crate::models::*;

/// Dashboard data for every role. Built once at startup and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub merchant: DashboardData,
    pub marketer: MarketerData,
    pub member: MemberData,
    pub admin: AdminData,
    pub territory: TerritoryData,
    pub runner: RunnerData,
    pub watcher: WatcherData,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl AppState {
    /// Demo data; `user_name` personalises the marketer and member panels.
    pub fn demo(user_name: Option<&str>) -> Self {
        Self {
            merchant: merchant_data(),
            marketer: marketer_data(user_name.unwrap_or("Faris (Top Marketer)")),
            member: member_data(user_name.unwrap_or("Aisha")),
            admin: admin_data(),
            territory: territory_data(),
            runner: runner_data(),
            watcher: watcher_data(),
        }
    }

    pub fn order_history_dishes(&self) -> Vec<String> {
        self.member
            .order_history
            .iter()
            .map(|o| o.dish_name.clone())
            .collect()
    }
}

fn merchant_data() -> DashboardData {
    DashboardData {
        popular_dishes: owned(&["Spicy Beef Rendang", "Ayam Penyet", "Nasi Lemak Royal"]),
        trending_ingredients: owned(&["Sambal Belacan", "Coconut Milk", "Lemongrass"]),
        financials: Financials {
            gross_sales: "Rp 100,000,000".to_string(),
            // 5.5% agency fee, 94.5% net
            marketing_cost: "Rp 5,500,000".to_string(),
            net_payout: "Rp 94,500,000".to_string(),
            total_transactions: 1250,
        },
    }
}

fn marketer_data(name: &str) -> MarketerData {
    let campaign = |id: &str, dish: &str, restaurant: &str, earning: &str, clicks, conversions| {
        MarketingCampaign {
            id: id.to_string(),
            dish_name: dish.to_string(),
            restaurant: restaurant.to_string(),
            commission_rate: "3.0%".to_string(),
            potential_earning: earning.to_string(),
            clicks,
            conversions,
        }
    };

    MarketerData {
        name: name.to_string(),
        active_campaigns: vec![
            campaign("CMP-01", "Family Combo Platter", "Pagi Sore", "Rp 15,000/sale", 120, 8),
            campaign("CMP-02", "Spicy Duck Special", "Bebek Kaleyo", "Rp 4,500/sale", 85, 12),
        ],
        stats: MarketerStats {
            total_commission: "Rp 4,500,000".to_string(),
            total_sales_generated: "Rp 150,000,000".to_string(),
            conversion_rate: "8.5%".to_string(),
        },
    }
}

fn member_data(name: &str) -> MemberData {
    let order = |id: &str, dish: &str, restaurant: &str, date: &str, price: &str| MemberOrder {
        id: id.to_string(),
        dish_name: dish.to_string(),
        restaurant: restaurant.to_string(),
        date: date.to_string(),
        price: price.to_string(),
    };

    MemberData {
        name: name.to_string(),
        order_history: vec![
            order("H-01", "Beef Rendang", "Pagi Sore", "2024-07-25", "Rp 75,000"),
            order("H-02", "Chicken Satay", "Sate Khas Senayan", "2024-07-22", "Rp 45,000"),
        ],
    }
}

fn admin_data() -> AdminData {
    let merchant = |id: &str, name: &str, location: &str, status, halal_cert, join_date: &str| {
        MerchantKyc {
            id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            status,
            documents: KycDocuments {
                ssm: true,
                halal_cert,
                shop_photo: true,
            },
            join_date: join_date.to_string(),
        }
    };

    AdminData {
        stats: AdminStats {
            total_merchants: 120,
            total_marketers: 450,
            total_platform_revenue: "Rp 15,000,000".to_string(),
            total_infaq_collected: "Rp 15,000,000".to_string(),
        },
        merchants: vec![
            merchant(
                "M-01",
                "Restoran Sederhana",
                "Jakarta Selatan",
                MerchantStatus::Active,
                true,
                "2024-01-15",
            ),
            merchant(
                "M-02",
                "Warung Bu Ani",
                "Bandung",
                MerchantStatus::Pending,
                false,
                "2024-02-20",
            ),
            merchant(
                "M-03",
                "Sate Pak Kumis",
                "Jakarta Pusat",
                MerchantStatus::Suspended,
                true,
                "2023-11-05",
            ),
        ],
        ad_requests: vec![
            AdRequest {
                id: "AD-01".to_string(),
                merchant_name: "Restoran Sederhana".to_string(),
                content: "Promo Merdeka: Diskon 17%".to_string(),
                duration: "7 Hari".to_string(),
                budget: "Rp 500.000".to_string(),
                status: ReviewStatus::Pending,
            },
            AdRequest {
                id: "AD-02".to_string(),
                merchant_name: "Bebek Kaleyo".to_string(),
                content: "Banner Homepage Utama".to_string(),
                duration: "30 Hari".to_string(),
                budget: "Rp 2.000.000".to_string(),
                status: ReviewStatus::Approved,
            },
        ],
        finance_logs: vec![
            FinancialLog {
                id: "TX-991".to_string(),
                merchant: "Pagi Sore".to_string(),
                amount: "Rp 10.000.000".to_string(),
                agency_fee: "Rp 550.000".to_string(),
                date: "2024-02-25".to_string(),
                status: PaymentStatus::Paid,
            },
            FinancialLog {
                id: "TX-992".to_string(),
                merchant: "Sate Khas Senayan".to_string(),
                amount: "Rp 5.000.000".to_string(),
                agency_fee: "Rp 275.000".to_string(),
                date: "2024-02-26".to_string(),
                status: PaymentStatus::Pending,
            },
        ],
        reports: vec![UserReport {
            id: "R-01".to_string(),
            reporter: "User_99".to_string(),
            target: "Warung Bu Ani".to_string(),
            reason: "Makanan basi saat diterima".to_string(),
            status: ReportStatus::Open,
        }],
        system_status: SystemStatus::Online,
    }
}

fn territory_data() -> TerritoryData {
    TerritoryData {
        stats: TerritoryStats {
            region_name: "Jakarta Selatan".to_string(),
            total_merchants: 45,
            total_sales_volume: "Rp 500,000,000".to_string(),
            supervision_fee: "Rp 2,500,000".to_string(),
        },
        top_performers: vec![
            TopPerformer {
                name: "Pagi Sore".to_string(),
                role: PerformerRole::Merchant,
                volume: "Rp 120jt".to_string(),
            },
            TopPerformer {
                name: "Faris".to_string(),
                role: PerformerRole::Marketer,
                volume: "Rp 80jt".to_string(),
            },
        ],
    }
}

fn runner_data() -> RunnerData {
    RunnerData {
        active_orders: vec![
            Order {
                id: "ORD-101".to_string(),
                restaurant: "Pagi Sore".to_string(),
                customer_name: "Ibu Ani".to_string(),
                delivery_address: "Jl. Melawai No. 12".to_string(),
                status: OrderStatus::InTransit,
            },
            Order {
                id: "ORD-102".to_string(),
                restaurant: "Sate Khas Senayan".to_string(),
                customer_name: "Pak Budi".to_string(),
                delivery_address: "Apt. Senopati Unit 5B".to_string(),
                status: OrderStatus::PendingPickup,
            },
        ],
        alerts: vec![
            RunnerAlert {
                id: 1,
                kind: AlertKind::NewOrder,
                message: "New order available nearby: Rp 15.000 fee".to_string(),
            },
            RunnerAlert {
                id: 2,
                kind: AlertKind::Urgent,
                message: "Order #ORD-101 is running late!".to_string(),
            },
        ],
        stats: RunnerStats {
            completed_deliveries: 42,
            average_delivery_time: "28 mins".to_string(),
            total_earnings: "Rp 850,000".to_string(),
        },
    }
}

fn watcher_data() -> WatcherData {
    let entry = |id, timestamp: &str, level, message: &str| LiveLog {
        id,
        timestamp: timestamp.to_string(),
        level,
        message: message.to_string(),
    };

    WatcherData {
        performance: WatcherPerformance {
            uptime: "99.98%".to_string(),
            api_latency: "120ms".to_string(),
            db_usage: "45%".to_string(),
        },
        live_logs: vec![
            entry(1, "10:00:01", LiveLogLevel::Info, "User 'Aisha' logged in"),
            entry(2, "10:00:15", LiveLogLevel::Info, "Order ORD-102 created"),
            entry(3, "10:01:02", LiveLogLevel::Warning, "API latency above 500ms on /recipes"),
            entry(4, "10:01:30", LiveLogLevel::Error, "5 failed login attempts from 192.168.1.45"),
        ],
    }
}

//! Dashboard statistics snapshot.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::http::ApiError;
use crate::net::types::{DashboardStats, StatsResponse};
use crate::state::notify::{Notifier, report_failure};

pub const LOAD_STATS_FAILED: &str = "Failed to load dashboard statistics";

/// Accent used by a metric card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardTone {
    Blue,
    Green,
    Yellow,
    Purple,
}

impl CardTone {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: u64,
    pub tone: CardTone,
}

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub stats: DashboardStats,
    pub loading: bool,
}

impl DashboardState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn apply_stats<N: Notifier>(&mut self, result: Result<StatsResponse, ApiError>, notifier: &N) {
        self.loading = false;
        match result {
            Ok(resp) => self.stats = resp.into_stats(),
            Err(e) => {
                report_failure(notifier, "load dashboard stats", &e, LOAD_STATS_FAILED);
                self.stats = DashboardStats::default();
            }
        }
    }

    /// The four cards in display order.
    pub fn cards(&self) -> [MetricCard; 4] {
        let s = self.stats;
        [
            MetricCard { title: "Total Products", value: s.total_products, tone: CardTone::Blue },
            MetricCard { title: "Total Orders", value: s.total_orders, tone: CardTone::Green },
            MetricCard { title: "Pending Prescriptions", value: s.pending_prescriptions, tone: CardTone::Yellow },
            MetricCard { title: "Active Users", value: s.active_users, tone: CardTone::Purple },
        ]
    }
}

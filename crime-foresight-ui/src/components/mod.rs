//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod category;
pub mod chart;
pub mod heatmap;
pub mod incidents;
pub mod layout;
pub mod loading;
pub mod sidebar;
pub mod stat_card;

pub use category::CategoryBreakdown;
pub use chart::{LineChart, PredictionChart, TrendChart};
pub use heatmap::CrimeHeatmap;
pub use incidents::IncidentList;
pub use layout::DashboardLayout;
pub use loading::Loading;
pub use sidebar::{MobileMenuTrigger, Sidebar};
pub use stat_card::{StatCard, Trend};

//! Mock Datasets
//!
//! Static series consumed by the dashboard chart widgets. Nothing here is
//! computed at runtime except the small helpers the widgets call.

use serde::Serialize;

/// Monthly incident counts split by crime family
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub month: &'static str,
    pub violent: u32,
    pub property: u32,
    pub other: u32,
}

impl TrendPoint {
    pub fn total(&self) -> u32 {
        self.violent + self.property + self.other
    }
}

/// Predicted incident totals, with actuals for months already observed
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionPoint {
    pub month: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<u32>,
    pub predicted: u32,
}

impl PredictionPoint {
    /// Signed prediction error (actual - predicted), if the month has an actual
    pub fn error(&self) -> Option<i64> {
        self.actual.map(|a| a as i64 - self.predicted as i64)
    }
}

/// One slice of the category breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategorySlice {
    pub name: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentStatus {
    Open,
    Investigating,
    Closed,
}

impl IncidentStatus {
    pub fn label(self) -> &'static str {
        match self {
            IncidentStatus::Open => "Open",
            IncidentStatus::Investigating => "Investigating",
            IncidentStatus::Closed => "Closed",
        }
    }
}

/// A recently reported incident
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Incident {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub location: &'static str,
    /// Relative time label, e.g. "2h ago"
    pub time: &'static str,
    pub severity: Severity,
    pub status: IncidentStatus,
}

const fn trend(month: &'static str, violent: u32, property: u32, other: u32) -> TrendPoint {
    TrendPoint { month, violent, property, other }
}

const fn prediction(month: &'static str, actual: Option<u32>, predicted: u32) -> PredictionPoint {
    PredictionPoint { month, actual, predicted }
}

pub const CRIME_TREND: [TrendPoint; 12] = [
    trend("Jan", 40, 65, 35),
    trend("Feb", 35, 59, 30),
    trend("Mar", 45, 70, 38),
    trend("Apr", 50, 75, 42),
    trend("May", 60, 80, 45),
    trend("Jun", 55, 73, 41),
    trend("Jul", 48, 68, 38),
    trend("Aug", 42, 65, 36),
    trend("Sep", 38, 60, 32),
    trend("Oct", 44, 68, 37),
    trend("Nov", 52, 75, 40),
    trend("Dec", 58, 82, 46),
];

pub const PREDICTIONS: [PredictionPoint; 9] = [
    prediction("Jan", Some(105), 110),
    prediction("Feb", Some(90), 95),
    prediction("Mar", Some(115), 120),
    prediction("Apr", Some(130), 125),
    prediction("May", Some(140), 150),
    prediction("Jun", Some(135), 130),
    prediction("Jul", None, 125),
    prediction("Aug", None, 120),
    prediction("Sep", None, 115),
];

pub const CRIME_TYPES: [CategorySlice; 6] = [
    CategorySlice { name: "Theft", value: 35 },
    CategorySlice { name: "Assault", value: 20 },
    CategorySlice { name: "Burglary", value: 15 },
    CategorySlice { name: "Robbery", value: 10 },
    CategorySlice { name: "Vandalism", value: 12 },
    CategorySlice { name: "Others", value: 8 },
];

pub const RECENT_INCIDENTS: [Incident; 5] = [
    Incident {
        id: "1",
        kind: "Armed Robbery",
        location: "Downtown, Main St.",
        time: "2h ago",
        severity: Severity::High,
        status: IncidentStatus::Investigating,
    },
    Incident {
        id: "2",
        kind: "Vehicle Theft",
        location: "Westside Mall Parking",
        time: "3h ago",
        severity: Severity::Medium,
        status: IncidentStatus::Open,
    },
    Incident {
        id: "3",
        kind: "Vandalism",
        location: "Park Avenue",
        time: "5h ago",
        severity: Severity::Low,
        status: IncidentStatus::Closed,
    },
    Incident {
        id: "4",
        kind: "Assault",
        location: "Nightclub District",
        time: "8h ago",
        severity: Severity::High,
        status: IncidentStatus::Investigating,
    },
    Incident {
        id: "5",
        kind: "Residential Burglary",
        location: "Hillcrest Neighborhood",
        time: "12h ago",
        severity: Severity::Medium,
        status: IncidentStatus::Closed,
    },
];

/// Share of a category in the breakdown, in percent
pub fn category_share(name: &str) -> Option<f64> {
    let total: u32 = CRIME_TYPES.iter().map(|c| c.value).sum();
    if total == 0 {
        return None;
    }
    CRIME_TYPES
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.value as f64 / total as f64 * 100.0)
}

/// Category with the highest count
pub fn top_category() -> Option<&'static CategorySlice> {
    CRIME_TYPES.iter().max_by_key(|c| c.value)
}

/// Most recent month that has an observed actual
pub fn latest_observed_prediction() -> Option<&'static PredictionPoint> {
    PREDICTIONS.iter().rev().find(|p| p.actual.is_some())
}

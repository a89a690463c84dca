//! Stat Card Component
//!
//! A single headline figure with an optional delta line.

use leptos::*;

/// Direction of the delta line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn of(delta: f64) -> Self {
        if delta > 0.1 {
            Trend::Up
        } else if delta < -0.1 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }

    /// More crime is bad news, so up renders red
    fn arrow_and_color(self) -> (&'static str, &'static str) {
        match self {
            Trend::Up => ("↑", "text-red-400"),
            Trend::Down => ("↓", "text-green-400"),
            Trend::Flat => ("→", "text-gray-400"),
        }
    }
}

#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: String,
    /// Delta text, colored by `trend`
    #[prop(optional, into)]
    detail: Option<String>,
    #[prop(optional)]
    trend: Option<Trend>,
) -> impl IntoView {
    let (arrow, color) = trend.unwrap_or(Trend::Flat).arrow_and_color();

    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class="text-3xl font-bold mt-2">{value}</div>
            {detail.map(|text| view! {
                <div class=format!("mt-2 text-sm {}", color)>
                    {trend.map(|_| format!("{} ", arrow))}
                    {text}
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_thresholds() {
        assert_eq!(Trend::of(12.0), Trend::Up);
        assert_eq!(Trend::of(-5.0), Trend::Down);
        assert_eq!(Trend::of(0.05), Trend::Flat);
    }
}

//! Dashboard Page
//!
//! Summary cards, trend charts, the hotspot map and recent incidents.

use crime_foresight::data::{
    category_share, latest_observed_prediction, top_category, CRIME_TREND,
};
use crime_foresight::india_hotspots;
use leptos::*;

use crate::components::{
    CategoryBreakdown, CrimeHeatmap, IncidentList, PredictionChart, StatCard, TrendChart, Trend,
};

#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <section id="overview">
                <div class="mb-6">
                    <h2 class="text-3xl font-bold">"Overview"</h2>
                    <p class="text-gray-400 mt-1">"Crime statistics and forecasts at a glance"</p>
                </div>
                <SummaryCards />
            </section>

            <div class="grid lg:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Crime Trend"</h2>
                    <TrendChart />
                </section>

                <section id="predictions" class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Predicted vs Actual"</h2>
                    <PredictionChart />
                </section>
            </div>

            <div id="crime-map">
                <CrimeHeatmap title="Crime Hotspots" />
            </div>

            <div class="grid lg:grid-cols-3 gap-8">
                <section id="incidents" class="lg:col-span-2 bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Recent Incidents"</h2>
                    <IncidentList />
                </section>

                <section id="reports" class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Crime Types"</h2>
                    <CategoryBreakdown />
                </section>
            </div>
        </div>
    }
}

#[component]
fn SummaryCards() -> impl IntoView {
    let latest = CRIME_TREND[CRIME_TREND.len() - 1];
    let previous = CRIME_TREND[CRIME_TREND.len() - 2];
    let month_delta = latest.total() as f64 - previous.total() as f64;
    let month_percent = month_delta / previous.total() as f64 * 100.0;

    let prediction = latest_observed_prediction().and_then(|p| p.error().map(|e| (p.month, e)));
    let top = top_category();

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <StatCard
                label=format!("Incidents ({})", latest.month)
                value=latest.total().to_string()
                detail=format!("{:+.1}% vs {}", month_percent, previous.month)
                trend=Trend::of(month_delta)
            />
            {match prediction {
                Some((month, error)) => view! {
                    <StatCard
                        label="Prediction error"
                        value=format!("{:+}", error)
                        detail=format!("Actual vs predicted, {}", month)
                    />
                }.into_view(),
                None => view! { <StatCard label="Prediction error" value="—" /> }.into_view(),
            }}
            {match top {
                Some(slice) => view! {
                    <StatCard
                        label="Most common"
                        value=slice.name
                        detail=format!("{:.0}% of incidents", category_share(slice.name).unwrap_or(0.0))
                    />
                }.into_view(),
                None => view! { <StatCard label="Most common" value="—" /> }.into_view(),
            }}
            <StatCard
                label="Tracked hotspots"
                value=india_hotspots().len().to_string()
                detail="Major Indian cities"
            />
        </div>
    }
}

//! Category Breakdown
//!
//! Proportional bars for the crime-type split.

use crime_foresight::data::{category_share, CRIME_TYPES};
use leptos::*;

const BAR_COLORS: [&str; 6] = ["#F44336", "#FF9800", "#FFC107", "#9C27B0", "#2196F3", "#607D8B"];

#[component]
pub fn CategoryBreakdown() -> impl IntoView {
    view! {
        <div class="space-y-3">
            {CRIME_TYPES
                .iter()
                .enumerate()
                .map(|(idx, slice)| {
                    let share = category_share(slice.name).unwrap_or(0.0);
                    let color = BAR_COLORS[idx % BAR_COLORS.len()];
                    view! {
                        <div>
                            <div class="flex justify-between text-sm mb-1">
                                <span class="text-gray-300">{slice.name}</span>
                                <span class="text-gray-400">{format!("{:.0}%", share)}</span>
                            </div>
                            <div class="h-2 bg-gray-700 rounded-full overflow-hidden">
                                <div
                                    class="h-full rounded-full"
                                    style=format!("width: {:.1}%; background-color: {}", share, color)
                                />
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

//! Recent Incidents
//!
//! Latest reports with severity and status badges.

use crime_foresight::data::{Incident, IncidentStatus, Severity, RECENT_INCIDENTS};
use leptos::*;

#[component]
pub fn IncidentList() -> impl IntoView {
    view! {
        <div class="divide-y divide-gray-700">
            {RECENT_INCIDENTS
                .iter()
                .map(|incident| view! { <IncidentRow incident=*incident /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn IncidentRow(incident: Incident) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between py-3">
            <div>
                <div class="font-medium">{incident.kind}</div>
                <div class="text-sm text-gray-400">
                    {incident.location}
                    <span class="ml-2 text-gray-500">{incident.time}</span>
                </div>
            </div>
            <div class="flex items-center space-x-2">
                <span class=format!("px-2 py-0.5 rounded text-xs font-medium {}", severity_class(incident.severity))>
                    {incident.severity.label()}
                </span>
                <span class=format!("px-2 py-0.5 rounded text-xs font-medium {}", status_class(incident.status))>
                    {incident.status.label()}
                </span>
            </div>
        </div>
    }
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "bg-red-500/20 text-red-400",
        Severity::Medium => "bg-yellow-500/20 text-yellow-400",
        Severity::Low => "bg-green-500/20 text-green-400",
    }
}

fn status_class(status: IncidentStatus) -> &'static str {
    match status {
        IncidentStatus::Open => "bg-blue-500/20 text-blue-400",
        IncidentStatus::Investigating => "bg-purple-500/20 text-purple-400",
        IncidentStatus::Closed => "bg-gray-600/40 text-gray-300",
    }
}

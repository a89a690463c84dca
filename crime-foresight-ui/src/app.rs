//! App Root Component

use leptos::*;

use crate::components::DashboardLayout;
use crate::pages::Dashboard;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <DashboardLayout>
            <Dashboard />
        </DashboardLayout>
    }
}

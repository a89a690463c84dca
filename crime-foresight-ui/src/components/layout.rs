//! Dashboard Layout
//!
//! Sticky header plus collapsible sidebar around the page content.

use crime_foresight::layout::{SidebarState, DASHBOARD_TITLE};
use leptos::*;

use super::sidebar::{MobileMenuTrigger, Sidebar};

/// Page shell. The sidebar is pinned on large screens and slides in on
/// small ones.
#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let sidebar = create_rw_signal(SidebarState::default());

    view! {
        <div class="min-h-screen bg-gray-900 text-white">
            <Sidebar state=sidebar />

            <div class="lg:pl-64 flex flex-col min-h-screen">
                <header class="sticky top-0 z-30 bg-gray-800/95 backdrop-blur border-b border-gray-700">
                    <div class="flex items-center h-16 px-4 space-x-3">
                        <MobileMenuTrigger state=sidebar />
                        <h1 class="text-xl font-bold">{DASHBOARD_TITLE}</h1>
                    </div>
                </header>

                <main class="flex-1 px-4 py-8">
                    {children()}
                </main>
            </div>
        </div>
    }
}

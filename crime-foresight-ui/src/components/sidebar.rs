//! Sidebar Navigation
//!
//! In-page anchors for each dashboard section.

use crime_foresight::layout::{NavItem, SidebarState, NAV_ITEMS};
use leptos::*;

/// Sidebar panel with its small-screen backdrop
#[component]
pub fn Sidebar(state: RwSignal<SidebarState>) -> impl IntoView {
    view! {
        // Backdrop, small screens only
        <Show when=move || state.get().is_open()>
            <div
                class="fixed inset-0 z-40 bg-black/50 lg:hidden"
                on:click=move |_| state.update(|s| s.close())
            />
        </Show>

        <aside class=move || format!("{} bg-gray-800 border-r border-gray-700", state.get().panel_class())>
            <div class="flex items-center h-16 px-6 space-x-3 border-b border-gray-700">
                <span class="text-2xl">"🛡️"</span>
                <span class="text-lg font-bold">"Crime Foresight"</span>
            </div>

            <nav class="px-3 py-4 space-y-1">
                {NAV_ITEMS
                    .iter()
                    .map(|item| view! { <NavLink item=*item state=state /> })
                    .collect_view()}
            </nav>
        </aside>
    }
}

/// Individual navigation link; closes the sidebar when followed
#[component]
fn NavLink(item: NavItem, state: RwSignal<SidebarState>) -> impl IntoView {
    view! {
        <a
            href=item.href
            class="flex items-center space-x-3 px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            on:click=move |_| state.update(|s| s.close())
        >
            <span>{item.icon}</span>
            <span>{item.label}</span>
        </a>
    }
}

/// Header button toggling the sidebar on small screens
#[component]
pub fn MobileMenuTrigger(state: RwSignal<SidebarState>) -> impl IntoView {
    view! {
        <button
            class="lg:hidden p-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700"
            aria-label="Toggle navigation"
            on:click=move |_| state.update(|s| s.toggle())
        >
            {move || if state.get().is_open() { "✕" } else { "☰" }}
        </button>
    }
}

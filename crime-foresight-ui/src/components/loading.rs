//! Loading Component

use leptos::*;

/// Centered spinner
#[component]
pub fn Loading(
    /// Caption under the spinner
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 space-y-3">
            <div class="loading-spinner w-8 h-8" />
            {label.map(|text| view! { <span class="text-sm text-gray-400">{text}</span> })}
        </div>
    }
}

//! Crime Heatmap Component
//!
//! Token prompt in front of a Mapbox density map. The state machine lives in
//! [`HeatmapView`]; this component mirrors its status into a signal and
//! renders the overlays for each state.

use crime_foresight::map::{HeatmapView, MapStatus, LEGEND};
use crime_foresight::storage::KeyValueStore;
use crime_foresight::india_hotspots;
use leptos::*;
use std::rc::Rc;

use super::loading::Loading;
use crate::mapbox::MapboxEngine;
use crate::storage::token_store;

type BrowserHeatmap = HeatmapView<MapboxEngine, Box<dyn KeyValueStore>>;

const TOKEN_HELP_URL: &str = "https://account.mapbox.com/access-tokens/";

/// Heatmap card
#[component]
pub fn CrimeHeatmap(
    #[prop(into)]
    title: String,
    /// Extra classes for the card
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let heatmap: BrowserHeatmap =
        HeatmapView::new(Rc::new(MapboxEngine), token_store(), india_hotspots());

    let (status, set_status) = create_signal(heatmap.status());
    heatmap.on_status_change(move |next| set_status.set(next.clone()));

    let for_cleanup = heatmap.clone();
    on_cleanup(move || for_cleanup.unmount());

    let heatmap = store_value(heatmap);
    let (show_help, set_show_help) = create_signal(false);

    // Mount once the container div exists
    let container_ref = create_node_ref::<html::Div>();
    create_effect(move |mounted: Option<bool>| {
        if mounted == Some(true) {
            return true;
        }
        match container_ref.get() {
            Some(div) => {
                let element: &web_sys::HtmlElement = &div;
                heatmap.get_value().mount(element.clone());
                true
            }
            None => false,
        }
    });

    let on_submit = Callback::new(move |token: String| {
        heatmap.get_value().submit_token(&token);
    });

    view! {
        <section class=format!("bg-gray-800 rounded-xl p-6 {}", class)>
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">{title}</h2>
                <button
                    class="text-sm text-gray-400 hover:text-white transition-colors"
                    on:click=move |_| set_show_help.update(|open| *open = !*open)
                >
                    {move || if show_help.get() { "Hide help" } else { "Need a token?" }}
                </button>
            </div>

            <Show when=move || show_help.get()>
                <TokenHelp />
            </Show>

            <div class="relative aspect-[16/9] overflow-hidden rounded-lg border border-gray-700 bg-gray-900">
                <div node_ref=container_ref class="absolute inset-0" />

                {move || match status.get() {
                    MapStatus::Idle => view! {
                        <div class="absolute inset-0 flex items-center justify-center bg-gray-900">
                            <TokenPrompt initial=String::new() on_submit=on_submit />
                        </div>
                    }.into_view(),
                    MapStatus::Initializing => view! {
                        <div class="absolute inset-0 flex items-center justify-center bg-gray-900/70">
                            <Loading label="Loading map..." />
                        </div>
                    }.into_view(),
                    MapStatus::Loaded => view! { <Legend /> }.into_view(),
                    MapStatus::Failed(message) => view! {
                        <div class="absolute inset-0 flex flex-col items-center justify-center space-y-4 bg-gray-900">
                            <p class="text-red-400 text-sm text-center px-6">{message}</p>
                            <TokenPrompt initial=heatmap.get_value().token() on_submit=on_submit />
                        </div>
                    }.into_view(),
                }}
            </div>
        </section>
    }
}

/// Input and submit for the access token; the value is passed on verbatim
#[component]
fn TokenPrompt(initial: String, on_submit: Callback<String>) -> impl IntoView {
    let (input, set_input) = create_signal(initial);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(input.get_untracked());
    };

    view! {
        <form class="w-full max-w-md px-6 space-y-3" on:submit=submit>
            <label class="block text-sm text-gray-300">"Mapbox public access token"</label>
            <div class="flex space-x-2">
                <input
                    type="text"
                    placeholder="pk.eyJ1..."
                    class="flex-1 px-3 py-2 rounded-lg bg-gray-800 border border-gray-600 text-white focus:outline-none focus:border-primary-500"
                    prop:value=input
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Load map"
                </button>
            </div>
        </form>
    }
}

#[component]
fn TokenHelp() -> impl IntoView {
    view! {
        <div class="mb-4 p-4 rounded-lg bg-gray-700/50 text-sm text-gray-300 space-y-2">
            <p>"The map needs a public Mapbox access token (it starts with pk.)."</p>
            <ol class="list-decimal list-inside space-y-1">
                <li>"Sign in or create a free account at mapbox.com"</li>
                <li>
                    "Open "
                    <a href=TOKEN_HELP_URL target="_blank" rel="noopener" class="text-primary-400 underline">
                        "Access tokens"
                    </a>
                    " and copy the default public token"
                </li>
                <li>"Paste it into the map panel; it is kept in this browser only"</li>
            </ol>
        </div>
    }
}

/// Density legend pinned to the map corner
#[component]
fn Legend() -> impl IntoView {
    view! {
        <div class="absolute bottom-4 right-4 p-2 bg-gray-800 border border-gray-700 rounded-md shadow-sm">
            <div class="flex items-center space-x-4 text-xs">
                {LEGEND
                    .iter()
                    .map(|swatch| view! {
                        <div class="flex items-center space-x-1">
                            <div
                                class="h-3 w-3 rounded-full"
                                style=format!("background-color: {}", swatch.color)
                            />
                            <span>{swatch.label}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

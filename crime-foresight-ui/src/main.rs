use crime_foresight_ui::App;
use leptos::*;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <App /> });
}

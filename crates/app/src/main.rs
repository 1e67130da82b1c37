use dioxus::prelude::*;

mod config;
mod format_helpers;
mod routes;
mod session;

use config::app_config;
use routes::Route;
use session::SessionStore;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut store = use_context_provider(SessionStore::new);

    use_hook(|| {
        let config = app_config();
        tracing::info!(
            api = %config.api.base_url,
            enforce_role_match = config.routing.enforce_role_match,
            "Campus Sync starting"
        );
    });

    // The guard waits on this before deciding anything.
    use_future(move || async move {
        let raw = session::read_persisted().await;
        store.restore(raw.as_deref());
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}

use leptos::prelude::*;

use crate::state::AppState;

/// Live position/size/scale readout, shown only in debug mode.
#[component]
pub fn MetricsPanel() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <Show when=move || state.debug.get()>
            <pre class="metrics-panel">
                {move || {
                    state
                        .metrics
                        .get()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "waiting for first frame".to_string())
                }}
            </pre>
        </Show>
    }
}

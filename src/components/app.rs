use leptos::prelude::*;
use crate::components::metrics_panel::MetricsPanel;
use crate::components::surface_form::SurfaceForm;
use crate::components::viewer::Viewer;
use crate::config::HostConfig;
use crate::state::AppState;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new(HostConfig::from_page());
    provide_context(state);

    view! {
        <div class="app">
            <div class="toolbar">
                <SurfaceForm />
            </div>
            <Viewer />
            <MetricsPanel />
        </div>
    }
}

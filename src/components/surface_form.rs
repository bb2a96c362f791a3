use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::state::{AppState, ImageOrientation};

/// Parse a surface dimension typed by the user. Only positive integers pass.
fn parse_dimension(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|v| *v > 0)
}

#[component]
pub fn SurfaceForm() -> impl IntoView {
    let state = expect_context::<AppState>();

    let draft_width = RwSignal::new(state.surface_width.get_untracked().to_string());
    let draft_height = RwSignal::new(state.surface_height.get_untracked().to_string());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let w = parse_dimension(&draft_width.get_untracked());
        let h = parse_dimension(&draft_height.get_untracked());
        match (w, h) {
            (Some(w), Some(h)) => {
                state.surface_width.set(w);
                state.surface_height.set(h);
            }
            _ => log::warn!(
                "Ignoring surface size {:?} x {:?}",
                draft_width.get_untracked(),
                draft_height.get_untracked()
            ),
        }
    };

    let on_orientation_change = move |ev: web_sys::Event| {
        let Some(select) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
        else {
            return;
        };
        state.orientation.set(ImageOrientation::parse(&select.value()));
    };

    view! {
        <form class="surface-form" on:submit=on_submit>
            <label>
                "Width "
                <input
                    type="number"
                    min="1"
                    prop:value=move || draft_width.get()
                    on:input=move |ev| draft_width.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Height "
                <input
                    type="number"
                    min="1"
                    prop:value=move || draft_height.get()
                    on:input=move |ev| draft_height.set(event_target_value(&ev))
                />
            </label>
            <button type="submit">"Resize"</button>
            <select on:change=on_orientation_change>
                <option value={ImageOrientation::Landscape.as_str()}>"Landscape image"</option>
                <option value={ImageOrientation::Portrait.as_str()}>"Portrait image"</option>
            </select>
            <label>
                <input
                    type="checkbox"
                    prop:checked=move || state.debug.get()
                    on:change=move |ev| state.debug.set(event_target_checked(&ev))
                />
                " Debug"
            </label>
        </form>
    }
}

use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;

use crate::config::MenuConfig;
use crate::context::UserContext;
use crate::fixtures;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let menu = expect_context::<Arc<MenuConfig>>();
    let user = expect_context::<UserContext>();

    let default_path = menu.default_path().unwrap_or("(none)").to_string();
    let breakpoint = format!("{} px", menu.overlay_breakpoint);
    let defects = menu.validate();

    let defect_list = if defects.is_empty() {
        view! { <p class="settings-ok">"No problems found in the menu table."</p> }.into_any()
    } else {
        view! {
            <ul class="defect-list">
                {defects
                    .into_iter()
                    .map(|defect| view! { <li>{defect.to_string()}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any()
    };

    let on_user_change = move |ev: ev::Event| {
        let id = event_target_value(&ev).parse::<u32>().ok();
        let selected = id.and_then(|id| fixtures::users().into_iter().find(|u| u.id == id));
        user.set_current_user.set(selected);
    };

    let selected_id = move || {
        user.current_user
            .get()
            .map(|u| u.id.to_string())
            .unwrap_or_default()
    };

    view! {
        <div class="page settings-page">
            <h2>"Settings"</h2>

            <section class="settings-section">
                <h3>"Navigation"</h3>
                <dl class="settings-list">
                    <dt>"Default page"</dt>
                    <dd>{default_path}</dd>
                    <dt>"Overlay below"</dt>
                    <dd>{breakpoint}</dd>
                    <dt>"Top-level entries"</dt>
                    <dd>{menu.entries.len().to_string()}</dd>
                </dl>
                {defect_list}
            </section>

            <section class="settings-section">
                <h3>"Preview As"</h3>
                <p class="section-description">"Switch the demo user shown in the top bar."</p>
                <select prop:value=selected_id on:change=on_user_change>
                    <option value="">"Signed out"</option>
                    {fixtures::users()
                        .into_iter()
                        .map(|u| view! { <option value=u.id.to_string()>{u.name}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </section>
        </div>
    }
}

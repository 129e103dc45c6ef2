use std::sync::Arc;

use leptos::prelude::*;

use crate::config::MenuConfig;
use crate::context::{LayoutContext, UserContext};
use crate::viewport::ViewportContext;

/// Top bar holding the menu button, the only control that opens the sidebar.
#[component]
pub fn Topbar() -> impl IntoView {
    let layout = expect_context::<LayoutContext>();
    let user = expect_context::<UserContext>();
    let viewport = expect_context::<ViewportContext>();
    let breakpoint = expect_context::<Arc<MenuConfig>>().overlay_breakpoint;

    let user_name = move || {
        user.current_user
            .get()
            .map(|u| u.name)
            .unwrap_or_else(|| "Signed out".to_string())
    };

    view! {
        <header class="topbar">
            <button
                class="menu-button"
                class:menu-button-hidden=move || !viewport.narrow(breakpoint)
                aria-label="Toggle navigation"
                on:click=move |_| layout.set_open.update(|open| *open = !*open)
            >
                <span class="material-symbols-outlined">"menu"</span>
            </button>
            <span class="topbar-user">{user_name}</span>
        </header>
    }
}

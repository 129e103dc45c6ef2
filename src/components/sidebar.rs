//! Navigation sidebar.
//!
//! Renders the menu table as a persistent rail on wide viewports and as an
//! overlay on viewports narrower than the menu's `overlay_breakpoint`.
//! Highlighting comes from both the router link's own `aria-current` marking
//! and [`is_entry_active`], so either one lights up an entry.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::config::MenuConfig;
use crate::context::{LayoutContext, UserContext};
use crate::menu::{EntryKind, MenuEntry};
use crate::nav::{is_entry_active, is_parent_active, NavigationState, PanelVisibility};
use crate::viewport::ViewportContext;

#[component]
pub fn Sidebar(menu: Arc<MenuConfig>) -> impl IntoView {
    let layout = expect_context::<LayoutContext>();
    let viewport = expect_context::<ViewportContext>();
    let user = expect_context::<UserContext>();
    let pathname = use_location().pathname;
    let nav = RwSignal::new(NavigationState::new());

    // Expand the parent of the current route whenever the route changes
    {
        let menu = menu.clone();
        Effect::new(move |_| {
            let path = pathname.get();
            nav.maybe_update(|state| state.sync_to_path(&menu, &path));
        });
    }

    Effect::new(move |_| match user.current_user.get() {
        Some(u) => tracing::debug!(user_id = u.id, role = %u.role, "Sidebar observed user"),
        None => tracing::debug!("Sidebar observed signed-out session"),
    });

    let breakpoint = menu.overlay_breakpoint;
    let items = menu
        .entries
        .iter()
        .map(|entry| match entry.kind() {
            EntryKind::Parent(_) => {
                view! { <NavGroup entry=entry.clone() menu=menu.clone() nav=nav /> }.into_any()
            }
            EntryKind::Leaf(_) => {
                view! { <NavLeaf entry=entry.clone() menu=menu.clone() nav=nav /> }.into_any()
            }
            EntryKind::Inert => view! { <NavLabel entry=entry.clone() /> }.into_any(),
        })
        .collect::<Vec<_>>();

    view! {
        <style>{include_str!("sidebar.css")}</style>
        <Show when=move || layout.is_open.get() && viewport.narrow(breakpoint)>
            <div
                class="sidebar-backdrop"
                aria-hidden="true"
                on:click=move |_| layout.close_panel()
            ></div>
        </Show>
        <nav
            class="sidebar"
            class:sidebar-overlay=move || viewport.narrow(breakpoint)
            class:sidebar-open=move || layout.is_open.get()
            aria-label="Main navigation"
        >
            <div class="sidebar-header">
                <h1 class="sidebar-title">"Admin"</h1>
                <p class="sidebar-subtitle">"Control Panel"</p>
            </div>
            <ul class="nav-list">{items}</ul>
        </nav>
    }
}

fn entry_icon(entry: &MenuEntry) -> Option<impl IntoView> {
    entry.glyph().map(|glyph| {
        view! { <span class="material-symbols-outlined nav-icon" aria-hidden="true">{glyph}</span> }
    })
}

#[component]
fn NavLeaf(
    entry: MenuEntry,
    menu: Arc<MenuConfig>,
    nav: RwSignal<NavigationState>,
) -> impl IntoView {
    let layout = expect_context::<LayoutContext>();
    let viewport = expect_context::<ViewportContext>();
    let pathname = use_location().pathname;

    let href = entry.leaf_path().unwrap_or_default().to_string();
    let name = entry.name.clone();
    let icon = entry_icon(&entry);

    let active = {
        let menu = menu.clone();
        let entry = entry.clone();
        Memo::new(move |_| is_entry_active(&menu, &entry, &pathname.get()))
    };

    let on_click = move |_| {
        nav.maybe_update(|state| {
            state
                .activate(&menu, &entry, &viewport, &layout)
                .changed_state()
        });
    };

    view! {
        <li class="nav-item" class:active=move || active.get() on:click=on_click>
            <A href=href exact=true>
                {icon}
                <span class="nav-label">{name}</span>
            </A>
        </li>
    }
}

#[component]
fn NavGroup(
    entry: MenuEntry,
    menu: Arc<MenuConfig>,
    nav: RwSignal<NavigationState>,
) -> impl IntoView {
    let layout = expect_context::<LayoutContext>();
    let viewport = expect_context::<ViewportContext>();
    let pathname = use_location().pathname;

    let name = entry.name.clone();
    let icon = entry_icon(&entry);

    let is_open = {
        let name = name.clone();
        Memo::new(move |_| nav.with(|state| state.is_open(&name)))
    };
    let parent_active = {
        let menu = menu.clone();
        let entry = entry.clone();
        Memo::new(move |_| is_parent_active(&menu, &entry, &pathname.get()))
    };

    let children = entry
        .children()
        .iter()
        .map(|child| match child.kind() {
            EntryKind::Leaf(_) => {
                view! { <NavLeaf entry=child.clone() menu=menu.clone() nav=nav /> }.into_any()
            }
            // Only one level of nesting is rendered
            _ => view! { <NavLabel entry=child.clone() /> }.into_any(),
        })
        .collect::<Vec<_>>();

    let on_click = move |_| {
        nav.update(|state| {
            state.activate(&menu, &entry, &viewport, &layout);
        });
    };

    view! {
        <li class="nav-item nav-group" class:active=move || parent_active.get()>
            <button
                class="nav-link nav-toggle"
                on:click=on_click
                aria-expanded=move || if is_open.get() { "true" } else { "false" }
            >
                {icon}
                <span class="nav-label">{name}</span>
                <span class="nav-chevron" class:rotated=move || is_open.get() aria-hidden="true">
                    "\u{25BE}"
                </span>
            </button>
            <ul class="submenu" class:collapsed=move || !is_open.get()>{children}</ul>
        </li>
    }
}

/// Degraded rendering for entries with nothing to navigate to.
#[component]
fn NavLabel(entry: MenuEntry) -> impl IntoView {
    let icon = entry_icon(&entry);

    view! {
        <li class="nav-item nav-inert" aria-disabled="true">
            {icon}
            <span class="nav-label">{entry.name}</span>
        </li>
    }
}

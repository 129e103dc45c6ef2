use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::sidebar::Sidebar;
use crate::components::topbar::Topbar;
use crate::config::MenuConfig;
use crate::context::{LayoutContext, UserContext};
use crate::fixtures;
use crate::pages::dashboard::DashboardPage;
use crate::pages::orders::OrdersPage;
use crate::pages::products::{CategoriesPage, ProductsPage};
use crate::pages::settings::SettingsPage;
use crate::pages::users::{AddUserPage, UsersPage};
use crate::viewport::{provide_viewport, BrowserViewport};

#[component]
pub fn App() -> impl IntoView {
    let menu = Arc::new(MenuConfig::load());
    provide_context(menu.clone());

    // Overlay starts hidden; wide viewports show the rail regardless
    let (is_open, set_open) = signal(false);
    provide_context(LayoutContext { is_open, set_open });

    let (current_user, set_current_user) = signal(Some(fixtures::current_user()));
    provide_context(UserContext {
        current_user,
        set_current_user,
    });

    provide_viewport(BrowserViewport);

    view! {
        <style>{include_str!("app.css")}</style>
        <Router>
            <div class="app-layout">
                <Sidebar menu=menu />
                <div class="app-main">
                    <Topbar />
                    <main class="content">
                        <Routes fallback=|| view! { <p>"Page not found"</p> }>
                            <Route path=path!("/") view=DashboardPage />
                            <Route path=path!("/dashboard") view=DashboardPage />
                            <Route path=path!("/users") view=UsersPage />
                            <Route path=path!("/users/add") view=AddUserPage />
                            <Route path=path!("/products") view=ProductsPage />
                            <Route path=path!("/products/categories") view=CategoriesPage />
                            <Route path=path!("/orders") view=OrdersPage />
                            <Route path=path!("/settings") view=SettingsPage />
                        </Routes>
                    </main>
                </div>
            </div>
        </Router>
    }
}

use leptos::prelude::*;

use crate::components::data_table::DataTable;
use crate::fixtures::{self, Role};

#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <div class="page users-page">
            <div class="section-header">
                <h2>"Users"</h2>
                <a href="/users/add" class="btn btn-primary">"Add User"</a>
            </div>
            <DataTable rows=fixtures::users() />
        </div>
    }
}

/// Draft form for a new user. Nothing is saved; the draft is only echoed
/// back below the form.
#[component]
pub fn AddUserPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (role, set_role) = signal(Role::Viewer.to_string());

    let can_preview = move || !name.get().trim().is_empty() && email.get().contains('@');

    view! {
        <div class="page add-user-page">
            <h2>"Add User"</h2>
            <p class="page-description">"Demo data only; new users are not saved."</p>

            <form class="form" on:submit=|ev| ev.prevent_default()>
                <label class="form-field">
                    <span>"Name"</span>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span>"Role"</span>
                    <select on:change=move |ev| set_role.set(event_target_value(&ev))>
                        {[Role::Viewer, Role::Editor, Role::Admin]
                            .into_iter()
                            .map(|r| view! { <option value=r.to_string()>{r.to_string()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </form>

            <Show
                when=can_preview
                fallback=|| view! { <p class="form-hint">"Enter a name and email to preview."</p> }
            >
                <div class="card draft-preview">
                    <strong>{move || name.get()}</strong>
                    <span>{move || email.get()}</span>
                    <span>{move || role.get()}</span>
                </div>
            </Show>
        </div>
    }
}

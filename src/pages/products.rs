use leptos::prelude::*;

use crate::components::data_table::DataTable;
use crate::fixtures;

#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <div class="page products-page">
            <h2>"Products"</h2>
            <p class="page-description">"Catalog items and current stock levels."</p>
            <DataTable rows=fixtures::products() />
        </div>
    }
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    view! {
        <div class="page categories-page">
            <h2>"Categories"</h2>
            <DataTable rows=fixtures::categories() />
        </div>
    }
}

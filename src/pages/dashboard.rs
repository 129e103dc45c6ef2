use leptos::prelude::*;

use crate::components::data_table::DataTable;
use crate::fixtures;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let cards = fixtures::stats()
        .into_iter()
        .map(|stat| {
            view! {
                <div class="card stat-card">
                    <span class="stat-label">{stat.label}</span>
                    <span class="stat-value">{stat.value}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let recent = fixtures::orders().into_iter().take(3).collect::<Vec<_>>();

    view! {
        <div class="page dashboard-page">
            <h2>"Dashboard"</h2>
            <p class="page-description">"Store activity at a glance."</p>

            <div class="card-grid">{cards}</div>

            <section class="page-section">
                <div class="section-header">
                    <h3>"Recent Orders"</h3>
                    <a href="/orders" class="btn btn-secondary">"View all"</a>
                </div>
                <DataTable rows=recent />
            </section>
        </div>
    }
}

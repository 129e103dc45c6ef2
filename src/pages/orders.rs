use leptos::prelude::*;

use crate::components::data_table::DataTable;
use crate::fixtures::{self, OrderStatus};

const FILTERS: [(&str, Option<OrderStatus>); 5] = [
    ("all", None),
    ("pending", Some(OrderStatus::Pending)),
    ("shipped", Some(OrderStatus::Shipped)),
    ("delivered", Some(OrderStatus::Delivered)),
    ("cancelled", Some(OrderStatus::Cancelled)),
];

fn status_filter(key: &str) -> Option<OrderStatus> {
    FILTERS
        .iter()
        .find(|(k, _)| *k == key)
        .and_then(|(_, status)| *status)
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let (filter, set_filter) = signal(String::from("all"));

    let filtered = move || {
        let status = status_filter(&filter.get());
        fixtures::orders()
            .into_iter()
            .filter(|order| status.map_or(true, |s| order.status == s))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page orders-page">
            <h2>"Orders"</h2>

            <div class="toolbar">
                <label for="order-status">"Status"</label>
                <select
                    id="order-status"
                    on:change=move |ev| set_filter.set(event_target_value(&ev))
                >
                    {FILTERS
                        .iter()
                        .map(|(key, status)| {
                            let label = status
                                .map(|s| s.to_string())
                                .unwrap_or_else(|| "All".to_string());
                            view! { <option value=*key>{label}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            {move || {
                view! { <DataTable rows=filtered() empty_message="No orders with this status" /> }
            }}
        </div>
    }
}

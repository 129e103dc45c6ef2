use leptos::prelude::*;

use crate::fixtures::OrderStatus;

/// Color family for a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Positive,
    Negative,
    Pending,
    Neutral,
}

impl From<OrderStatus> for BadgeTone {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Delivered => BadgeTone::Positive,
            OrderStatus::Cancelled => BadgeTone::Negative,
            OrderStatus::Pending => BadgeTone::Pending,
            OrderStatus::Shipped => BadgeTone::Neutral,
        }
    }
}

#[component]
pub fn StatusBadge(
    /// The label text, e.g. "Shipped"
    #[prop(into)]
    label: String,
    /// Which color family to render
    tone: BadgeTone,
) -> impl IntoView {
    let class = match tone {
        BadgeTone::Positive => "status-badge status-positive",
        BadgeTone::Negative => "status-badge status-negative",
        BadgeTone::Pending => "status-badge status-pending",
        BadgeTone::Neutral => "status-badge status-neutral",
    };

    view! { <span class=class>{label}</span> }
}

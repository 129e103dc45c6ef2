//! Generic table for the mock data pages.

use leptos::prelude::*;

use super::status_badge::{BadgeTone, StatusBadge};
use crate::fixtures::{format_cents, Category, Order, Product, User};

/// One rendered table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Badge(BadgeTone, String),
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

pub trait TableRow {
    const COLUMNS: &'static [&'static str];

    fn cells(&self) -> Vec<Cell>;
}

impl TableRow for User {
    const COLUMNS: &'static [&'static str] = &["ID", "Name", "Email", "Role", "Status", "Joined"];

    fn cells(&self) -> Vec<Cell> {
        let status = if self.active {
            Cell::Badge(BadgeTone::Positive, "Active".to_string())
        } else {
            Cell::Badge(BadgeTone::Negative, "Disabled".to_string())
        };
        vec![
            self.id.to_string().into(),
            self.name.clone().into(),
            self.email.clone().into(),
            self.role.to_string().into(),
            status,
            self.joined.into(),
        ]
    }
}

impl TableRow for Product {
    const COLUMNS: &'static [&'static str] = &["SKU", "Name", "Category", "Price", "Stock"];

    fn cells(&self) -> Vec<Cell> {
        let stock = match self.stock {
            0 => Cell::Badge(BadgeTone::Negative, "Out of stock".to_string()),
            n if n < 10 => Cell::Badge(BadgeTone::Pending, format!("{} left", n)),
            n => Cell::Text(n.to_string()),
        };
        vec![
            self.sku.into(),
            self.name.into(),
            self.category.into(),
            format_cents(self.price_cents).into(),
            stock,
        ]
    }
}

impl TableRow for Category {
    const COLUMNS: &'static [&'static str] = &["Name", "Description"];

    fn cells(&self) -> Vec<Cell> {
        vec![self.name.into(), self.description.into()]
    }
}

impl TableRow for Order {
    const COLUMNS: &'static [&'static str] = &["Order", "Customer", "Total", "Status", "Placed"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            self.id.into(),
            self.customer.into(),
            format_cents(self.total_cents).into(),
            Cell::Badge(self.status.into(), self.status.to_string()),
            self.placed.into(),
        ]
    }
}

#[component]
pub fn DataTable<T>(
    rows: Vec<T>,
    /// Shown in place of the body when there are no rows.
    #[prop(optional, into)]
    empty_message: Option<String>,
) -> impl IntoView
where
    T: TableRow + 'static,
{
    let header = T::COLUMNS
        .iter()
        .map(|column| view! { <th>{*column}</th> })
        .collect::<Vec<_>>();

    let body = if rows.is_empty() {
        let message = empty_message.unwrap_or_else(|| "No records".to_string());
        view! {
            <tr class="table-empty">
                <td colspan=T::COLUMNS.len().to_string()>{message}</td>
            </tr>
        }
        .into_any()
    } else {
        rows.iter()
            .map(|row| {
                let cells = row
                    .cells()
                    .into_iter()
                    .map(|cell| match cell {
                        Cell::Text(text) => view! { <td>{text}</td> }.into_any(),
                        Cell::Badge(tone, label) => {
                            view! { <td><StatusBadge label=label tone=tone /></td> }.into_any()
                        }
                    })
                    .collect::<Vec<_>>();
                view! { <tr>{cells}</tr> }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <table class="data-table">
            <thead>
                <tr>{header}</tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_rows_match_column_count() {
        for user in fixtures::users() {
            assert_eq!(user.cells().len(), User::COLUMNS.len());
        }
        for product in fixtures::products() {
            assert_eq!(product.cells().len(), Product::COLUMNS.len());
        }
        for category in fixtures::categories() {
            assert_eq!(category.cells().len(), Category::COLUMNS.len());
        }
        for order in fixtures::orders() {
            assert_eq!(order.cells().len(), Order::COLUMNS.len());
        }
    }

    #[test]
    fn test_stock_levels_render_as_badges() {
        let products = fixtures::products();
        let stock = |sku: &str| {
            products
                .iter()
                .find(|p| p.sku == sku)
                .map(|p| p.cells().remove(4))
                .unwrap()
        };
        assert_eq!(stock("DK-330"), Cell::Badge(BadgeTone::Negative, "Out of stock".to_string()));
        assert_eq!(stock("MN-270"), Cell::Badge(BadgeTone::Pending, "8 left".to_string()));
        assert_eq!(stock("KB-104"), Cell::Text("42".to_string()));
    }
}

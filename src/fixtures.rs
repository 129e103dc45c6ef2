//! Static mock data backing the dashboard tables.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Admin => "Admin",
            Role::Editor => "Editor",
            Role::Viewer => "Viewer",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub active: bool,
    pub joined: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub sku: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub price_cents: u64,
    pub stock: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: &'static str,
    pub customer: &'static str,
    pub total_cents: u64,
    pub status: OrderStatus,
    pub placed: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: String,
}

fn user(id: u32, name: &str, email: &str, role: Role, active: bool, joined: &'static str) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        active,
        joined,
    }
}

/// The signed-in user shown in the top bar.
pub fn current_user() -> User {
    user(1, "Ada Park", "ada.park@example.com", Role::Admin, true, "2023-02-14")
}

pub fn users() -> Vec<User> {
    vec![
        current_user(),
        user(2, "Rui Tanaka", "rui.tanaka@example.com", Role::Editor, true, "2023-06-01"),
        user(3, "Sam Okafor", "sam.okafor@example.com", Role::Viewer, true, "2024-01-19"),
        user(4, "Lena Vogel", "lena.vogel@example.com", Role::Editor, false, "2024-03-07"),
        user(5, "Iris Moreau", "iris.moreau@example.com", Role::Viewer, true, "2024-08-22"),
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        Product {
            sku: "KB-104",
            name: "Mechanical Keyboard",
            category: "Peripherals",
            price_cents: 8900,
            stock: 42,
        },
        Product {
            sku: "MS-210",
            name: "Wireless Mouse",
            category: "Peripherals",
            price_cents: 3450,
            stock: 120,
        },
        Product {
            sku: "MN-270",
            name: "27\" Monitor",
            category: "Displays",
            price_cents: 27900,
            stock: 8,
        },
        Product {
            sku: "DK-330",
            name: "USB-C Dock",
            category: "Accessories",
            price_cents: 15900,
            stock: 0,
        },
        Product {
            sku: "HS-050",
            name: "Headset",
            category: "Audio",
            price_cents: 6400,
            stock: 31,
        },
    ]
}

pub fn categories() -> Vec<Category> {
    vec![
        Category {
            name: "Peripherals",
            description: "Keyboards, mice and other input devices",
        },
        Category {
            name: "Displays",
            description: "Monitors and projectors",
        },
        Category {
            name: "Accessories",
            description: "Docks, cables and adapters",
        },
        Category {
            name: "Audio",
            description: "Headsets and speakers",
        },
    ]
}

pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: "ORD-1042",
            customer: "Northwind Ltd",
            total_cents: 45700,
            status: OrderStatus::Pending,
            placed: "2026-10-17",
        },
        Order {
            id: "ORD-1041",
            customer: "Blue Harbor",
            total_cents: 8900,
            status: OrderStatus::Shipped,
            placed: "2026-10-16",
        },
        Order {
            id: "ORD-1040",
            customer: "Kestrel & Co",
            total_cents: 31800,
            status: OrderStatus::Delivered,
            placed: "2026-10-14",
        },
        Order {
            id: "ORD-1039",
            customer: "Maple Labs",
            total_cents: 15900,
            status: OrderStatus::Cancelled,
            placed: "2026-10-12",
        },
        Order {
            id: "ORD-1038",
            customer: "Northwind Ltd",
            total_cents: 12800,
            status: OrderStatus::Delivered,
            placed: "2026-10-09",
        },
    ]
}

pub fn stats() -> Vec<Stat> {
    let orders = orders();
    let revenue: u64 = orders
        .iter()
        .filter(|o| o.status != OrderStatus::Cancelled)
        .map(|o| o.total_cents)
        .sum();
    let open = orders
        .iter()
        .filter(|o| matches!(o.status, OrderStatus::Pending | OrderStatus::Shipped))
        .count();
    let active_users = users().iter().filter(|u| u.active).count();
    let low_stock = products().iter().filter(|p| p.stock < 10).count();

    vec![
        Stat {
            label: "Revenue",
            value: format_cents(revenue),
        },
        Stat {
            label: "Open Orders",
            value: open.to_string(),
        },
        Stat {
            label: "Active Users",
            value: active_users.to_string(),
        },
        Stat {
            label: "Low Stock",
            value: low_stock.to_string(),
        },
    ]
}

pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(8900), "$89.00");
        assert_eq!(format_cents(3450), "$34.50");
        assert_eq!(format_cents(7), "$0.07");
    }

    #[test]
    fn test_stats_follow_fixtures() {
        let stats = stats();
        let value = |label: &str| {
            stats
                .iter()
                .find(|s| s.label == label)
                .map(|s| s.value.clone())
                .unwrap()
        };
        assert_eq!(value("Revenue"), "$992.00");
        assert_eq!(value("Open Orders"), "2");
        assert_eq!(value("Active Users"), "4");
        assert_eq!(value("Low Stock"), "2");
    }
}

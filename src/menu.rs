//! Menu entries rendered by the sidebar.
//!
//! An entry is a leaf when it carries a path and a parent when it carries a
//! submenu. Entries with neither are kept so the table can still be shown,
//! but they are inert.

use serde::Deserialize;

/// Icon handle resolved from the name used in the menu table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Icon {
    Dashboard,
    Users,
    UserAdd,
    Products,
    Categories,
    Orders,
    Settings,
    /// A name the dashboard has no glyph for. Rendered without an icon.
    Unknown(String),
}

impl From<String> for Icon {
    fn from(name: String) -> Self {
        match name.as_str() {
            "dashboard" => Icon::Dashboard,
            "users" => Icon::Users,
            "user_add" => Icon::UserAdd,
            "products" => Icon::Products,
            "categories" => Icon::Categories,
            "orders" => Icon::Orders,
            "settings" => Icon::Settings,
            _ => Icon::Unknown(name),
        }
    }
}

impl Icon {
    /// Material Symbols ligature for the icon, if there is one.
    pub fn ligature(&self) -> Option<&'static str> {
        match self {
            Icon::Dashboard => Some("dashboard"),
            Icon::Users => Some("group"),
            Icon::UserAdd => Some("person_add"),
            Icon::Products => Some("inventory_2"),
            Icon::Categories => Some("category"),
            Icon::Orders => Some("receipt_long"),
            Icon::Settings => Some("settings"),
            Icon::Unknown(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuEntry {
    pub name: String,
    #[serde(default)]
    pub icon: Option<Icon>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub submenu: Option<Vec<MenuEntry>>,
}

/// How the sidebar treats an entry when it is clicked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryKind<'a> {
    Leaf(&'a str),
    Parent(&'a [MenuEntry]),
    Inert,
}

impl MenuEntry {
    pub fn leaf(name: &str, icon: Icon, path: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: Some(icon),
            path: Some(path.to_string()),
            submenu: None,
        }
    }

    pub fn parent(name: &str, icon: Icon, children: Vec<MenuEntry>) -> Self {
        Self {
            name: name.to_string(),
            icon: Some(icon),
            path: None,
            submenu: Some(children),
        }
    }

    /// A submenu wins over a path: a parent's own path is never navigated to.
    pub fn kind(&self) -> EntryKind<'_> {
        match (&self.submenu, &self.path) {
            (Some(children), _) => EntryKind::Parent(children),
            (None, Some(path)) => EntryKind::Leaf(path),
            (None, None) => EntryKind::Inert,
        }
    }

    pub fn leaf_path(&self) -> Option<&str> {
        match self.kind() {
            EntryKind::Leaf(path) => Some(path),
            _ => None,
        }
    }

    pub fn children(&self) -> &[MenuEntry] {
        match self.kind() {
            EntryKind::Parent(children) => children,
            _ => &[],
        }
    }

    /// True when one of the direct children is a leaf at `path`.
    pub fn contains_path(&self, path: &str) -> bool {
        self.children()
            .iter()
            .any(|child| child.leaf_path() == Some(path))
    }

    pub fn glyph(&self) -> Option<&'static str> {
        self.icon.as_ref().and_then(Icon::ligature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_prefers_submenu_over_path() {
        let mut entry = MenuEntry::parent("Users", Icon::Users, vec![]);
        entry.path = Some("/users".to_string());
        assert!(matches!(entry.kind(), EntryKind::Parent(children) if children.is_empty()));
        assert_eq!(entry.leaf_path(), None);
    }

    #[test]
    fn test_entry_without_target_is_inert() {
        let entry: MenuEntry = serde_json::from_str(r#"{ "name": "Reports" }"#).unwrap();
        assert_eq!(entry.kind(), EntryKind::Inert);
        assert!(entry.children().is_empty());
        assert_eq!(entry.glyph(), None);
    }

    #[test]
    fn test_unknown_icon_name_is_kept() {
        let entry: MenuEntry =
            serde_json::from_str(r#"{ "name": "Audit", "icon": "shield", "path": "/audit" }"#)
                .unwrap();
        assert_eq!(entry.icon, Some(Icon::Unknown("shield".to_string())));
        assert_eq!(entry.glyph(), None);
        assert_eq!(entry.leaf_path(), Some("/audit"));
    }

    #[test]
    fn test_contains_path_checks_direct_children_only() {
        let users = MenuEntry::parent(
            "Users",
            Icon::Users,
            vec![
                MenuEntry::leaf("All Users", Icon::Users, "/users"),
                MenuEntry::leaf("Add User", Icon::UserAdd, "/users/add"),
            ],
        );
        assert!(users.contains_path("/users/add"));
        assert!(!users.contains_path("/users/add/extra"));
        assert!(!MenuEntry::leaf("Orders", Icon::Orders, "/orders").contains_path("/orders"));
    }
}

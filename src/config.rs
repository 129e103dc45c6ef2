use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use crate::error::{ConfigDefect, DashboardError};
use crate::menu::{EntryKind, Icon, MenuEntry};

/// Menu table shipped with the dashboard.
pub const DEFAULT_MENU_JSON: &str = include_str!("../config/menu.json");

/// Viewports narrower than this (in CSS pixels) show the sidebar as an overlay.
pub const DEFAULT_OVERLAY_BREAKPOINT: f64 = 1024.0;

fn default_overlay_breakpoint() -> f64 {
    DEFAULT_OVERLAY_BREAKPOINT
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuConfig {
    /// Leaf path that `/` is treated as. Falls back to the first leaf.
    #[serde(default)]
    pub default_path: Option<String>,
    #[serde(default = "default_overlay_breakpoint")]
    pub overlay_breakpoint: f64,
    pub entries: Vec<MenuEntry>,
}

impl MenuConfig {
    pub fn from_json(json: &str) -> Result<Self, DashboardError> {
        let config: MenuConfig = serde_json::from_str(json)?;
        if config.entries.is_empty() {
            return Err(DashboardError::EmptyMenu);
        }
        Ok(config)
    }

    /// Load the shipped menu table, falling back to a dashboard-only menu if
    /// it cannot be parsed. Defects are logged, not fatal.
    pub fn load() -> Self {
        let config = match Self::from_json(DEFAULT_MENU_JSON) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load menu table, using built-in menu");
                Self::builtin()
            }
        };

        for defect in config.validate() {
            tracing::warn!(%defect, "Menu config defect");
        }

        config
    }

    pub fn builtin() -> Self {
        Self {
            default_path: Some("/dashboard".to_string()),
            overlay_breakpoint: DEFAULT_OVERLAY_BREAKPOINT,
            entries: vec![MenuEntry::leaf("Dashboard", Icon::Dashboard, "/dashboard")],
        }
    }

    pub fn default_path(&self) -> Option<&str> {
        self.default_path
            .as_deref()
            .or_else(|| self.entries.iter().find_map(MenuEntry::leaf_path))
    }

    /// Map the root path onto the default leaf so landing on `/` highlights it.
    pub fn normalize<'a>(&'a self, path: &'a str) -> &'a str {
        match (path, self.default_path()) {
            ("/", Some(default)) => default,
            _ => path,
        }
    }

    /// First parent, in list order, whose submenu holds a leaf at `path`.
    pub fn owning_parent(&self, path: &str) -> Option<&MenuEntry> {
        let path = self.normalize(path);
        self.entries.iter().find(|entry| entry.contains_path(path))
    }

    pub fn entry(&self, name: &str) -> Option<&MenuEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn validate(&self) -> Vec<ConfigDefect> {
        let mut defects = Vec::new();
        let mut names = HashSet::new();
        let mut owners: HashMap<&str, &str> = HashMap::new();

        for entry in &self.entries {
            check_entry(entry, &mut defects);
            if !names.insert(entry.name.as_str()) {
                defects.push(ConfigDefect::DuplicateName(entry.name.clone()));
            }

            for child in entry.children() {
                check_entry(child, &mut defects);
                if child.submenu.is_some() {
                    defects.push(ConfigDefect::NestedSubmenu {
                        parent: entry.name.clone(),
                        child: child.name.clone(),
                    });
                }
                let Some(path) = child.leaf_path() else {
                    continue;
                };
                let first = *owners.entry(path).or_insert(entry.name.as_str());
                if first != entry.name {
                    defects.push(ConfigDefect::SharedChildPath {
                        path: path.to_string(),
                        first: first.to_string(),
                        second: entry.name.clone(),
                    });
                }
            }
        }

        if let Some(default) = self.default_path.as_deref() {
            if !self.has_leaf(default) {
                defects.push(ConfigDefect::UnknownDefaultPath(default.to_string()));
            }
        }

        if !self.overlay_breakpoint.is_finite() || self.overlay_breakpoint <= 0.0 {
            defects.push(ConfigDefect::InvalidBreakpoint(self.overlay_breakpoint));
        }

        defects
    }

    /// True when a top-level entry or a direct child is a leaf at `path`.
    pub fn has_leaf(&self, path: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.leaf_path() == Some(path) || entry.contains_path(path))
    }
}

fn check_entry(entry: &MenuEntry, defects: &mut Vec<ConfigDefect>) {
    match entry.kind() {
        EntryKind::Inert => defects.push(ConfigDefect::NoTarget(entry.name.clone())),
        EntryKind::Parent(_) if entry.path.is_some() => {
            defects.push(ConfigDefect::PathOnParent(entry.name.clone()))
        }
        _ => {}
    }

    match &entry.icon {
        None => defects.push(ConfigDefect::MissingIcon(entry.name.clone())),
        Some(Icon::Unknown(icon)) => defects.push(ConfigDefect::UnknownIcon {
            entry: entry.name.clone(),
            icon: icon.clone(),
        }),
        Some(_) => {}
    }
}

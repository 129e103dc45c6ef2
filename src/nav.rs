//! Sidebar navigation state.
//!
//! At most one top-level parent has its submenu expanded at a time. The open
//! parent changes when the user clicks a parent, and when the current path
//! moves into one of a parent's children. Navigating away never collapses.

use crate::config::MenuConfig;
use crate::menu::{EntryKind, MenuEntry};
use crate::viewport::Viewport;

/// Write side of the shell-owned panel visibility flag. The sidebar may only
/// close the panel; opening belongs to the top bar.
pub trait PanelVisibility {
    fn close_panel(&self);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    open_submenu: Option<String>,
}

/// What a click on an entry did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Expanded(String),
    Collapsed(String),
    Navigated { panel_closed: bool },
    Ignored,
}

impl Activation {
    pub fn changed_state(&self) -> bool {
        matches!(self, Activation::Expanded(_) | Activation::Collapsed(_))
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_submenu(&self) -> Option<&str> {
        self.open_submenu.as_deref()
    }

    pub fn is_open(&self, name: &str) -> bool {
        self.open_submenu() == Some(name)
    }

    /// Open `name`, or close it if it is already open. Opening replaces any
    /// other open submenu.
    pub fn toggle(&mut self, name: &str) -> Activation {
        if self.is_open(name) {
            self.open_submenu = None;
            Activation::Collapsed(name.to_string())
        } else {
            self.open_submenu = Some(name.to_string());
            Activation::Expanded(name.to_string())
        }
    }

    /// Handle a click on `entry`.
    ///
    /// Parents toggle their submenu. Leaves are navigated by the router link
    /// itself; here they only close the panel when the viewport is narrower
    /// than the menu's overlay breakpoint.
    pub fn activate(
        &mut self,
        menu: &MenuConfig,
        entry: &MenuEntry,
        viewport: &impl Viewport,
        panel: &impl PanelVisibility,
    ) -> Activation {
        let activation = match entry.kind() {
            EntryKind::Parent(_) => self.toggle(&entry.name),
            EntryKind::Leaf(_) => {
                let panel_closed = viewport.is_narrow(menu.overlay_breakpoint);
                if panel_closed {
                    panel.close_panel();
                }
                Activation::Navigated { panel_closed }
            }
            EntryKind::Inert => Activation::Ignored,
        };

        tracing::debug!(entry = %entry.name, ?activation, "Navigation entry activated");
        activation
    }

    /// Expand the parent owning `path`, if any. Returns whether the open
    /// submenu changed. When several parents list the same path the first
    /// one in menu order wins.
    pub fn sync_to_path(&mut self, menu: &MenuConfig, path: &str) -> bool {
        let Some(parent) = menu.owning_parent(path) else {
            return false;
        };
        if self.is_open(&parent.name) {
            return false;
        }

        tracing::debug!(parent = %parent.name, path, "Expanding submenu for current path");
        self.open_submenu = Some(parent.name.clone());
        true
    }
}

/// True when `entry` is a leaf at the current path, with `/` standing in for
/// the default path.
pub fn is_entry_active(menu: &MenuConfig, entry: &MenuEntry, current_path: &str) -> bool {
    entry.leaf_path() == Some(menu.normalize(current_path))
}

/// True when `entry` is a parent and one of its children is active. Holds
/// whether or not the submenu is expanded.
pub fn is_parent_active(menu: &MenuConfig, entry: &MenuEntry, current_path: &str) -> bool {
    entry.contains_path(menu.normalize(current_path))
}

use leptos::prelude::*;

use crate::fixtures::User;
use crate::nav::PanelVisibility;

/// Sidebar visibility in overlay mode. Owned by the app shell.
#[derive(Clone, Copy)]
pub struct LayoutContext {
    pub is_open: ReadSignal<bool>,
    pub set_open: WriteSignal<bool>,
}

impl PanelVisibility for LayoutContext {
    fn close_panel(&self) {
        self.set_open.set(false);
    }
}

#[derive(Clone, Copy)]
pub struct UserContext {
    pub current_user: ReadSignal<Option<User>>,
    pub set_current_user: WriteSignal<Option<User>>,
}

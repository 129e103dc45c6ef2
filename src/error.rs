use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Menu config error: {0}")]
    MenuConfig(#[from] serde_json::Error),

    #[error("Menu config has no entries")]
    EmptyMenu,
}

/// A problem in the menu table that the sidebar works around by rendering
/// the affected entry in degraded form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigDefect {
    #[error("entry '{0}' has neither a path nor a submenu and is not navigable")]
    NoTarget(String),

    #[error("entry '{0}' has both a path and a submenu; the path is ignored")]
    PathOnParent(String),

    #[error("entry '{0}' has no icon")]
    MissingIcon(String),

    #[error("entry '{entry}' names unknown icon '{icon}'")]
    UnknownIcon { entry: String, icon: String },

    #[error("submenu entry '{child}' under '{parent}' has its own submenu, which is not rendered")]
    NestedSubmenu { parent: String, child: String },

    #[error("entry name '{0}' is used more than once")]
    DuplicateName(String),

    #[error("default path '{0}' is not the path of any menu entry")]
    UnknownDefaultPath(String),

    #[error("overlay breakpoint {0} must be a positive number of pixels")]
    InvalidBreakpoint(f64),

    #[error("path '{path}' appears under both '{first}' and '{second}'; '{first}' is expanded")]
    SharedChildPath {
        path: String,
        first: String,
        second: String,
    },
}

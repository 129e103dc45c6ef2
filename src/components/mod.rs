pub mod data_table;
pub mod sidebar;
pub mod status_badge;
pub mod topbar;

//! Browser admin dashboard: a responsive navigation sidebar over static mock
//! data pages.

pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod menu;
pub mod nav;
pub mod pages;
pub mod viewport;

pub mod dashboard;
pub mod orders;
pub mod products;
pub mod settings;
pub mod users;

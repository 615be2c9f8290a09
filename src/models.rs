pub mod dashboard;
pub mod analytics;
pub mod inventory;
pub mod finance;
pub mod operations;
pub mod settings;

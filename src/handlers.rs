pub mod dashboard;
pub mod analytics;
pub mod inventory;
pub mod operations;
pub mod finance;
pub mod settings;

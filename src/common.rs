pub mod error;
pub mod date_utils;
pub mod csv_export;
pub mod money;

pub mod analytics_service;
pub mod insights_service;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
pub mod inventory_service;
pub use inventory_service::InventoryService;
pub mod finance_service;
pub use finance_service::FinanceService;
pub mod operation_service;
pub use operation_service::OperationService;

pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
pub mod inventory_repo;
pub use inventory_repo::InventoryRepository;
pub mod operations_repo;
pub mod finance_repo;

pub use finance_repo::FinanceRepository;

pub use operations_repo::OperationsRepository;

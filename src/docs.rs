// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Settings ---
        handlers::settings::get_settings,

        // --- Dashboard ---
        handlers::dashboard::get_overview,
        handlers::dashboard::get_kpis,
        handlers::dashboard::get_sales_chart,
        handlers::dashboard::export_sales,
        handlers::dashboard::get_top_sellers,
        handlers::dashboard::get_alerts,
        handlers::dashboard::get_pricing,

        // --- Analytics ---
        handlers::analytics::evaluate,
        handlers::analytics::get_weekday_sales,
        handlers::analytics::get_profit_leaders,
        handlers::analytics::get_basket_pairs,

        // --- INVENTORY ---
        handlers::inventory::get_inventory,
        handlers::inventory::export_inventory,
        handlers::inventory::get_suppliers,
        handlers::inventory::export_suppliers,

        // --- OPERATIONS ---
        handlers::operations::get_orders,
        handlers::operations::export_orders,

        // --- FINANCE ---
        handlers::finance::get_expenses,
        handlers::finance::export_expenses,
    ),
    components(
        schemas(

            // --- DASHBOARD ---
            models::dashboard::SalesRecord,
            models::dashboard::TopSeller,
            models::dashboard::ForecastPoint,
            models::dashboard::Kpis,
            models::dashboard::KpiCard,
            models::dashboard::AlertKind,
            models::dashboard::Alert,
            models::dashboard::PricingAction,
            models::dashboard::PricingRecommendation,
            models::dashboard::SalesChart,
            models::dashboard::DashboardOverview,

            // --- Analytics ---
            models::analytics::WeekdaySales,
            models::analytics::ProfitLeader,
            models::analytics::BasketPair,
            models::analytics::EvaluatePayload,
            models::analytics::EvaluationResult,

            // --- Settings ---
            models::settings::DisplaySettings,

            // --- Inventory ---
            models::inventory::InventoryItem,
            models::inventory::Supplier,
            models::inventory::StockStatus,
            models::inventory::ExpiryStatus,
            models::inventory::InventoryRow,
            models::inventory::InventoryView,

            // --- Operations ---
            models::operations::OrderStatus,
            models::operations::Order,
            models::operations::OrdersView,

            // --- FINANCE ---
            models::finance::ExpenseRecord,
            models::finance::ExpenseSummary,
        )
    ),
    tags(
        (name = "Settings", description = "Controles globais do painel"),
        (name = "Dashboard", description = "Indicadores, previsão, alertas e preços"),
        (name = "Analytics", description = "Padrões de venda e núcleo de análise"),
        (name = "Inventory", description = "Estoque e validade"),
        (name = "Suppliers", description = "Preço e prazo dos fornecedores"),
        (name = "Operations", description = "Pedidos"),
        (name = "Finance", description = "Despesas")
    )
)]
pub struct ApiDoc;

mod common;

use axum::http::{header, Method, StatusCode};
use chrono::{Duration, Local};
use serde_json::{json, Value};

use common::{response_json, response_text, TestApp};

fn today() -> chrono::NaiveDate {
    Local::now().date_naive()
}

fn as_f64(value: &Value) -> f64 {
    value.as_f64().expect("number")
}

#[tokio::test]
async fn health_check() {
    let app = TestApp::new();
    let response = app.get("/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_text(response).await, "OK");
}

#[tokio::test]
async fn overview_uses_configured_defaults() {
    let app = TestApp::new();
    let (status, body) = app.get_json("/api/dashboard/overview").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["windowDays"], 30);
    assert_eq!(body["currency"], "KSh");
    assert_eq!(body["sales"].as_array().unwrap().len(), 30);
    assert_eq!(body["topSellers"].as_array().unwrap().len(), 5);
    assert_eq!(body["pricing"].as_array().unwrap().len(), 13);

    let forecast = body["forecast"].as_array().unwrap();
    assert_eq!(forecast.len(), 7);
    let tomorrow = (today() + Duration::days(1)).format("%Y-%m-%d").to_string();
    assert_eq!(forecast[0]["date"], tomorrow);

    let kpis = &body["kpis"];
    assert_eq!(as_f64(&kpis["expenses"]), 236000.0);
    assert_eq!(as_f64(&kpis["profit"]), as_f64(&kpis["revenue"]) - as_f64(&kpis["expenses"]));

    let cards = body["kpiCards"].as_array().unwrap();
    assert_eq!(cards[0]["label"], "Revenue (30 days)");
    assert_eq!(cards[1]["display"], "KSh 236,000");

    assert!(!body["alerts"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn overview_honours_window_and_currency() {
    let app = TestApp::new();
    let (status, body) = app.get_json("/api/dashboard/overview?days=14&currency=%24").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sales"].as_array().unwrap().len(), 14);
    assert_eq!(body["kpiCards"][2]["display"].as_str().unwrap().chars().next(), Some('$'));
}

#[tokio::test]
async fn invalid_window_is_rejected_with_details() {
    let app = TestApp::new();
    let (status, body) = app.get_json("/api/dashboard/kpis?days=3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["days"].is_array());

    let (status, body) = app.get_json("/api/dashboard/overview?currency=BTC").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["currency"].is_array());
}

#[tokio::test]
async fn demo_alerts_and_pricing() {
    let app = TestApp::new();
    let (status, alerts) = app.get_json("/api/dashboard/alerts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(alerts[0]["kind"], "LOW_STOCK");
    assert_eq!(alerts[0]["message"], "Low stock: Pasta 500g (0)");
    assert_eq!(alerts[1]["kind"], "NEAR_EXPIRY");

    let (_, pricing) = app.get_json("/api/dashboard/pricing").await;
    let bread = pricing
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["sku"] == "BREAD-TR")
        .unwrap();
    assert_eq!(bread["action"], "NEAR_EXPIRY_DISCOUNT");
    assert_eq!(bread["recommendation"], "Recommend 15% discount (near expiry)");
}

#[tokio::test]
async fn sales_export_follows_the_window() {
    let app = TestApp::new();
    let response = app.get("/api/dashboard/sales/export?days=14").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv; charset=utf-8");
    assert!(
        response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .contains("sales.csv")
    );

    let csv = response_text(response).await;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "date,revenue");
    assert_eq!(lines.len(), 15);
    let last_day = format!("{},", today().format("%Y-%m-%d"));
    assert!(lines[14].starts_with(&last_day), "{}", lines[14]);

    let (status, _) = app.get_json("/api/dashboard/sales/export?days=120").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn sales_chart_is_reproducible() {
    let app = TestApp::new();
    let (_, first) = app.get_json("/api/dashboard/sales-chart?days=21").await;
    let (_, second) = app.get_json("/api/dashboard/sales-chart?days=21").await;
    assert_eq!(first, second);
    assert_eq!(first["sales"].as_array().unwrap().len(), 21);
}

// Semana anterior a 120/dia, semana atual a 100/dia: queda de 16,7%
fn two_week_sales(end: chrono::NaiveDate, prior: u32, recent: u32) -> Value {
    let rows: Vec<Value> = (0..14)
        .map(|i| {
            let date = end - Duration::days(13 - i);
            let revenue = if i < 7 { prior } else { recent };
            json!({ "date": date.format("%Y-%m-%d").to_string(), "revenue": revenue })
        })
        .collect();
    Value::Array(rows)
}

fn item(sku: &str, qty: u32, expiry: chrono::NaiveDate) -> Value {
    json!({
        "sku": sku,
        "name": sku,
        "category": "Grocery",
        "qty": qty,
        "expiry": expiry.format("%Y-%m-%d").to_string(),
        "cost": 10,
        "price": 15,
        "supplier": "GrainHub"
    })
}

#[tokio::test]
async fn evaluate_runs_the_core_on_supplied_tables() {
    let app = TestApp::new();
    let day = chrono::NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let payload = json!({
        "today": "2024-03-10",
        "seed": 7,
        "sales": two_week_sales(day, 120, 100),
        "expenses": [{ "type": "Rent", "amount": 1000 }],
        "inventory": [
            item("A", 0, day + Duration::days(10)),
            item("B", 3, day + Duration::days(1)),
            item("C", 150, day + Duration::days(30)),
            item("D", 3, day + Duration::days(20)),
        ]
    });

    let response = app.request(Method::POST, "/api/analytics/evaluate", Some(payload)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;

    assert_eq!(as_f64(&body["kpis"]["revenue"]), 1540.0);
    assert_eq!(as_f64(&body["kpis"]["profit"]), 540.0);
    assert!((as_f64(&body["salesDropPct"]) - 16.667).abs() < 0.01);

    let forecast = body["forecast"].as_array().unwrap();
    assert_eq!(forecast.len(), 7);
    assert_eq!(forecast[0]["date"], "2024-03-11");
    assert_eq!(forecast[6]["date"], "2024-03-17");

    let messages: Vec<&str> = body["alerts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["message"].as_str().unwrap())
        .collect();
    assert_eq!(
        messages,
        vec![
            "Low stock: A (0), B (3), D (3)",
            "Expiry soon: B in 1d",
            "Sales dropped 16.7% vs previous week",
        ]
    );

    let labels: Vec<&str> = body["pricing"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["recommendation"].as_str().unwrap())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Out of stock",
            "Recommend 15% discount (near expiry)",
            "Recommend 5% discount (overstock)",
            "Consider +5% price (fast-moving)",
        ]
    );
}

#[tokio::test]
async fn evaluate_same_seed_same_forecast() {
    let app = TestApp::new();
    let day = chrono::NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let payload = json!({
        "today": "2024-03-10",
        "seed": 123,
        "sales": two_week_sales(day, 300, 420),
        "expenses": [],
        "inventory": []
    });

    let a = response_json(app.request(Method::POST, "/api/analytics/evaluate", Some(payload.clone())).await).await;
    let b = response_json(app.request(Method::POST, "/api/analytics/evaluate", Some(payload)).await).await;
    assert_eq!(a["forecast"], b["forecast"]);
}

#[tokio::test]
async fn evaluate_with_no_history_predicts_zero_and_no_alerts() {
    let app = TestApp::new();
    let day = chrono::NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let payload = json!({
        "today": "2024-03-10",
        "sales": [],
        "expenses": [],
        "inventory": [item("RICE", 20, day + Duration::days(300))]
    });

    let body = response_json(app.request(Method::POST, "/api/analytics/evaluate", Some(payload)).await).await;
    let forecast = body["forecast"].as_array().unwrap();
    assert_eq!(forecast.len(), 7);
    assert_eq!(forecast[0]["date"], "2024-03-11");
    assert!(forecast.iter().all(|p| as_f64(&p["predicted"]) == 0.0));

    assert_eq!(body["alerts"], json!([{ "kind": "NONE", "message": "No active alerts" }]));
}

#[tokio::test]
async fn malformed_tables_are_data_contract_violations() {
    let app = TestApp::new();

    // Falta o campo "revenue"
    let missing = json!({
        "sales": [{ "date": "2024-03-10" }],
        "expenses": [],
        "inventory": []
    });
    let response = app.request(Method::POST, "/api/analytics/evaluate", Some(missing)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Despesa negativa
    let negative = json!({
        "sales": [],
        "expenses": [{ "type": "Rent", "amount": -10 }],
        "inventory": []
    });
    let response = app.request(Method::POST, "/api/analytics/evaluate", Some(negative)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("Rent"));
}

#[tokio::test]
async fn totals_beyond_decimal_range_are_rejected() {
    let app = TestApp::new();
    let day = chrono::NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let sales: Vec<Value> = (0..9)
        .map(|i| {
            let date = day - Duration::days(i);
            json!({ "date": date.format("%Y-%m-%d").to_string(), "revenue": 1e28 })
        })
        .collect();
    let payload = json!({ "sales": sales, "expenses": [], "inventory": [] });

    let response = app.request(Method::POST, "/api/analytics/evaluate", Some(payload)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn forecast_past_the_calendar_end_is_rejected() {
    let app = TestApp::new();
    let payload = json!({
        "sales": [{ "date": "+262142-12-31", "revenue": 10 }],
        "expenses": [],
        "inventory": []
    });
    let response = app.request(Method::POST, "/api/analytics/evaluate", Some(payload)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let payload = json!({
        "today": "+262142-12-31",
        "sales": [],
        "expenses": [],
        "inventory": []
    });
    let response = app.request(Method::POST, "/api/analytics/evaluate", Some(payload)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn inventory_filters_and_csv_export() {
    let app = TestApp::new();
    let (status, body) = app.get_json("/api/inventory?supplier=DairyCo").await;
    assert_eq!(status, StatusCode::OK);
    let skus: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["sku"].as_str().unwrap())
        .collect();
    assert_eq!(skus, vec!["MILK-1L", "YOG-500"]);
    assert_eq!(body["items"][0]["daysToExpiry"], 2);

    let response = app.get("/api/inventory/export?lowOnly=true").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv; charset=utf-8");
    assert!(
        response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .contains("inventory.csv")
    );
    let csv = response_text(response).await;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "sku,name,category,qty,expiry,cost,price,supplier,daysToExpiry,stockStatus,expiryStatus"
    );
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("PASTA-500,Pasta 500g,Grocery,0,"));
}

#[tokio::test]
async fn suppliers_orders_and_expenses() {
    let app = TestApp::new();

    let (_, suppliers) = app.get_json("/api/suppliers").await;
    assert_eq!(suppliers[0]["name"], "DairyCo");
    assert_eq!(suppliers[0]["avgLeadDays"], 2);

    let csv = response_text(app.get("/api/suppliers/export").await).await;
    assert_eq!(csv.lines().next(), Some("name,lastPrice,avgLeadDays"));
    assert_eq!(csv.lines().count(), 8);

    let (status, orders) = app.get_json("/api/orders?status=Pending").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orders["orders"].as_array().unwrap().len(), 2);
    assert_eq!(orders["statusOptions"].as_array().unwrap().len(), 4);

    let (status, _) = app.get_json("/api/orders?status=Lost").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let csv = response_text(app.get("/api/orders/export?status=Delivered").await).await;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "id,customer,items,total,status");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].ends_with(",Delivered"));

    let (_, expenses) = app.get_json("/api/expenses").await;
    assert_eq!(as_f64(&expenses["total"]), 236000.0);
    assert_eq!(expenses["items"][0]["type"], "Rent");

    let csv = response_text(app.get("/api/expenses/export").await).await;
    assert_eq!(csv.lines().next(), Some("type,amount"));
    assert_eq!(csv.lines().count(), 6);
}

#[tokio::test]
async fn analytics_insights() {
    let app = TestApp::new();

    let (_, weekday) = app.get_json("/api/analytics/weekday?days=28").await;
    let rows = weekday.as_array().unwrap();
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0]["weekday"], "Monday");
    assert!(rows.iter().all(|r| r["averageRevenue"].is_number()));

    let (_, leaders) = app.get_json("/api/analytics/profit-leaders").await;
    let cola = leaders.as_array().unwrap().iter().find(|l| l["name"] == "Cola 330ml").unwrap();
    assert_eq!(as_f64(&cola["marginValue"]), 15600.0);
    assert_eq!(as_f64(&cola["marginPct"]), 40.0);

    let (_, pairs) = app.get_json("/api/analytics/basket-pairs").await;
    assert_eq!(pairs[0]["itemA"], "Bread");
    assert_eq!(pairs[0]["count"], 180);
}

#[tokio::test]
async fn settings_and_openapi_document() {
    let app = TestApp::new();

    let (_, settings) = app.get_json("/api/settings").await;
    assert_eq!(settings["defaultDays"], 30);
    assert_eq!(settings["minDays"], 7);
    assert_eq!(settings["maxDays"], 90);
    assert_eq!(settings["currencyOptions"], json!(["KSh", "$", "€", "£"]));

    let (status, doc) = app.get_json("/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/dashboard/overview"].is_object());
    assert!(doc["paths"]["/api/analytics/evaluate"]["post"].is_object());
    assert!(doc["paths"]["/api/dashboard/sales/export"]["get"].is_object());
}

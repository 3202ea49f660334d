// space-catalog/tests/remote_catalog.rs
// 远程表格导出集成测试 (本地 axum 服务器)

use axum::Router;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use rust_decimal::Decimal;
use space_catalog::{
    CatalogError, CatalogService, Config, SheetExportSource, TableName, TableSource, find_by_name,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

const SPACES: &str = "ID,Nome,Tipo de Espaço,Capacidade\n1,Sala 101,Sala,30\n";
const EQUIPMENT: &str = "ID,Nome\n10,Projetor\n";
const LINKS: &str = "Espaco_ID,Equipamento_ID,Quantidade\n1,10,1\n";
const PRICES: &str = "Espaco_ID,Periodo,Preco(AOA)\n1,Meio dia,25000\n1,Todo dia,45000\n";

/// Serve `tables` keyed by the `sheet` query parameter; unknown sheets 404
async fn serve(tables: HashMap<&'static str, &'static str>) -> String {
    let tables = Arc::new(tables);
    let app = Router::new().route(
        "/pub",
        get(move |Query(query): Query<HashMap<String, String>>| {
            let tables = tables.clone();
            async move {
                match query.get("sheet").and_then(|sheet| tables.get(sheet.as_str())) {
                    Some(body) => (StatusCode::OK, body.to_string()),
                    None => (StatusCode::NOT_FOUND, "not found".to_string()),
                }
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/pub?output=csv", addr)
}

fn join_tables() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("Espacos", SPACES),
        ("Equipamentos", EQUIPMENT),
        ("EspacoEquipamentos", LINKS),
        ("Precos", PRICES),
    ])
}

fn remote_config(sheet_url: String) -> Config {
    let mut config = Config::with_overrides("unused", true);
    config.sheet_url = sheet_url;
    config.request_timeout_ms = 5000;
    config
}

#[tokio::test]
async fn test_remote_catalog_loads_and_joins() {
    let url = serve(join_tables()).await;
    let service = CatalogService::from_config(&remote_config(url)).unwrap();
    assert!(service.source().is_remote());

    let views = service.load_views().await.unwrap();
    let room = find_by_name(&views, "Sala 101").unwrap();
    assert_eq!(room.equipment_names, vec!["Projetor"]);
    assert_eq!(room.price_full_day, Some(Decimal::from(45000)));
}

#[tokio::test]
async fn test_remote_missing_sheet_is_join_incomplete() {
    let mut tables = join_tables();
    tables.remove("Equipamentos");
    let url = serve(tables).await;
    let service = CatalogService::from_config(&remote_config(url)).unwrap();

    let err = service.load_views().await.unwrap_err();
    assert_eq!(err.table(), Some(TableName::Equipment));
    assert!(matches!(err, CatalogError::JoinIncomplete { .. }));
    assert!(matches!(
        err.root_cause(),
        CatalogError::SourceUnavailable { .. }
    ));
}

#[tokio::test]
async fn test_sheet_source_loads_single_table() {
    let url = serve(join_tables()).await;
    let source = SheetExportSource::new(&url, Duration::from_secs(5)).unwrap();

    let rows = source.load(TableName::Prices).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("Periodo"), Some("Meio dia"));
    assert_eq!(rows[1].get("Preco(AOA)"), Some("45000"));
}

#[tokio::test]
async fn test_unreachable_origin_is_source_unavailable() {
    // Bind then drop to get a port with nothing listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source =
        SheetExportSource::new(&format!("http://{}/pub", addr), Duration::from_secs(2)).unwrap();
    let err = source.load(TableName::Spaces).await.unwrap_err();
    assert!(matches!(err, CatalogError::SourceUnavailable { table: TableName::Spaces, .. }));
}

//! Integration test for the health check endpoint.

mod common;

use axum::http::StatusCode;
use common::{expect_json, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_check(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/health").await;
    let json = expect_json(response, StatusCode::OK).await;

    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert!(json["version"].is_string());
}

//! HTTP-level integration tests for the `/users` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, expect_json, get, post_json, put_json};
use sqlx::PgPool;

/// End-to-end user creation: 200, matching email, and a hashed senha.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "nome": "Teste",
        "email": "teste@jest.com",
        "senha": "123456"
    });
    let response = post_json(app, "/users", body).await;
    let json = expect_json(response, StatusCode::OK).await;

    assert_eq!(json["message"], "Usuário criado!");
    assert_eq!(json["user"]["email"], "teste@jest.com");
    assert_ne!(json["user"]["senha"], "123456");
}

/// GET /users returns a raw array of all rows.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_users(pool: PgPool) {
    let app = common::build_test_app(pool);

    for i in 0..3 {
        let body = serde_json::json!({
            "nome": format!("User {i}"),
            "email": format!("user{i}@example.com"),
            "senha": "123456"
        });
        let response = post_json(app.clone(), "/users", body).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get(app, "/users").await;
    let json = expect_json(response, StatusCode::OK).await;

    let users = json.as_array().expect("list must be a raw array");
    assert_eq!(users.len(), 3);
    assert_eq!(users[0]["email"], "user0@example.com");
}

/// PUT applies only the supplied fields; the rest are left untouched.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_partial_update(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "nome": "Original",
        "email": "original@example.com",
        "senha": "123456"
    });
    let response = post_json(app.clone(), "/users", body).await;
    let created = expect_json(response, StatusCode::OK).await;
    let id = created["user"]["id"].as_i64().expect("id must be numeric");
    let senha_hash = created["user"]["senha"].clone();

    let patch = serde_json::json!({ "nome": "Renomeado" });
    let response = put_json(app.clone(), &format!("/users/{id}"), patch).await;
    let json = expect_json(response, StatusCode::OK).await;
    assert_eq!(json["message"], "Usuário atualizado!");

    let response = get(app, "/users").await;
    let users = body_json(response).await;
    assert_eq!(users[0]["nome"], "Renomeado");
    assert_eq!(users[0]["email"], "original@example.com");
    assert_eq!(users[0]["senha"], senha_hash, "senha must not change without input");
}

/// Deleting a nonexistent id reports the same success message as deleting an
/// existing one.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_is_idempotent_looking(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "nome": "Descartável",
        "email": "descartavel@example.com",
        "senha": "123456"
    });
    let response = post_json(app.clone(), "/users", body).await;
    let created = expect_json(response, StatusCode::OK).await;
    let id = created["user"]["id"].as_i64().expect("id must be numeric");

    let response = delete(app.clone(), &format!("/users/{id}")).await;
    let existing = expect_json(response, StatusCode::OK).await;

    let response = delete(app, "/users/999999").await;
    let missing = expect_json(response, StatusCode::OK).await;

    assert_eq!(existing, missing);
    assert_eq!(existing["message"], "Usuário deletado!");
}

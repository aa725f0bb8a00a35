//! HTTP-level integration tests for registration and login.

mod common;

use axum::http::StatusCode;
use common::{body_json, expect_json, post_json};
use sqlx::PgPool;

/// Registration stores a bcrypt hash, never the plaintext password.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_cadastro_hashes_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "nome": "Maria",
        "email": "maria@example.com",
        "senha": "segredo123"
    });
    let response = post_json(app, "/cadastro", body).await;
    let json = expect_json(response, StatusCode::OK).await;

    assert_eq!(json["message"], "Usuário cadastrado!");
    assert_eq!(json["user"]["email"], "maria@example.com");

    let senha = json["user"]["senha"].as_str().expect("senha must be present");
    assert_ne!(senha, "segredo123", "stored senha must not be the plaintext");
    assert!(senha.starts_with("$2"), "stored senha must be a bcrypt hash");
}

/// A registered user can log in with the same plaintext password.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_cadastro_then_login(pool: PgPool) {
    let app = common::build_test_app(pool);

    let cadastro = serde_json::json!({
        "nome": "João",
        "email": "joao@example.com",
        "senha": "minha-senha"
    });
    let response = post_json(app.clone(), "/cadastro", cadastro).await;
    assert_eq!(response.status(), StatusCode::OK);

    let login = serde_json::json!({ "email": "joao@example.com", "senha": "minha-senha" });
    let response = post_json(app, "/login", login).await;
    let json = expect_json(response, StatusCode::OK).await;

    assert_eq!(json["message"], "Login realizado com sucesso!");
    assert_eq!(json["user"]["email"], "joao@example.com");
}

/// Unknown email and wrong password fail identically: same 401 status, same
/// body, so responses cannot be used to enumerate registered emails.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_failures_are_indistinguishable(pool: PgPool) {
    let app = common::build_test_app(pool);

    let cadastro = serde_json::json!({
        "nome": "Ana",
        "email": "ana@example.com",
        "senha": "correta"
    });
    let response = post_json(app.clone(), "/cadastro", cadastro).await;
    assert_eq!(response.status(), StatusCode::OK);

    let wrong_password =
        serde_json::json!({ "email": "ana@example.com", "senha": "errada" });
    let response = post_json(app.clone(), "/login", wrong_password).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let wrong_password_body = body_json(response).await;

    let unknown_email =
        serde_json::json!({ "email": "ninguem@example.com", "senha": "correta" });
    let response = post_json(app, "/login", unknown_email).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let unknown_email_body = body_json(response).await;

    assert_eq!(wrong_password_body, unknown_email_body);
    assert_eq!(wrong_password_body["error"], "Credenciais inválidas");
}

/// Registering the same email twice trips the unique constraint and is
/// reported with the standard 400 envelope.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_cadastro_duplicate_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "nome": "Pedro",
        "email": "pedro@example.com",
        "senha": "123456"
    });
    let response = post_json(app.clone(), "/cadastro", body.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(app, "/cadastro", body).await;
    let json = expect_json(response, StatusCode::BAD_REQUEST).await;

    assert_eq!(json["error"], "Erro ao cadastrar usuário");
    assert!(json["details"].is_string(), "details must carry the raw error");
}

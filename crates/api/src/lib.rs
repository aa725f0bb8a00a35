//! HTTP API for the eventos backend.
//!
//! Exposes the REST surface (auth, users, desenvolvedores, projetos, eventos,
//! galeria_eventos) plus static serving of uploaded images under `/uploads`.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod upload;

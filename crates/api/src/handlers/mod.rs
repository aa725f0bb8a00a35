pub mod auth;
pub mod developer;
pub mod event;
pub mod gallery;
pub mod project;
pub mod user;

//! Routes for [axum::Router].

pub mod email;
pub mod fallback;
pub mod health;
pub mod ping;

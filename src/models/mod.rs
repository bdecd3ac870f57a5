//! Data models used by route handlers.

pub mod verification_email;

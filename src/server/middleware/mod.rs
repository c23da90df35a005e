//! Request guards used by controllers.

pub mod auth;

//! Domain models and operation parameters.
//!
//! Repositories convert entity rows into these types and services pass them around;
//! `into_dto()` methods produce the wire format at the controller boundary.

pub mod admin;
pub mod comment;
pub mod course;
pub mod engagement;
pub mod project;
pub mod resource;
pub mod tool;
pub mod user;

//! Request and response DTOs.
//!
//! These types define the JSON wire format of the API. Server-side domain models convert
//! into them with `into_dto()` right before a controller responds.

pub mod admin;
pub mod api;
pub mod auth;
pub mod comment;
pub mod course;
pub mod engagement;
pub mod project;
pub mod tool;
pub mod upload;
pub mod user;

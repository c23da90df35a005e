pub mod admin;
pub mod auth;
pub mod comment;
pub mod course;
pub mod engagement;
pub mod project;
pub mod tool;
pub mod upload;
pub mod user;

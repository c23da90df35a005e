//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They validate input, enforce
//! ownership and visibility rules, coordinate several repositories where one operation
//! spans them, and translate repository `None`s into the right `AppError`. They work with
//! domain models; controllers convert the results into DTOs.

pub mod admin;
pub mod auth;
pub mod comment;
pub mod course;
pub mod engagement;
pub mod project;
pub mod resource;
pub mod tool;
pub mod upload;
pub mod user;

#[cfg(test)]
mod test;

//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each domain
//! in the application. Repositories use SeaORM entity models internally and return domain
//! models to keep the data layer separate from business logic. Operations that must change
//! several rows atomically (marks and their counters, replies and `reply_total`, status
//! changes and their log) open their own transaction.

pub mod comment;
pub mod course;
pub mod engagement;
pub mod project;
pub mod resource;
pub mod tool;
pub mod user;

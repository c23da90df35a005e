mod admin;
mod auth;
mod comment;
mod course;
mod engagement;
mod user;

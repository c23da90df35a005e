pub mod image;
pub mod jwt;
pub mod parse;
pub mod password;

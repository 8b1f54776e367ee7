//! Application services: parsing documents and rendering them.

pub mod error;
pub mod parser;
pub mod render;

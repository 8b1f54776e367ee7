//! Domain layer: the block model and the invariants its payloads carry.

pub mod blocks;
pub mod document;
pub mod error;
pub mod registry;
pub mod sanitize;

// Public library interface for treemap-rs
// The debug-layout binary and the property tests use the core modules through this

pub mod layout;
pub mod render;
pub mod tree;

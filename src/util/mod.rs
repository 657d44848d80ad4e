// Dropspot - util/mod.rs
//
// Cross-cutting utilities: named constants, typed errors, logging init.
// Must not depend on app, ui, or platform.

pub mod constants;
pub mod error;
pub mod logging;

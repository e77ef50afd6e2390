// Shared setup for the integration tests. Each test crate pulls this in via
// `#[path]`, so not every helper is used everywhere.
#![allow(dead_code, unused_imports)]

pub mod helpers;

pub use helpers::*;

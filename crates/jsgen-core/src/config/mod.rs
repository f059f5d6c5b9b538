//! User-level configuration

mod defaults;

pub use defaults::{ScaffoldDefaults, DEFAULTS_ENV};

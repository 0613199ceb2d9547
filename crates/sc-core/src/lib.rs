//! sc-core - Core library for shardcheck
//!
//! This crate provides the compatibility-matrix configuration (versioned,
//! inheritable feature registry), the `Feature` type shared by all
//! classifiers, and the cross-statement object dependency registry.

pub mod compat;
pub mod error;
pub mod feature;
pub mod object;

pub use compat::{CompatConfig, CompatMatrix};
pub use error::{ConfigError, CoreResult};
pub use feature::Feature;
pub use object::{ObjectName, ObjectRegistry};

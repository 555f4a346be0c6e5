//! Domain layer for secret detection

pub mod value_objects;

pub use value_objects::{SecretRule, SecretType};

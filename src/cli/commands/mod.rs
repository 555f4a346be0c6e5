//! CLI Commands Module

pub mod analyze;

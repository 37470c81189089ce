//! CLI commands

pub mod catalog;
pub mod lookup;
pub mod models;
pub mod plans;

//! CRUD Core
//!
//! Layered the same way for every resource:
//! - domain: entities, drafts, errors and post-mutation navigation
//! - forms: editable local state that turns into drafts
//! - repository: REST access over a pluggable transport

pub mod config;
pub mod domain;
pub mod forms;
pub mod repository;

pub use config::ApiConfig;
pub use domain::{ApiError, ApiResult, Entity, Navigation};

//! Application layer: the operations a table UI binds to.
//!
//! Services consume the [`crate::domain::repositories::ArtworkRepository`]
//! trait; the table controller owns the view state and drives the services.
//!
//! # Available Components
//!
//! - [`services::selection_service::SelectionService`] - Page fetches and cross-page "select first N"
//! - [`table::TableController`] - View state with stale-result protection

pub mod services;
pub mod table;

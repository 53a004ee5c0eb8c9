//! Business logic services for the application layer.

pub mod selection_service;

pub use selection_service::SelectionService;

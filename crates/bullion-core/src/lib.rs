//! Core library for the Rock International Bullion site.
//!
//! Contains the lead form controller, the catalog and spot price fetchers,
//! the backend client trait with its HTTP and in-memory implementations,
//! navigation shell state, and the static site content. Nothing here knows
//! about HTML or serving requests.

pub mod api;
pub mod catalog;
pub mod content;
pub mod error;
pub mod form;
pub mod lifecycle;
pub mod model;
pub mod nav;
pub mod stub;

pub use api::{ApiConfig, BullionApi, HttpApi};
pub use catalog::{Catalog, CatalogStore, ProductSource};
pub use error::{ApiError, FailureKind};
pub use form::{FormState, LeadFormController, SubmitOutcome};
pub use lifecycle::{Mount, Scope};
pub use model::{LeadField, LeadForm, Product, SpotPrice, SubmissionStatus};

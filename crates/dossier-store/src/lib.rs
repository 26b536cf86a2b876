//! Record stores and catalog data sources.

pub mod catalog;
pub mod csv;
pub mod error;
pub mod store;

pub use crate::csv::load_csv;
pub use error::{Result, StoreError};
pub use store::RecordStore;

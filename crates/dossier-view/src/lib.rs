//! Collection-view pipeline over in-memory catalog records.
//!
//! Takes an ordered sequence of flat records plus a per-view [`ViewState`]
//! and produces a filtered, sorted, optionally grouped [`DerivedView`]. The
//! whole pipeline is pure and synchronous; catalogs are small enough that a
//! full re-projection per interaction is the right design.
//!
//! [`ViewState`]: dossier_model::ViewState

pub mod comparator;
pub mod error;
pub mod grouper;
pub mod predicate;
pub mod projector;

pub use comparator::Comparator;
pub use error::{Result, ViewError};
pub use grouper::{Group, group_records};
pub use predicate::Predicate;
pub use projector::{DerivedView, project};

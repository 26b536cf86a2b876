pub mod enums;
pub mod error;
pub mod ids;
pub mod record;
pub mod schema;
pub mod value;
pub mod view_state;

pub use enums::{AffiliationKind, Classification, DocumentType, Severity};
pub use error::{ModelError, Result};
pub use ids::{FieldName, RecordId};
pub use record::Record;
pub use schema::{FieldKind, FieldSpec, Schema};
pub use value::FieldValue;
pub use view_state::{Direction, ViewMode, ViewState};

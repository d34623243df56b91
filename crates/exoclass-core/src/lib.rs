//! Core prediction model and the pure transformations applied to it before display.

mod error;
pub mod identifier;
pub mod record;
pub mod session;
pub mod summary;
pub mod transform;

pub use error::{ParseOptionError, ValidationError};
pub use identifier::resolve_identifier;
pub use record::{PredictedClass, PredictionRecord, ResultSet};
pub use session::Session;
pub use summary::Summary;
pub use transform::{ClassFilter, ConfidenceSort, ViewState, transform};

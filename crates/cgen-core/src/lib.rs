pub mod error;
pub mod language;
pub mod naming;

pub use error::{LanguageError, NameError};
pub use language::Language;
pub use naming::{to_camel_case, to_dash_case, validate, ComponentName};

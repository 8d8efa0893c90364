//! Component file generation.
//!
//! Renders the logic, template and style files for a component and writes
//! them into a fresh directory through a [`FileSystem`].

pub mod emitter;
pub mod error;
pub mod fs;
pub mod templates;

pub use emitter::{Artifact, ComponentEmitter};
pub use error::EmitError;
pub use fs::{FileSystem, OsFileSystem};
pub use templates::{render_component, GeneratedFile};

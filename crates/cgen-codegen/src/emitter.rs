use std::io;
use std::path::{Path, PathBuf};

use cgen_core::{ComponentName, Language};
use tracing::debug;

use crate::error::EmitError;
use crate::fs::{FileSystem, OsFileSystem};
use crate::templates::render_component;

/// Something created on disk during generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    Directory(PathBuf),
    File(PathBuf),
}

impl Artifact {
    pub fn path(&self) -> &Path {
        match self {
            Artifact::Directory(path) | Artifact::File(path) => path,
        }
    }
}

/// Writes a component's files into a new directory.
pub struct ComponentEmitter<F = OsFileSystem> {
    fs: F,
}

impl<F: FileSystem> ComponentEmitter<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Create `base_dir/<folder name>` and write the component files into it.
    ///
    /// `on_created` is called once per artifact in creation order. Nothing is
    /// rolled back if a later write fails.
    pub fn create(
        &self,
        base_dir: &Path,
        name: &ComponentName,
        language: Language,
        mut on_created: impl FnMut(&Artifact),
    ) -> Result<PathBuf, EmitError> {
        let component_dir = base_dir.join(name.folder_name());

        if self.fs.exists(&component_dir) {
            return Err(EmitError::AlreadyExists(component_dir));
        }

        self.fs.create_dir(&component_dir).map_err(|e| {
            if e.kind() == io::ErrorKind::AlreadyExists {
                EmitError::AlreadyExists(component_dir.clone())
            } else {
                EmitError::Io(e)
            }
        })?;
        debug!(dir = %component_dir.display(), "Created component directory");
        on_created(&Artifact::Directory(component_dir.clone()));

        for file in render_component(name, language) {
            let path = component_dir.join(&file.file_name);
            self.fs.write_file(&path, &file.contents)?;
            debug!(file = %path.display(), bytes = file.contents.len(), "Wrote component file");
            on_created(&Artifact::File(path));
        }

        Ok(component_dir)
    }
}

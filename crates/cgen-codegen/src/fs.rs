//! Filesystem access used by the emitter.

use std::io;
use std::path::Path;

/// The filesystem operations component generation needs.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    /// Create a single directory. Fails if it already exists.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir(path)
    }

    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }
}

#[cfg(test)]
pub use memory::MemoryFileSystem;


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_os_create_dir_and_write() {
        let dir = tempdir().unwrap();
        let fs = OsFileSystem;
        let target = dir.path().join("widget");

        assert!(!fs.exists(&target));
        fs.create_dir(&target).unwrap();
        assert!(fs.exists(&target));

        let file = target.join("a.txt");
        fs.write_file(&file, "hello").unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "hello");
    }

    #[test]
    fn test_os_create_dir_fails_when_present() {
        let dir = tempdir().unwrap();
        let err = OsFileSystem.create_dir(dir.path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_memory_fs() {
        let fs = MemoryFileSystem::new().with_dir("/base");
        assert!(fs.exists(Path::new("/base")));
        assert!(fs.create_dir(Path::new("/base")).is_err());

        fs.write_file(Path::new("/base/x"), "1").unwrap();
        assert_eq!(fs.read(Path::new("/base/x")).as_deref(), Some("1"));
    }
}

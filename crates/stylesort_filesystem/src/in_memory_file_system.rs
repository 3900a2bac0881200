use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::FileSystem;

/// In-memory implementation of [`FileSystem`] for testing
///
/// Relative paths are resolved against a settable current working directory,
/// which defaults to `/`.
#[derive(Debug)]
pub struct InMemoryFileSystem {
  files: RwLock<HashMap<PathBuf, String>>,
  cwd: RwLock<PathBuf>,
}

impl Default for InMemoryFileSystem {
  fn default() -> Self {
    Self {
      files: RwLock::new(HashMap::new()),
      cwd: RwLock::new(PathBuf::from("/")),
    }
  }
}

impl InMemoryFileSystem {
  pub fn write_file(&self, path: &Path, contents: String) {
    let path = self.absolute(path);
    self.files.write().insert(path, contents);
  }

  pub fn set_current_working_directory(&self, cwd: &Path) {
    let cwd = self.absolute(cwd);
    *self.cwd.write() = cwd;
  }

  /// Resolves `.` and `..` components against the current working directory
  fn absolute(&self, path: &Path) -> PathBuf {
    let path = if path.is_absolute() {
      path.to_path_buf()
    } else {
      self.cwd.read().join(path)
    };

    let mut result = PathBuf::new();
    for component in path.components() {
      match component {
        Component::CurDir => {}
        Component::ParentDir => {
          result.pop();
        }
        component => result.push(component),
      }
    }

    result
  }
}

impl FileSystem for InMemoryFileSystem {
  fn cwd(&self) -> std::io::Result<PathBuf> {
    Ok(self.cwd.read().clone())
  }

  fn canonicalize_base(&self, path: &Path) -> std::io::Result<PathBuf> {
    Ok(self.absolute(path))
  }

  fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
    self.read_to_string(path).map(String::into_bytes)
  }

  fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
    let path = self.absolute(path);
    self.files.read().get(&path).cloned().ok_or_else(|| {
      std::io::Error::new(
        std::io::ErrorKind::NotFound,
        format!("File not found: {}", path.display()),
      )
    })
  }

  fn is_file(&self, path: &Path) -> bool {
    let path = self.absolute(path);
    self.files.read().contains_key(&path)
  }

  fn is_dir(&self, path: &Path) -> bool {
    let path = self.absolute(path);
    let files = self.files.read();
    files.keys().any(|file| file.starts_with(&path) && file != &path)
  }
}

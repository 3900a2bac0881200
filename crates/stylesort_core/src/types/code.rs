use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::Utf8Error;

/// The source contents of an [`crate::types::Asset`]
#[derive(Clone, Default, Eq, Hash, PartialEq)]
pub struct Code {
  inner: Vec<u8>,
}

impl Code {
  pub fn bytes(&self) -> &[u8] {
    &self.inner
  }

  pub fn as_str(&self) -> Result<&str, Utf8Error> {
    std::str::from_utf8(&self.inner)
  }

  pub fn size(&self) -> usize {
    self.inner.len()
  }
}

impl Debug for Code {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Code")
      .field("inner", &String::from_utf8_lossy(&self.inner))
      .finish()
  }
}

impl Display for Code {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", String::from_utf8_lossy(&self.inner))
  }
}

impl From<String> for Code {
  fn from(value: String) -> Self {
    Code {
      inner: value.into_bytes(),
    }
  }
}

impl From<&str> for Code {
  fn from(value: &str) -> Self {
    Code {
      inner: value.as_bytes().to_vec(),
    }
  }
}

impl From<Vec<u8>> for Code {
  fn from(inner: Vec<u8>) -> Self {
    Code { inner }
  }
}

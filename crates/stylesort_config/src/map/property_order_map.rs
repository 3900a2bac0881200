use std::cmp::Ordering;

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// Placement of properties that are absent from the ordering table
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnspecifiedPosition {
  Top,
  #[default]
  Bottom,
}

/// Rank of a property name within a [`PropertyOrderMap`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PropertyRank {
  /// Zero-based position of the name in the declared sequence
  Specified(usize),
  /// The name is absent from the table and takes the configured
  /// unspecified position
  Unspecified,
}

/// A total preference order over CSS property names
///
/// Earlier entries sort first. The map is built once at configuration load
/// and immutable afterwards, so it can be shared across threads behind an
/// `Arc` without synchronization.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyOrderMap {
  inner: IndexMap<String, usize>,
  unspecified_position: UnspecifiedPosition,
}

impl PropertyOrderMap {
  /// Builds the map from a declared sequence of property names
  ///
  /// A name that appears more than once keeps the position of its first
  /// occurrence; later occurrences are dropped. Names are matched
  /// ASCII-case-insensitively.
  pub fn new<I, S>(names: I, unspecified_position: UnspecifiedPosition) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut inner = IndexMap::new();

    for (position, name) in names.into_iter().enumerate() {
      match inner.entry(name.as_ref().to_ascii_lowercase()) {
        Entry::Occupied(entry) => {
          tracing::warn!(
            "Duplicate property {} in properties-order, keeping earlier position {}",
            entry.key(),
            entry.get()
          );
        }
        Entry::Vacant(entry) => {
          entry.insert(position);
        }
      }
    }

    PropertyOrderMap {
      inner,
      unspecified_position,
    }
  }

  /// Returns the rank of `name`; never errors, unlisted names rank
  /// [`PropertyRank::Unspecified`]
  pub fn rank(&self, name: &str) -> PropertyRank {
    match self.position(name) {
      Some(position) => PropertyRank::Specified(position),
      None => PropertyRank::Unspecified,
    }
  }

  /// Total order over property names derived from [`Self::rank`] and the
  /// unspecified position
  ///
  /// Two unlisted names, or two names sharing a position, compare `Equal`;
  /// a stable sort on the consumer side then preserves their source order.
  pub fn compare(&self, a: &str, b: &str) -> Ordering {
    self.weight(a).cmp(&self.weight(b))
  }

  pub fn unspecified_position(&self) -> UnspecifiedPosition {
    self.unspecified_position
  }

  /// Number of distinct names in the table
  pub fn len(&self) -> usize {
    self.inner.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }

  fn position(&self, name: &str) -> Option<usize> {
    if name.bytes().any(|byte| byte.is_ascii_uppercase()) {
      self.inner.get(name.to_ascii_lowercase().as_str()).copied()
    } else {
      self.inner.get(name).copied()
    }
  }

  fn weight(&self, name: &str) -> (u8, usize) {
    match (self.rank(name), self.unspecified_position) {
      (PropertyRank::Specified(position), UnspecifiedPosition::Bottom) => (0, position),
      (PropertyRank::Unspecified, UnspecifiedPosition::Bottom) => (1, 0),
      (PropertyRank::Unspecified, UnspecifiedPosition::Top) => (0, 0),
      (PropertyRank::Specified(position), UnspecifiedPosition::Top) => (1, position),
    }
  }
}

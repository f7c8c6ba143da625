//! Named items and the append-only lists that hold them.
//!
//! A [`NamedItem`] is a bounded-length name. The same representation is used
//! for compiler flags ([`Flag`]) and for source or dependency files
//! ([`Object`]); an [`ItemList`] keeps them in insertion order.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::consts::NAME_CAPACITY;
use crate::util::bounded;

/// Errors raised when creating or appending a named item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
  /// The name does not fit in the item's capacity.
  #[error("name is {len} bytes long, at most {max} allowed: {name:?}")]
  TooLong { name: String, len: usize, max: usize },
}

/// A bounded-length name: a compiler flag or a file path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NamedItem(String);

/// A compiler switch such as `-Wall`.
pub type Flag = NamedItem;

/// A source, object or dependency file.
pub type Object = NamedItem;

impl NamedItem {
  /// Create an item with the default [`NAME_CAPACITY`].
  pub fn new(name: impl Into<String>) -> Result<Self, ItemError> {
    Self::with_capacity(name, NAME_CAPACITY)
  }

  /// Create an item bounded by `capacity` bytes, terminator included.
  pub fn with_capacity(name: impl Into<String>, capacity: usize) -> Result<Self, ItemError> {
    let name = name.into();
    if !bounded::fits(&name, capacity) {
      return Err(ItemError::TooLong {
        len: name.len(),
        max: bounded::max_len(capacity),
        name,
      });
    }
    Ok(NamedItem(name))
  }

  pub fn name(&self) -> &str {
    &self.0
  }

  pub fn into_name(self) -> String {
    self.0
  }
}

impl fmt::Display for NamedItem {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl AsRef<str> for NamedItem {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl TryFrom<&str> for NamedItem {
  type Error = ItemError;

  fn try_from(name: &str) -> Result<Self, Self::Error> {
    NamedItem::new(name)
  }
}

impl TryFrom<String> for NamedItem {
  type Error = ItemError;

  fn try_from(name: String) -> Result<Self, Self::Error> {
    NamedItem::new(name)
  }
}

/// An ordered, append-only sequence of named items.
///
/// Appends validate the name before touching the list, so a failed append
/// leaves the list exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ItemList {
  items: Vec<NamedItem>,
  #[serde(skip)]
  capacity: usize,
}

impl Default for ItemList {
  fn default() -> Self {
    Self::new()
  }
}

impl ItemList {
  pub fn new() -> Self {
    Self::with_item_capacity(NAME_CAPACITY)
  }

  /// Create an empty list whose appended names are bounded by `capacity`.
  pub fn with_item_capacity(capacity: usize) -> Self {
    Self {
      items: Vec::new(),
      capacity,
    }
  }

  /// Build a list from names, stopping at the first one that does not fit.
  ///
  /// No partial list is returned on failure.
  pub fn try_from_names<I, S>(names: I) -> Result<Self, ItemError>
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let mut list = Self::new();
    for name in names {
      list.append(name)?;
    }
    Ok(list)
  }

  /// Copy `name` into a new item at the tail of the list.
  pub fn append(&mut self, name: impl Into<String>) -> Result<(), ItemError> {
    let item = NamedItem::with_capacity(name, self.capacity)?;
    self.items.push(item);
    Ok(())
  }

  /// Append an existing item, checked against this list's capacity.
  ///
  /// An item built with a larger capacity than the list's is rejected and the
  /// list is left unchanged.
  pub fn push(&mut self, item: NamedItem) -> Result<(), ItemError> {
    self.check(&item)?;
    self.items.push(item);
    Ok(())
  }

  /// Append every item, or none of them if any exceeds the list's capacity.
  pub fn try_extend<I>(&mut self, items: I) -> Result<(), ItemError>
  where
    I: IntoIterator<Item = NamedItem>,
  {
    let items: Vec<NamedItem> = items.into_iter().collect();
    for item in &items {
      self.check(item)?;
    }
    self.items.extend(items);
    Ok(())
  }

  fn check(&self, item: &NamedItem) -> Result<(), ItemError> {
    if bounded::fits(item.name(), self.capacity) {
      return Ok(());
    }
    Err(ItemError::TooLong {
      name: item.name().to_string(),
      len: item.name().len(),
      max: bounded::max_len(self.capacity),
    })
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn first(&self) -> Option<&NamedItem> {
    self.items.first()
  }

  pub fn get(&self, index: usize) -> Option<&NamedItem> {
    self.items.get(index)
  }

  pub fn iter(&self) -> std::slice::Iter<'_, NamedItem> {
    self.items.iter()
  }

  /// Iterate over the names as string slices.
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.items.iter().map(NamedItem::name)
  }
}

impl IntoIterator for ItemList {
  type Item = NamedItem;
  type IntoIter = std::vec::IntoIter<NamedItem>;

  fn into_iter(self) -> Self::IntoIter {
    self.items.into_iter()
  }
}

impl<'a> IntoIterator for &'a ItemList {
  type Item = &'a NamedItem;
  type IntoIter = std::slice::Iter<'a, NamedItem>;

  fn into_iter(self) -> Self::IntoIter {
    self.items.iter()
  }
}

impl TryFrom<&[&str]> for ItemList {
  type Error = ItemError;

  fn try_from(names: &[&str]) -> Result<Self, Self::Error> {
    ItemList::try_from_names(names.iter().copied())
  }
}

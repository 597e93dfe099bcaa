use std::fmt::Display;

use crate::{error::CollectionsResult, make_collections_error};

struct Node<T> {
  data: T,
  next: Option<Box<Node<T>>>,
}

/// Singly-linked list of boxed nodes. Indexing operations walk the chain, so
/// they are O(n); this is a teaching structure, not a replacement for `Vec`.
pub struct LinkedList<T> {
  head: Option<Box<Node<T>>>,
  len: usize,
}

impl<T> LinkedList<T> {
  pub fn new() -> Self {
    Self { head: None, len: 0 }
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// The link (`Option<Box<Node>>` slot) preceding position idx, i.e. the
  /// slot whose contents is the idx'th node. Walks at most `idx` nodes; stops
  /// at the tail link if the list is shorter.
  fn link_at(&mut self, idx: usize) -> &mut Option<Box<Node<T>>> {
    let mut cur = &mut self.head;
    for _ in 0..idx {
      match cur {
        Some(node) => cur = &mut node.next,
        None => break,
      }
    }
    cur
  }

  pub fn push_front(&mut self, value: T) {
    self.head = Some(Box::new(Node {
      data: value,
      next: self.head.take(),
    }));
    self.len += 1;
  }

  pub fn push_back(&mut self, value: T) {
    let tail = self.link_at(self.len);
    *tail = Some(Box::new(Node {
      data: value,
      next: None,
    }));
    self.len += 1;
  }

  pub fn pop_front(&mut self) -> Option<T> {
    self.head.take().map(|node| {
      self.head = node.next;
      self.len -= 1;
      node.data
    })
  }

  pub fn front(&self) -> Option<&T> {
    self.head.as_ref().map(|node| &node.data)
  }

  /// Inserts value so that it becomes the element at position idx. idx may
  /// equal the length (append); anything past that is an error.
  pub fn insert_at(&mut self, idx: usize, value: T) -> CollectionsResult {
    if idx > self.len {
      return Err(make_collections_error!(
        "insert index {idx} out of range for list of length {len}",
        len = self.len
      ));
    }
    let link = self.link_at(idx);
    let next = link.take();
    *link = Some(Box::new(Node { data: value, next }));
    self.len += 1;
    Ok(())
  }

  /// Removes and returns the element at position idx.
  pub fn remove_at(&mut self, idx: usize) -> CollectionsResult<T> {
    if idx >= self.len {
      return Err(make_collections_error!(
        "remove index {idx} out of range for list of length {len}",
        len = self.len
      ));
    }
    let link = self.link_at(idx);
    // Bounds were checked, so the link is occupied.
    match link.take() {
      Some(node) => {
        *link = node.next;
        self.len -= 1;
        Ok(node.data)
      }
      None => Err(make_collections_error!("list shorter than its length")),
    }
  }

  pub fn iter(&self) -> Iter<'_, T> {
    Iter {
      next: self.head.as_deref(),
    }
  }
}

impl<T: PartialEq> LinkedList<T> {
  /// Removes the first element equal to value, returning whether one was
  /// found.
  pub fn remove(&mut self, value: &T) -> bool {
    match self.iter().position(|v| v == value) {
      Some(idx) => self.remove_at(idx).is_ok(),
      None => false,
    }
  }

  pub fn contains(&self, value: &T) -> bool {
    self.iter().any(|v| v == value)
  }
}

impl<T> Default for LinkedList<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Drop for LinkedList<T> {
  fn drop(&mut self) {
    // Unlink iteratively; the default recursive drop would overflow the stack
    // on long lists.
    let mut cur = self.head.take();
    while let Some(mut node) = cur {
      cur = node.next.take();
    }
  }
}

impl<T> FromIterator<T> for LinkedList<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut list = Self::new();
    // Append through a tail cursor rather than push_back, which re-walks the
    // chain on every call.
    let mut tail = &mut list.head;
    for value in iter {
      let node = tail.insert(Box::new(Node {
        data: value,
        next: None,
      }));
      tail = &mut node.next;
      list.len += 1;
    }
    list
  }
}

pub struct Iter<'a, T> {
  next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<&'a T> {
    self.next.map(|node| {
      self.next = node.next.as_deref();
      &node.data
    })
  }
}

pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
  type Item = T;

  fn next(&mut self) -> Option<T> {
    self.0.pop_front()
  }
}

impl<T> IntoIterator for LinkedList<T> {
  type Item = T;
  type IntoIter = IntoIter<T>;

  fn into_iter(self) -> IntoIter<T> {
    IntoIter(self)
  }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  fn into_iter(self) -> Iter<'a, T> {
    self.iter()
  }
}

impl<T: Display> Display for LinkedList<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let mut first = true;
    for value in self {
      if !first {
        write!(f, " -> ")?;
      }
      write!(f, "{value}")?;
      first = false;
    }
    Ok(())
  }
}

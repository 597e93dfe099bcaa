/// LIFO stack over a growable array. Underflow surfaces as `None` rather
/// than a panic.
pub struct Stack<T> {
  data: Vec<T>,
}

impl<T> Stack<T> {
  pub fn new() -> Self {
    Self { data: Vec::new() }
  }

  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      data: Vec::with_capacity(capacity),
    }
  }

  pub fn push(&mut self, value: T) {
    self.data.push(value);
  }

  pub fn pop(&mut self) -> Option<T> {
    self.data.pop()
  }

  pub fn top(&self) -> Option<&T> {
    self.data.last()
  }

  pub fn len(&self) -> usize {
    self.data.len()
  }

  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }
}

impl<T> Default for Stack<T> {
  fn default() -> Self {
    Self::new()
  }
}

struct Node<T> {
  data: T,
  next: Option<Box<Node<T>>>,
}

/// The same LIFO interface over boxed nodes, for comparison against the
/// array-backed version: no amortized reallocation, one allocation per push.
pub struct LinkedStack<T> {
  top: Option<Box<Node<T>>>,
  len: usize,
}

impl<T> LinkedStack<T> {
  pub fn new() -> Self {
    Self { top: None, len: 0 }
  }

  pub fn push(&mut self, value: T) {
    self.top = Some(Box::new(Node {
      data: value,
      next: self.top.take(),
    }));
    self.len += 1;
  }

  pub fn pop(&mut self) -> Option<T> {
    self.top.take().map(|node| {
      self.top = node.next;
      self.len -= 1;
      node.data
    })
  }

  pub fn top(&self) -> Option<&T> {
    self.top.as_ref().map(|node| &node.data)
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }
}

impl<T> Default for LinkedStack<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Drop for LinkedStack<T> {
  fn drop(&mut self) {
    // Unlink iteratively to keep drop of a deep stack off the call stack.
    let mut cur = self.top.take();
    while let Some(mut node) = cur {
      cur = node.next.take();
    }
  }
}

#[cfg(test)]
mod tests {
  use googletest::{expect_eq, expect_that, gtest, prelude::*};

  use crate::{LinkedStack, Stack};

  #[gtest]
  fn test_push_pop_order() {
    let mut stack = Stack::new();
    stack.push(10);
    stack.push(20);
    stack.push(30);

    expect_eq!(stack.len(), 3);
    expect_that!(stack.top(), some(eq(&30)));
    expect_that!(stack.pop(), some(eq(30)));
    expect_that!(stack.pop(), some(eq(20)));
    expect_that!(stack.pop(), some(eq(10)));
    expect_that!(stack.pop(), none());
  }

  #[gtest]
  fn test_underflow() {
    let mut stack: Stack<i32> = Stack::new();
    expect_that!(stack.pop(), none());
    expect_that!(stack.top(), none());
    expect_that!(stack.is_empty(), eq(true));
  }

  #[gtest]
  fn test_linked_push_pop_order() {
    let mut stack = LinkedStack::new();
    stack.push("a");
    stack.push("b");

    expect_eq!(stack.len(), 2);
    expect_that!(stack.top(), some(eq(&"b")));
    expect_that!(stack.pop(), some(eq("b")));
    expect_that!(stack.pop(), some(eq("a")));
    expect_that!(stack.pop(), none());
    expect_that!(stack.is_empty(), eq(true));
  }

  #[test]
  fn test_linked_deep_drop() {
    let mut stack = LinkedStack::new();
    for i in 0..1_000_000 {
      stack.push(i);
    }
    drop(stack);
  }
}

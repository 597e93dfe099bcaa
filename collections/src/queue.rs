use std::ptr::null_mut;

struct Node<T> {
  data: T,
  next: Option<Box<Node<T>>>,
}

/// FIFO queue over a singly-linked chain, with a raw tail pointer for O(1)
/// enqueue.
///
/// Invariant: `tail` is null exactly when `head` is `None`, and otherwise
/// points at the last node of the chain owned (transitively) by `head`.
pub struct Queue<T> {
  head: Option<Box<Node<T>>>,
  tail: *mut Node<T>,
  len: usize,
}

impl<T> Queue<T> {
  pub fn new() -> Self {
    Self {
      head: None,
      tail: null_mut(),
      len: 0,
    }
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Adds value at the rear of the queue.
  pub fn enqueue(&mut self, value: T) {
    let mut node = Box::new(Node {
      data: value,
      next: None,
    });
    let node_ptr: *mut Node<T> = &mut *node;

    if self.tail.is_null() {
      self.head = Some(node);
    } else {
      // The tail pointer targets a node kept alive by the head chain.
      unsafe {
        (*self.tail).next = Some(node);
      }
    }
    self.tail = node_ptr;
    self.len += 1;
  }

  /// Removes and returns the value at the front of the queue.
  pub fn dequeue(&mut self) -> Option<T> {
    let node = self.head.take()?;
    self.head = node.next;
    if self.head.is_none() {
      self.tail = null_mut();
    }
    self.len -= 1;
    Some(node.data)
  }

  pub fn front(&self) -> Option<&T> {
    self.head.as_ref().map(|node| &node.data)
  }
}

impl<T> Default for Queue<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Drop for Queue<T> {
  fn drop(&mut self) {
    // Unlink iteratively; the default recursive drop would overflow the call
    // stack on long queues.
    let mut cur = self.head.take();
    while let Some(mut node) = cur {
      cur = node.next.take();
    }
  }
}

// The raw tail pointer aliases nothing outside the owned chain, so the queue
// is as thread-compatible as its elements.
unsafe impl<T: Send> Send for Queue<T> {}
unsafe impl<T: Sync> Sync for Queue<T> {}

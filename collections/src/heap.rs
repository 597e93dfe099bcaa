/// Max-oriented priority queue over an array-backed complete binary tree.
/// The element at index i has children at 2i + 1 and 2i + 2 and parent at
/// (i - 1) / 2; every parent compares >= its children.
pub struct PriorityQueue<T> {
  heap: Vec<T>,
}

impl<T: Ord> PriorityQueue<T> {
  pub fn new() -> Self {
    Self { heap: Vec::new() }
  }

  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      heap: Vec::with_capacity(capacity),
    }
  }

  pub fn len(&self) -> usize {
    self.heap.len()
  }

  pub fn is_empty(&self) -> bool {
    self.heap.is_empty()
  }

  /// The maximum element, without removing it.
  pub fn peek(&self) -> Option<&T> {
    self.heap.first()
  }

  /// Adds value in O(log n): append at the bottom, then swim it up until its
  /// parent is no smaller.
  pub fn insert(&mut self, value: T) {
    self.heap.push(value);
    self.swim(self.heap.len() - 1);
  }

  /// Removes and returns the maximum element in O(log n): swap the root with
  /// the last leaf, shrink, then sink the new root back down.
  pub fn pop_max(&mut self) -> Option<T> {
    if self.heap.is_empty() {
      return None;
    }
    let last = self.heap.len() - 1;
    self.heap.swap(0, last);
    let max = self.heap.pop();
    self.sink(0);
    max
  }

  /// Drains the queue in descending order.
  pub fn into_sorted_vec(mut self) -> Vec<T> {
    let mut result = Vec::with_capacity(self.len());
    while let Some(value) = self.pop_max() {
      result.push(value);
    }
    result
  }

  fn swim(&mut self, mut idx: usize) {
    while idx > 0 {
      let parent = (idx - 1) / 2;
      if self.heap[idx] <= self.heap[parent] {
        break;
      }
      self.heap.swap(idx, parent);
      idx = parent;
    }
  }

  fn sink(&mut self, mut idx: usize) {
    loop {
      let left = 2 * idx + 1;
      let right = 2 * idx + 2;
      let mut largest = idx;

      if left < self.heap.len() && self.heap[left] > self.heap[largest] {
        largest = left;
      }
      if right < self.heap.len() && self.heap[right] > self.heap[largest] {
        largest = right;
      }
      if largest == idx {
        break;
      }

      self.heap.swap(idx, largest);
      idx = largest;
    }
  }
}

impl<T: Ord> Default for PriorityQueue<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut queue = Self::new();
    for value in iter {
      queue.insert(value);
    }
    queue
  }
}

pub mod error;
mod heap;
mod linked_list;
mod queue;
mod stack;

pub use heap::*;
pub use linked_list::*;
pub use queue::*;
pub use stack::*;

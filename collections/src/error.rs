use std::{error::Error, fmt::Display};

#[derive(Debug)]
pub struct CollectionsError {
  message: String,
}

impl CollectionsError {
  pub fn new(message: String) -> Self {
    CollectionsError { message }
  }
}

impl Error for CollectionsError {}

impl Display for CollectionsError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "Error: {}", self.message)
  }
}

#[macro_export]
macro_rules! make_collections_error {
  ($($args:tt)+) => {
    $crate::error::CollectionsError::new(format!($($args)+)).into()
  };
}

pub type CollectionsResult<T = ()> = Result<T, Box<dyn Error + Send + Sync + 'static>>;

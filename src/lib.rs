#![doc = include_str!("../readme.md")]

pub mod geo;
pub mod track;
pub mod util;

#[doc(hidden)]
pub mod error;

#[doc(inline)]
pub use error::{Error, Result};

//! Haskell and Lisp flavoured helpers for iterators, pairs and text, plus a
//! bidirectional map.

pub mod accessor;
pub mod bimap;
pub mod error;
pub mod fold;
pub mod function;
pub mod list;
pub mod pair;
pub mod text;

pub use accessor::{field, index, Record};
pub use bimap::BiMap;
pub use error::KeyNotFound;

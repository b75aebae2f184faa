//! Safe SQL builder: identifiers from an allow-list only, values as parameters.

mod builder;
pub use builder::*;

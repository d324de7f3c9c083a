//! Typed models

mod artwork;
mod envelope;
mod nullable;

pub use artwork::*;
pub use envelope::*;

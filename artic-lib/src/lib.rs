//! Art Institute of Chicago API client library
//!
//! An async client for the public artworks catalog plus the page-state core
//! (paging, selection, loading and error state) that a table front end binds to.

pub mod api;
pub mod error;
pub mod model;
pub mod view;

mod client;

pub use client::*;
pub use error::Error;
pub use model::ArtworkRecord;

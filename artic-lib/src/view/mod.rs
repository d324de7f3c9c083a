//! Page-state core for a paginated, selectable artworks table.
//!
//! [`ArtworkView`] is the single source of truth a table renderer draws
//! from. It owns the displayed page, the selection and the loading/error
//! state, and it talks to the network only through a [`PageSource`].

mod selection;
mod source;
mod state;
mod table;

pub use selection::*;
pub use source::*;
pub use state::*;
pub use table::*;

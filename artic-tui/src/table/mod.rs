//! Artworks table widget: columns, presentation state, keys and rendering.

mod column;
mod events;
mod render;
mod state;

pub use column::*;
pub use events::*;
pub use render::*;
pub use state::*;

pub mod canvas;
pub mod detail_panel;
pub mod painter;
pub mod scene;
pub mod surface;

#[cfg(test)]
pub mod recording;

// Re-export specific items to keep the API clean for the rest of the app
pub use canvas::CairoCanvas;
pub use scene::{compute_placements, LayoutError, LayoutParams, PlacedTile};
pub use surface::Surface;

//! Presentation seam
//!
//! The simulation hands positions, visibility and strings to a [`Presenter`]
//! through a [`DrawList`]. Rasterizing sprites and text is the presenter's job.

pub mod assets;
pub mod draw;
pub mod log_presenter;

pub use assets::{SpriteAsset, SpriteShape, TextureHandle, TextureStore};
pub use draw::{CLEAR_COLOR, DrawCommand, DrawList, build_draw_list};
pub use log_presenter::LogPresenter;

/// Something that can show a frame
pub trait Presenter {
    /// Present one frame. `dt` is the (capped) time since the previous frame.
    fn present(&mut self, frame: &DrawList, dt: f32);
}

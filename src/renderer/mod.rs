//! 2D rendering module
//!
//! The scene is drawn through the `Surface` trait so it can be exercised without
//! a browser. `CanvasSurface` backs it with a `CanvasRenderingContext2d`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::render;

use glam::Vec2;

/// Drawing primitives the scene needs. Coordinates are canvas pixels, y down.
pub trait Surface {
    /// Erase the whole surface
    fn clear(&mut self, width: f32, height: f32);

    /// Solid rectangle
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);

    /// Rectangle filled with a top-to-bottom gradient. Stops are (offset 0..=1, color).
    fn fill_vertical_gradient(&mut self, x: f32, y: f32, w: f32, h: f32, stops: &[(f32, &str)]);

    /// Straight line segment
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: &str);
}

/// Scene colors
pub mod palette {
    pub const SKY_TOP: &str = "#87CEEB";
    pub const SKY_HAZE: &str = "#E0F6FF";
    pub const SAND: &str = "#C2B280";
    pub const GROUND_LINE: &str = "#8B7355";
    pub const OBSTACLE: &str = "#535353";
    pub const PLAYER: &str = "#1a73e8";

    /// Thickness of the ground line
    pub const GROUND_LINE_WIDTH: f32 = 3.0;
}

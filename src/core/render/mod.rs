//=========================================================================
// Render Surfaces
//=========================================================================
//
// Drawable targets the simulation paints into.
//
// Architecture:
// ```text
//   SurfaceRegistry ──bind(id)──> Box<dyn Surface> ──owned by──> SimulationEngine
//                                        │
//                                        ├─ clear()
//                                        ├─ fill_rect()
//                                        └─ present()   (frame boundary)
// ```
//
// A surface is resolved once, by string handle, when the engine is
// created. From then on the engine owns it exclusively.
//
//=========================================================================

//=== Module Declarations =================================================

mod canvas;
mod registry;

//=== Public API ==========================================================

pub use canvas::Canvas;
pub use registry::{BindingError, SurfaceRegistry};

//=== Color ===============================================================

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

//=== Surface Trait =======================================================

/// A pixel target that can be cleared, filled and read back.
///
/// Drawing calls outside the surface bounds are clipped, never rejected.
/// `present` marks the end of a frame; the engine calls it exactly once
/// per tick after a full redraw.
pub trait Surface: Send {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Color);

    /// Fills the axis-aligned rectangle at `(x, y)` of size `w × h`.
    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Color);

    /// Completes the current frame.
    fn present(&mut self);

    /// Number of frames completed so far.
    fn frames_presented(&self) -> u64;

    /// Reads a single pixel, `None` if out of bounds.
    fn pixel(&self, x: u32, y: u32) -> Option<Color>;
}

//=========================================================================
// Unit Tests
//=========================================================================

use glam::Vec2;

/// Scroll state of the surface.
///
/// The surface is usually larger than the element showing it; `offset` is the
/// surface point drawn at the element's top-left corner.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Viewport {
    pub offset: Vec2,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a point relative to the element origin to surface coordinates.
    pub fn screen_to_surface(&self, screen_point: Vec2) -> Vec2 {
        screen_point + self.offset
    }

    /// Convert a surface point to a point relative to the element origin.
    pub fn surface_to_screen(&self, surface_point: Vec2) -> Vec2 {
        surface_point - self.offset
    }

    /// Scroll by `delta`, keeping the visible region inside the surface.
    ///
    /// Wheel deltas are positive when content should move down/right, so the
    /// offset moves the opposite way.
    pub fn scroll_by(&mut self, delta: Vec2, surface_size: Vec2, view_size: Vec2) {
        let max = (surface_size - view_size).max(Vec2::ZERO);
        self.offset = (self.offset - delta).clamp(Vec2::ZERO, max);
    }

    /// Reset to the top-left corner.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
    }
}

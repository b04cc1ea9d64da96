//! Pointer-following highlight.

/// Horizontal reach in columns.
pub const RADIUS_X: u16 = 6;
/// Vertical reach in rows.
pub const RADIUS_Y: u16 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Glow {
    pointer: Option<(u16, u16)>,
}

impl Glow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pointer cell. Returns true if it moved.
    pub fn track(&mut self, column: u16, row: u16) -> bool {
        let moved = self.pointer != Some((column, row));
        self.pointer = Some((column, row));
        moved
    }

    pub fn clear(&mut self) {
        self.pointer = None;
    }

    pub fn pointer(&self) -> Option<(u16, u16)> {
        self.pointer
    }

    /// Intensity in `[0.0, 1.0]` at a cell, 1.0 under the pointer.
    ///
    /// Rows are scaled so the falloff is an ellipse matching the reach.
    pub fn intensity(&self, column: u16, row: u16) -> f32 {
        let Some((px, py)) = self.pointer else {
            return 0.0;
        };
        let dx = (column as f32 - px as f32) / (RADIUS_X as f32 + 1.0);
        let dy = (row as f32 - py as f32) / (RADIUS_Y as f32 + 1.0);
        let d = (dx * dx + dy * dy).sqrt();
        (1.0 - d).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_pointer_no_glow() {
        let g = Glow::new();
        assert_eq!(g.intensity(0, 0), 0.0);
    }

    #[test]
    fn test_falloff() {
        let mut g = Glow::new();
        assert!(g.track(10, 5));
        assert!(!g.track(10, 5));
        assert_eq!(g.intensity(10, 5), 1.0);
        assert!(g.intensity(12, 5) > g.intensity(14, 5));
        assert_eq!(g.intensity(10 + RADIUS_X + 1, 5), 0.0);
        assert_eq!(g.intensity(10, 5 + RADIUS_Y + 1), 0.0);
        assert_eq!(g.intensity(40, 20), 0.0);
    }

    #[test]
    fn test_clear() {
        let mut g = Glow::new();
        g.track(1, 1);
        g.clear();
        assert_eq!(g.pointer(), None);
        assert_eq!(g.intensity(1, 1), 0.0);
    }
}

use glam::Vec2;

/// Axis-aligned table box in window pixels (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub min: Vec2,
    pub max: Vec2,
}

impl Playfield {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        assert!(
            max.x > min.x && max.y > min.y,
            "playfield must have a positive area: {min} .. {max}"
        );
        Self { min, max }
    }

    /// Table inside a window, inset by the rim and nudged by the rim's drop shadow
    pub fn from_window(width: f32, height: f32, rim: f32, shadow_offset: f32) -> Self {
        Self::new(
            Vec2::new(rim + shadow_offset, rim + shadow_offset),
            Vec2::new(width - rim + shadow_offset, height - rim + shadow_offset),
        )
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Shrink every side by `margin`, e.g. half a sprite so its centre stays inside
    pub fn shrink(&self, margin: f32) -> Self {
        Self::new(self.min + Vec2::splat(margin), self.max - Vec2::splat(margin))
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn clamp(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_window_applies_rim_and_shadow() {
        let table = Playfield::from_window(1200.0, 900.0, 100.0, -5.0);
        assert_eq!(table.min, Vec2::new(95.0, 95.0));
        assert_eq!(table.max, Vec2::new(1095.0, 795.0));
        assert_eq!(table.width(), 1000.0);
        assert_eq!(table.height(), 700.0);
        assert_eq!(table.center(), Vec2::new(595.0, 445.0));
    }

    #[test]
    fn test_shrink_and_contains() {
        let table = Playfield::new(Vec2::ZERO, Vec2::new(100.0, 50.0)).shrink(7.5);
        assert_eq!(table.min, Vec2::splat(7.5));
        assert_eq!(table.max, Vec2::new(92.5, 42.5));
        assert!(table.contains(Vec2::new(50.0, 25.0)));
        assert!(!table.contains(Vec2::new(5.0, 25.0)));
        assert_eq!(table.clamp(Vec2::new(-3.0, 60.0)), Vec2::new(7.5, 42.5));
    }

    #[test]
    #[should_panic(expected = "positive area")]
    fn test_degenerate_playfield_panics() {
        Playfield::new(Vec2::new(10.0, 10.0), Vec2::new(10.0, 20.0));
    }
}

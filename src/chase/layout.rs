use std::f64::consts::PI;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("A ring needs at least 2 dots, got {0}")]
    TooFewDots(usize),
    #[error("Ring radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
    #[error("Dot radius must be positive and finite, got {0}")]
    InvalidDotRadius(f64),
}

/// Dot positions evenly spaced on a circle, index 0 at 12 o'clock and
/// increasing clockwise on screen (y grows downward).
#[derive(Debug, Clone)]
pub struct RingLayout {
    dot_count: usize,
    radius: f64,
    center: Point,
    positions: Vec<Point>,
}

impl RingLayout {
    pub fn new(dot_count: usize, radius: f64, center: Point) -> Result<Self, LayoutError> {
        if dot_count < 2 {
            return Err(LayoutError::TooFewDots(dot_count));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(LayoutError::InvalidRadius(radius));
        }

        let positions = (0..dot_count)
            .map(|i| Self::compute(i, dot_count, radius, center))
            .collect();

        Ok(Self {
            dot_count,
            radius,
            center,
            positions,
        })
    }

    pub fn angle(index: usize, dot_count: usize) -> f64 {
        2.0 * PI * (index % dot_count) as f64 / dot_count as f64 - PI / 2.0
    }

    fn compute(index: usize, dot_count: usize, radius: f64, center: Point) -> Point {
        let angle = Self::angle(index, dot_count);
        Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    }

    pub fn position_of(&self, index: usize) -> Point {
        self.positions[index % self.dot_count]
    }

    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    pub fn dot_count(&self) -> usize {
        self.dot_count
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> Point {
        self.center
    }
}

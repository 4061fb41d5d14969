//! Arena geometry: points, rectangles and the two spatial checks the
//! decision policy relies on.
//!
//! Coordinates are pixels. Radii handed to [`within_radius`] are meters and
//! are converted with [`PIXELS_PER_METER`].

/// 10 pixels per 30 cm.
pub const PIXELS_PER_METER: f64 = 10.0 / 0.3;

/// A position in arena pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance_squared(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Moves `distance` pixels along `angle` (radians, 0 = +x).
    #[inline]
    pub fn offset(self, angle: f64, distance: f64) -> Point {
        Point::new(
            self.x + distance * angle.cos(),
            self.y + distance * angle.sin(),
        )
    }

    /// Component-wise clamp into `bounds`.
    #[inline]
    pub fn clamp(self, bounds: Rect) -> Point {
        Point::new(
            self.x.max(bounds.min.x).min(bounds.max.x),
            self.y.max(bounds.min.y).min(bounds.max.y),
        )
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Axis-aligned rectangle given by its inclusive corners.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Rectangle anchored at the origin.
    pub const fn sized(width: f64, height: f64) -> Self {
        Self::new(Point::new(0.0, 0.0), Point::new(width, height))
    }

    /// Rectangle of half extent `half` around `center`.
    pub fn centered(center: Point, half: f64) -> Self {
        Self::new(
            Point::new(center.x - half, center.y - half),
            Point::new(center.x + half, center.y + half),
        )
    }

    /// Shrinks every side by `margin` pixels.
    pub fn shrink(self, margin: f64) -> Rect {
        Rect::new(
            Point::new(self.min.x + margin, self.min.y + margin),
            Point::new(self.max.x - margin, self.max.y - margin),
        )
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.min.x..=self.max.x).contains(&point.x) && (self.min.y..=self.max.y).contains(&point.y)
    }

    /// `false` when a shrink left no room (min past max on an axis).
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }
}

/// `true` when `a` and `b` are strictly closer than `radius_m` meters.
///
/// Compares squared distances, so no square root is taken.
#[inline]
pub fn within_radius(a: Point, b: Point, radius_m: f64) -> bool {
    let radius_px = radius_m * PIXELS_PER_METER;
    a.distance_squared(b) < radius_px * radius_px
}

/// Angle of the vector `from -> to`, in radians.
#[inline]
pub fn direction_angle(from: Point, to: Point) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

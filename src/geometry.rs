//! Points in 3-D space and Euclidean tour length.

use std::fmt;

/// A city: an immutable point in 3-D space.
///
/// Equality is by coordinate value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl City {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<(f64, f64, f64)> for City {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for City {
    /// Renders as `"x y z"`; integral coordinates print without a fraction.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

/// Euclidean distance between two cities.
pub fn distance(a: &City, b: &City) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let dz = b.z - a.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Length of the closed cycle visiting `cities` in iteration order,
/// including the edge from the last city back to the first.
///
/// Returns `None` for an empty sequence.
pub fn cycle_length<'a, I>(cities: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a City>,
{
    let mut iter = cities.into_iter();
    let first = iter.next()?;
    let mut prev = first;
    let mut total = 0.0;
    for city in iter {
        total += distance(prev, city);
        prev = city;
    }
    Some(total + distance(prev, first))
}

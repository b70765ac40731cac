use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A stamp position as a fraction of its container's width and height.
///
/// Nominally both components lie in `[0, 1]`, but a pointer held outside the capture region
/// produces points beyond that range and those are kept as-is.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, derive_more::Display)]
#[display("({x}, {y})")]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn to_vec2(self) -> DVec2 {
		DVec2::new(self.x, self.y)
	}
}

impl From<DVec2> for Point {
	fn from(value: DVec2) -> Self {
		Self::new(value.x, value.y)
	}
}

/// The viewport-space rectangle of a capture surface, used as the reference frame for normalizing
/// pointer positions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RegionBounds {
	origin: DVec2,
	size: DVec2,
}

impl RegionBounds {
	pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
		Self {
			origin: DVec2::new(left, top),
			size: DVec2::new(width, height),
		}
	}

	pub fn left(&self) -> f64 {
		self.origin.x
	}

	pub fn top(&self) -> f64 {
		self.origin.y
	}

	pub fn width(&self) -> f64 {
		self.size.x
	}

	pub fn height(&self) -> f64 {
		self.size.y
	}

	/// A region with no area can't be normalized against. This is what a detached or `display:
	/// none` element reports.
	pub fn is_degenerate(&self) -> bool {
		!(self.origin.is_finite() && self.size.is_finite() && self.size.x > 0.0 && self.size.y > 0.0)
	}

	/// Maps a viewport position to a fraction of this region, or `None` if the result would not be
	/// finite.
	pub fn normalize(&self, client: DVec2) -> Option<Point> {
		if self.is_degenerate() || !client.is_finite() {
			return None;
		}
		Some(((client - self.origin) / self.size).into())
	}
}

impl From<&web_sys::DomRect> for RegionBounds {
	fn from(rect: &web_sys::DomRect) -> Self {
		Self::new(rect.left(), rect.top(), rect.width(), rect.height())
	}
}

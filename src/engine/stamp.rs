use crate::geom::Point;

/// Where one brush stamp goes, as percentage offsets from its container's top-left.
#[derive(Clone, Debug, PartialEq)]
pub struct Stamp {
	pub index: usize,
	pub left_percent: f64,
	pub top_percent: f64,
}

impl Stamp {
	fn at(index: usize, point: &Point) -> Self {
		Self {
			index,
			left_percent: point.x * 100.0,
			top_percent: point.y * 100.0,
		}
	}

	/// The inline style shared by the editor and the saved markup.
	pub fn style(&self) -> String {
		format!("left: {}%; top: {}%", self.left_percent, self.top_percent)
	}
}

/// Lays out one stamp per point, in order.
///
/// Points outside `[0, 1]` are laid out outside the container; nothing is clamped or rejected.
pub fn layout_stamps(points: &[Point]) -> Vec<Stamp> {
	points
		.iter()
		.enumerate()
		.map(|(index, point)| Stamp::at(index, point))
		.collect()
}

use crate::geom::Point;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum AttributeError {
	#[error("malformed block attributes")]
	Json(#[from] serde_json::Error),
}

static_assertions::assert_impl_all!(AttributeError: std::error::Error, Send, Sync);

/// The persisted state of a draw block. Only `positions` is stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockAttributes {
	#[serde(default, deserialize_with = "deserialize_positions")]
	pub positions: Vec<Point>,
}

impl BlockAttributes {
	pub fn new(positions: Vec<Point>) -> Self {
		Self { positions }
	}

	/// The attributes the host should store after `point` is drawn. Strokes are only ever appended.
	pub fn with_stroke(&self, point: Point) -> Self {
		let mut positions = Vec::with_capacity(self.positions.len() + 1);
		positions.extend_from_slice(&self.positions);
		positions.push(point);
		Self { positions }
	}

	pub fn from_json(json: &str) -> Result<Self, AttributeError> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn to_json(&self) -> Result<String, AttributeError> {
		Ok(serde_json::to_string(self)?)
	}
}

/// Decodes a stored `positions` array. Entries without numeric `x` and `y` are skipped so one bad
/// entry doesn't take the whole drawing with it.
pub fn decode_positions(value: serde_json::Value) -> Result<Vec<Point>, AttributeError> {
	let entries = Vec::<serde_json::Value>::deserialize(value)?;
	Ok(keep_points(entries))
}

fn deserialize_positions<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Point>, D::Error> {
	let entries = Vec::<serde_json::Value>::deserialize(deserializer)?;
	Ok(keep_points(entries))
}

fn keep_points(entries: Vec<serde_json::Value>) -> Vec<Point> {
	entries
		.into_iter()
		.enumerate()
		.filter_map(|(index, entry)| match serde_json::from_value::<Point>(entry) {
			Ok(point) => Some(point),
			Err(error) => {
				tracing::warn!(index, %error, "skipping malformed position");
				None
			}
		})
		.collect()
}

use crate::geom::{Point, RegionBounds};
use glam::DVec2;

/// The platform's ability to route every further event of one pointer to a single element, even
/// after the pointer leaves it.
///
/// Both methods return whether the platform honored the request. A refusal is never fatal.
pub trait ExclusiveInput {
	fn acquire_exclusive_input(&self, pointer_id: i32) -> bool;
	fn release_exclusive_input(&self, pointer_id: i32) -> bool;
}

/// Used when there is nothing to capture the pointer with.
impl<T: ExclusiveInput> ExclusiveInput for Option<T> {
	fn acquire_exclusive_input(&self, pointer_id: i32) -> bool {
		self
			.as_ref()
			.is_some_and(|t| t.acquire_exclusive_input(pointer_id))
	}

	fn release_exclusive_input(&self, pointer_id: i32) -> bool {
		self
			.as_ref()
			.is_some_and(|t| t.release_exclusive_input(pointer_id))
	}
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, derive_more::Display)]
pub enum DrawState {
	#[default]
	Idle,
	Drawing,
}

/// The parts of a pointer event the surface cares about.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerSample {
	pub pointer_id: i32,
	pub client: DVec2,
}

impl PointerSample {
	pub fn new(pointer_id: i32, client_x: f64, client_y: f64) -> Self {
		Self {
			pointer_id,
			client: DVec2::new(client_x, client_y),
		}
	}
}

/// Turns pointer interaction within a region into normalized points.
///
/// The surface never holds the accumulated strokes. Each handler returns the point (if any) the
/// caller should append.
#[derive(Clone, Debug, Default)]
pub struct InputSurface {
	bounds: Option<RegionBounds>,
	state: DrawState,
}

impl InputSurface {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn state(&self) -> DrawState {
		self.state
	}

	pub fn bounds(&self) -> Option<RegionBounds> {
		self.bounds
	}

	/// Records the region to normalize against. Called whenever the capture element is (re)attached;
	/// the last call wins.
	///
	/// The bounds are not refreshed when the page scrolls or the element resizes mid-session.
	pub fn on_attach(&mut self, bounds: RegionBounds) {
		if bounds.is_degenerate() {
			tracing::warn!(?bounds, "attached to a region with no area");
		}
		self.bounds = Some(bounds);
	}

	fn normalize(&self, sample: &PointerSample) -> Option<Point> {
		let Some(bounds) = self.bounds else {
			tracing::debug!(?sample, "pointer event before attach");
			return None;
		};
		bounds.normalize(sample.client)
	}

	pub fn on_pointer_down(
		&mut self,
		sample: PointerSample,
		input: &impl ExclusiveInput,
	) -> Option<Point> {
		if !input.acquire_exclusive_input(sample.pointer_id) {
			tracing::warn!(
				pointer_id = sample.pointer_id,
				"failed to capture pointer"
			);
		}
		tracing::debug!(from = %self.state, "pointer down");
		self.state = DrawState::Drawing;
		self.normalize(&sample)
	}

	pub fn on_pointer_move(&self, sample: PointerSample) -> Option<Point> {
		match self.state {
			DrawState::Idle => None,
			DrawState::Drawing => self.normalize(&sample),
		}
	}

	pub fn on_pointer_up(&mut self, sample: PointerSample, input: &impl ExclusiveInput) {
		let released = input.release_exclusive_input(sample.pointer_id);
		if !released && self.state == DrawState::Drawing {
			tracing::warn!(
				pointer_id = sample.pointer_id,
				"failed to release pointer"
			);
		}
		tracing::debug!(from = %self.state, "pointer up");
		self.state = DrawState::Idle;
	}
}

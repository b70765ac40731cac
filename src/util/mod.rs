use crate::engine::{ExclusiveInput, PointerSample};
use itertools::Itertools;
use wasm_bindgen::JsCast;

pub trait ResultExt<T, E> {
	fn ok_or_log(self, message: &str) -> Option<T>
	where
		E: std::fmt::Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
	fn ok_or_log(self, message: &str) -> Option<T>
	where
		E: std::fmt::Display,
	{
		self.inspect_err(|error| tracing::warn!(%error, "{message}"))
			.ok()
	}
}

/// A `class` attribute from the non-empty entries of `classes`.
pub fn join_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> String {
	classes
		.into_iter()
		.map(str::trim)
		.filter(|class| !class.is_empty())
		.join(" ")
}

#[derive(thiserror::Error, Debug)]
#[error("javascript error: {0}")]
pub struct JsError(String);

impl From<wasm_bindgen::JsValue> for JsError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		JsError(format!("{:?}", value))
	}
}

impl ExclusiveInput for web_sys::Element {
	fn acquire_exclusive_input(&self, pointer_id: i32) -> bool {
		self
			.set_pointer_capture(pointer_id)
			.map_err(JsError::from)
			.ok_or_log("set_pointer_capture")
			.is_some()
	}

	fn release_exclusive_input(&self, pointer_id: i32) -> bool {
		self
			.release_pointer_capture(pointer_id)
			.map_err(JsError::from)
			.ok_or_log("release_pointer_capture")
			.is_some()
	}
}

pub trait PointerEventExt {
	fn sample(&self) -> PointerSample;

	/// The element the listener is attached to, which is the one that should hold the capture.
	fn capture_target(&self) -> Option<web_sys::Element>;
}

impl PointerEventExt for web_sys::PointerEvent {
	fn sample(&self) -> PointerSample {
		PointerSample::new(
			self.pointer_id(),
			self.client_x() as f64,
			self.client_y() as f64,
		)
	}

	fn capture_target(&self) -> Option<web_sys::Element> {
		self
			.current_target()
			.and_then(|target| target.dyn_into::<web_sys::Element>().ok())
	}
}

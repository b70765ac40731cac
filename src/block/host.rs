//! The JavaScript-facing API the host editor's registration glue calls.

use super::{decode_positions, save_markup, AttributeError, BlockAttributes, BlockDefinition};
use crate::components::DrawBlockEdit;
use crate::config::{ConfigError, StampConfig};
use crate::geom::Point;
use crate::util::{JsError, ResultExt};
use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use send_wrapper::SendWrapper;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
	#[error("invalid value from host: {0}")]
	Decode(String),

	#[error(transparent)]
	Attributes(#[from] AttributeError),

	#[error(transparent)]
	Config(#[from] ConfigError),

	#[error("host did not store the stroke: {0}")]
	Rejected(String),
}

static_assertions::assert_impl_all!(HostError: std::error::Error, Send, Sync);

impl From<serde_wasm_bindgen::Error> for HostError {
	fn from(value: serde_wasm_bindgen::Error) -> Self {
		HostError::Decode(value.to_string())
	}
}

impl From<HostError> for JsValue {
	fn from(value: HostError) -> Self {
		js_sys::Error::new(&value.to_string()).into()
	}
}

fn to_js(value: &impl Serialize) -> Result<JsValue, HostError> {
	// Plain objects and arrays rather than `Map`s.
	Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

fn config_from_js(config: JsValue) -> Result<StampConfig, HostError> {
	if config.is_undefined() || config.is_null() {
		return Ok(StampConfig::default());
	}
	let config = serde_wasm_bindgen::from_value::<serde_json::Value>(config)?;
	Ok(StampConfig::from_value(config)?)
}

fn positions_from_js(positions: JsValue) -> Result<Vec<Point>, HostError> {
	if positions.is_undefined() || positions.is_null() {
		return Ok(Vec::new());
	}
	let positions = serde_wasm_bindgen::from_value::<serde_json::Value>(positions)?;
	Ok(decode_positions(positions)?)
}

/// Installs logging for the editor. Safe to call more than once.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
	if let Err(error) = crate::logging::configure_logging() {
		tracing::debug!(%error, "logging already configured");
	}
}

#[wasm_bindgen(js_name = blockDefinition)]
pub fn block_definition(config: JsValue) -> Result<JsValue, HostError> {
	to_js(&BlockDefinition::new(&config_from_js(config)?))
}

#[wasm_bindgen(js_name = blockStylesheet)]
pub fn block_stylesheet() -> String {
	super::BLOCK_STYLESHEET.to_owned()
}

/// The published markup for a stored `positions` attribute.
#[wasm_bindgen(js_name = saveMarkup)]
pub fn save_markup_js(positions: JsValue, config: JsValue) -> Result<String, HostError> {
	let positions = positions_from_js(positions)?;
	Ok(save_markup(&positions, &config_from_js(config)?))
}

/// The reactive state of one mounted editor. Everything is created under `owner`, so dropping
/// the session frees it.
struct EditorSession {
	owner: Owner,
	attributes: RwSignal<BlockAttributes>,
}

impl EditorSession {
	fn new(positions: Vec<Point>) -> Self {
		let owner = Owner::new();
		let attributes = owner.with(|| RwSignal::new(BlockAttributes::new(positions)));
		Self { owner, attributes }
	}
}

impl Drop for EditorSession {
	fn drop(&mut self) {
		self.owner.cleanup();
	}
}

/// Appends `point` once `store` has accepted the new list, so the editor never shows a stroke the
/// host didn't keep.
fn commit_stroke<E>(
	attributes: RwSignal<BlockAttributes>,
	point: Point,
	store: impl FnOnce(&[Point]) -> Result<(), E>,
) -> Result<(), E> {
	let next = attributes.with_untracked(|attributes| attributes.with_stroke(point));
	store(&next.positions)?;
	attributes.set(next);
	Ok(())
}

/// A mounted editor. Dropping it (or calling `unmount`) removes the editor from the page.
#[wasm_bindgen]
pub struct EditorHandle {
	// Unmounted before the session's signals are disposed.
	_mount: Box<dyn std::any::Any>,
	session: EditorSession,
}

#[wasm_bindgen]
impl EditorHandle {
	/// Replaces the rendered positions, e.g. after the host undoes a change.
	#[wasm_bindgen(js_name = setPositions)]
	pub fn set_positions(&self, positions: JsValue) -> Result<(), HostError> {
		let positions = positions_from_js(positions)?;
		self.session.attributes.set(BlockAttributes::new(positions));
		Ok(())
	}

	pub fn unmount(self) {
		tracing::info!("EditorHandle::unmount");
	}
}

/// Mounts the editing view into `element`.
///
/// `on_change` is called with the complete new `positions` array for every stroke. The stroke is
/// only shown once `on_change` returns without throwing.
#[wasm_bindgen(js_name = mountEditor)]
pub fn mount_editor(
	element: web_sys::HtmlElement,
	positions: JsValue,
	on_change: js_sys::Function,
	class_name: Option<String>,
	config: JsValue,
) -> Result<EditorHandle, HostError> {
	let session = EditorSession::new(positions_from_js(positions)?);
	let config = config_from_js(config)?;
	let on_change = SendWrapper::new(on_change);
	let attributes = session.attributes;
	tracing::info!(?config, "mount_editor");

	let mount = session.owner.with(move || {
		let add_stroke = Callback::new(move |point: Point| {
			let _ = commit_stroke(attributes, point, |positions| {
				let value = to_js(&positions)?;
				on_change
					.call1(&JsValue::NULL, &value)
					.map_err(|error| HostError::Rejected(JsError::from(error).to_string()))?;
				Ok::<_, HostError>(())
			})
			.ok_or_log("stroke not stored");
		});
		let positions =
			Signal::derive(move || attributes.with(|attributes| attributes.positions.clone()));
		let class_name = class_name.unwrap_or_default();
		leptos::mount::mount_to(element, move || {
			view! { <DrawBlockEdit positions add_stroke class_name config /> }
		})
	});

	Ok(EditorHandle {
		_mount: Box::new(mount),
		session,
	})
}

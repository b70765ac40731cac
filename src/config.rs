use serde::{Deserialize, Serialize};

pub const DEFAULT_STAMP_IMAGE_URL: &str = "/wp-content/plugins/ganonpress/brush.png";
pub const DEFAULT_STAMP_CLASS: &str = "wp-block-ganonpress-draw-brush";
pub const DEFAULT_CONTAINER_CLASS: &str = "wp-block-ganonpress-draw";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("invalid config")]
	Json(#[from] serde_json::Error),

	#[error("config must be an object")]
	NotAnObject,

	#[error("stamp image url is empty")]
	EmptyStampImageUrl,
}

static_assertions::assert_impl_all!(ConfigError: std::error::Error, Send, Sync);

/// User-facing strings. The host translates these before handing them over.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, bon::Builder)]
#[serde(default)]
pub struct Labels {
	#[builder(into, default = "GanonPress Draw".to_owned())]
	pub title: String,

	#[builder(into, default = "Draw a picture for your visitors using the GanonBrush".to_owned())]
	pub description: String,
}

impl Default for Labels {
	fn default() -> Self {
		Self::builder().build()
	}
}

/// Everything the block components need to know about their surroundings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, bon::Builder)]
#[serde(default, rename_all = "camelCase")]
pub struct StampConfig {
	#[builder(into, default = DEFAULT_STAMP_IMAGE_URL.to_owned())]
	pub stamp_image_url: String,

	#[builder(into, default = DEFAULT_STAMP_CLASS.to_owned())]
	pub stamp_class: String,

	#[builder(into, default = DEFAULT_CONTAINER_CLASS.to_owned())]
	pub container_class: String,

	#[builder(default)]
	pub labels: Labels,
}

impl Default for StampConfig {
	fn default() -> Self {
		Self::builder().build()
	}
}

impl StampConfig {
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		Self::from_value(serde_json::from_str(json)?)
	}

	/// Serde would otherwise accept a sequence and assign its elements to fields in order.
	pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
		if !value.is_object() {
			return Err(ConfigError::NotAnObject);
		}
		serde_json::from_value::<Self>(value)?.validated()
	}

	pub fn validated(self) -> Result<Self, ConfigError> {
		if self.stamp_image_url.trim().is_empty() {
			return Err(ConfigError::EmptyStampImageUrl);
		}
		Ok(self)
	}
}

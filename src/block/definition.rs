use super::POSITIONS_ATTRIBUTE;
use crate::config::StampConfig;
use serde::Serialize;
use std::collections::BTreeMap;

pub const BLOCK_NAME: &str = "ganonpress/draw";
pub const EDITOR_SCRIPT_HANDLE: &str = "ganonpress-block-editor";
pub const EDITOR_STYLE_HANDLE: &str = "ganonpress-block-editor";
pub const STYLE_HANDLE: &str = "ganonpress-block";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Supports {
	/// Whether the author may switch the block to raw HTML editing.
	pub html: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AttributeSchema {
	#[serde(rename = "type")]
	pub kind: &'static str,
	pub default: serde_json::Value,
}

/// What the host's registration glue needs to register the block type.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDefinition {
	pub name: &'static str,
	pub title: String,
	pub description: String,
	pub category: &'static str,
	pub icon: &'static str,
	pub supports: Supports,
	pub attributes: BTreeMap<&'static str, AttributeSchema>,
	pub editor_script: &'static str,
	pub editor_style: &'static str,
	pub style: &'static str,
}

impl BlockDefinition {
	pub fn new(config: &StampConfig) -> Self {
		let attributes = BTreeMap::from([(
			POSITIONS_ATTRIBUTE,
			AttributeSchema {
				kind: "array",
				default: serde_json::Value::Array(Vec::new()),
			},
		)]);
		Self {
			name: BLOCK_NAME,
			title: config.labels.title.clone(),
			description: config.labels.description.clone(),
			category: "widgets",
			icon: "admin-customizer",
			supports: Supports { html: false },
			attributes,
			editor_script: EDITOR_SCRIPT_HANDLE,
			editor_style: EDITOR_STYLE_HANDLE,
			style: STYLE_HANDLE,
		}
	}
}

use super::{DrawingSurface, StampCanvas};
use crate::config::StampConfig;
use crate::geom::Point;
use crate::util::join_classes;
use leptos::prelude::*;

/// The block as the author sees it while editing.
///
/// The host owns `positions`; strokes are proposed through `add_stroke` and come back as a new
/// `positions` value.
#[component]
pub fn DrawBlockEdit(
	#[prop(into)] positions: Signal<Vec<Point>>,
	add_stroke: Callback<Point>,
	/// Extra classes from the host, e.g. the block's generated class name.
	#[prop(optional, into)]
	class_name: String,
	#[prop(optional)] config: StampConfig,
) -> impl IntoView {
	let class = join_classes([config.container_class.as_str(), class_name.as_str()]);
	view! {
		<DrawingSurface class add_stroke>
			<StampCanvas positions config />
		</DrawingSurface>
	}
}

/// The block as it is published.
#[component]
pub fn DrawBlockSave(
	#[prop(into)] positions: Signal<Vec<Point>>,
	#[prop(optional)] config: StampConfig,
) -> impl IntoView {
	let class = config.container_class.clone();
	view! {
		<div class=class>
			<StampCanvas positions config />
		</div>
	}
}

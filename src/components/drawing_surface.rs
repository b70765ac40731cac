use crate::engine::InputSurface;
use crate::geom::{Point, RegionBounds};
use crate::util::{join_classes, PointerEventExt};
use leptos::html;
use leptos::prelude::*;

/// A region that turns presses and drags into normalized strokes, reported one at a time through
/// `add_stroke`.
#[component]
pub fn DrawingSurface(
	add_stroke: Callback<Point>,
	#[prop(optional, into)] class: String,
	children: Children,
) -> impl IntoView {
	let node_ref = NodeRef::<html::Div>::new();
	let surface = StoredValue::new(InputSurface::new());

	// Runs again whenever the element is re-attached.
	Effect::new(move |_| {
		if let Some(element) = node_ref.get() {
			let bounds = RegionBounds::from(&element.get_bounding_client_rect());
			tracing::info!(?bounds, "DrawingSurface::attach");
			surface.update_value(|surface| surface.on_attach(bounds));
		}
	});

	let pointerdown = move |e: leptos::ev::PointerEvent| {
		e.prevent_default();
		let target = e.capture_target();
		let point = surface
			.try_update_value(|surface| surface.on_pointer_down(e.sample(), &target))
			.flatten();
		// The host may re-render synchronously, so call out only after the update.
		if let Some(point) = point {
			add_stroke.run(point);
		}
	};

	let pointermove = move |e: leptos::ev::PointerEvent| {
		let point = surface
			.try_with_value(|surface| surface.on_pointer_move(e.sample()))
			.flatten();
		if let Some(point) = point {
			add_stroke.run(point);
		}
	};

	let pointerup = move |e: leptos::ev::PointerEvent| {
		let target = e.capture_target();
		surface.update_value(|surface| surface.on_pointer_up(e.sample(), &target));
	};

	let touchstart = move |e: leptos::ev::TouchEvent| {
		e.prevent_default();
	};

	view! {
		<div
			class=join_classes(["DrawingSurface", class.as_str()])
			node_ref=node_ref
			on:pointerdown=pointerdown
			on:pointermove=pointermove
			on:pointerup=pointerup
			// A cancelled pointer never sends `pointerup`.
			on:pointercancel=pointerup
			on:touchstart=touchstart
		>
			{children()}
		</div>
	}
}

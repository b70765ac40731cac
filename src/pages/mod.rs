use crate::block::{save_markup, BlockAttributes, BLOCK_STYLESHEET};
use crate::components::*;
use crate::config::StampConfig;
use crate::geom::Point;
use crate::util::ResultExt;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use thaw::{Body1, Caption1, Card, CardHeader, CardPreview};

/// Which of the host's rendering contexts a panel stands in for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, derive_more::Display)]
enum HostContext {
	#[display("edit")]
	Edit,
	#[display("save")]
	Save,
	#[display("storage")]
	Storage,
}

/// One host context, labelled with the stroke count so the edit and save views can be compared at
/// a glance.
#[component]
fn ContextPanel(
	#[prop(into)] title: String,
	context: HostContext,
	#[prop(into)] strokes: Signal<usize>,
	children: Children,
) -> impl IntoView {
	let caption = move || format!("{context} · {} strokes", strokes.get());
	view! {
		<Card class="ContextPanel" attr:data-context=context.to_string()>
			<CardHeader>
				<Body1>
					<b>{title}</b>
				</Body1>
				<Caption1>{caption}</Caption1>
			</CardHeader>
			<CardPreview>{children()}</CardPreview>
		</Card>
	}
}

/// Stands in for the host editor: one block being edited next to what it would publish.
#[component]
pub fn Home() -> impl IntoView {
	// Relative to the demo page rather than the plugin directory.
	let config = StampConfig::builder().stamp_image_url("brush.png").build();

	let attributes = RwSignal::new(BlockAttributes::default());
	let positions = Signal::derive(move || attributes.with(|attributes| attributes.positions.clone()));
	let strokes = Signal::derive(move || attributes.with(|attributes| attributes.positions.len()));
	let add_stroke = Callback::new(move |point: Point| {
		attributes.update(|attributes| attributes.positions.push(point))
	});

	let json = move || {
		attributes
			.with(|attributes| attributes.to_json())
			.ok_or_log("failed to encode attributes")
			.unwrap_or_default()
	};
	let markup = {
		let config = config.clone();
		move || positions.with(|positions| save_markup(positions, &config))
	};
	let title = config.labels.title.clone();
	let edit_config = config.clone();

	view! {
		<Title text="Home" />
		<Style>{BLOCK_STYLESHEET}</Style>
		<div class="Home">
			<ContextPanel title context=HostContext::Edit strokes>
				<DrawBlockEdit positions add_stroke config=edit_config />
			</ContextPanel>
			<ContextPanel title="Published" context=HostContext::Save strokes>
				<DrawBlockSave positions config />
			</ContextPanel>
			<ContextPanel title="Attributes" context=HostContext::Storage strokes>
				<pre>{json}</pre>
			</ContextPanel>
			<ContextPanel title="Markup" context=HostContext::Storage strokes>
				<pre>{markup}</pre>
			</ContextPanel>
		</div>
	}
}

#[component]
pub fn NotFound() -> impl IntoView {
	let path = use_location().pathname.get();

	view! {
		<Title text="Not found" />
		<div class="NotFound">
			<div>{format!("Not found: {path}")}</div>
			<A href="/">"Return home"</A>
		</div>
	}
}

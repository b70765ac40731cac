use ganonpress::block::host::{block_definition, mount_editor, save_markup_js, EditorHandle};
use ganonpress::*;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

// https://rustwasm.github.io/wasm-bindgen/wasm-bindgen-test/browsers.html
wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
	web_sys::window().unwrap().document().unwrap()
}

fn host_element(style: &str) -> web_sys::HtmlElement {
	let element = document()
		.create_element("div")
		.unwrap()
		.unchecked_into::<web_sys::HtmlElement>();
	element.set_attribute("style", style).unwrap();
	document().body().unwrap().append_child(&element).unwrap();
	element
}

fn stamp_styles(element: &web_sys::Element) -> Vec<String> {
	let images = element.query_selector_all("img").unwrap();
	(0..images.length())
		.map(|i| {
			images
				.item(i)
				.unwrap()
				.unchecked_into::<web_sys::Element>()
				.get_attribute("style")
				.unwrap_or_default()
		})
		.collect()
}

async fn settle() {
	let promise = js_sys::Promise::new(&mut |resolve, _| {
		web_sys::window()
			.unwrap()
			.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 10)
			.unwrap();
	});
	wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

fn dispatch_pointer(target: &web_sys::Element, kind: &str, x: i32, y: i32) {
	let init = web_sys::PointerEventInit::new();
	init.set_pointer_id(1);
	init.set_client_x(x);
	init.set_client_y(y);
	init.set_bubbles(true);
	let event = web_sys::PointerEvent::new_with_event_init_dict(kind, &init).unwrap();
	target.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn one_image_per_position() {
	let host = host_element("");
	let positions = RwSignal::new(vec![
		Point::new(0.0, 0.0),
		Point::new(0.5, 0.5),
		Point::new(1.0, 1.0),
	]);
	let _mount = leptos::mount::mount_to(host.clone(), move || {
		view! { <StampCanvas positions /> }
	});

	assert_eq!(
		stamp_styles(&host),
		[
			"left: 0%; top: 0%",
			"left: 50%; top: 50%",
			"left: 100%; top: 100%"
		]
	);
	let first = host.query_selector("img").unwrap().unwrap();
	assert_eq!(
		first.get_attribute("src").as_deref(),
		Some(config::DEFAULT_STAMP_IMAGE_URL)
	);
	assert_eq!(
		first.get_attribute("class").as_deref(),
		Some(config::DEFAULT_STAMP_CLASS)
	);
}

#[wasm_bindgen_test]
fn saved_view_matches_saved_markup() {
	let host = host_element("");
	let points = vec![Point::new(0.25, 0.75), Point::new(0.5, 0.125)];
	let positions = RwSignal::new(points.clone());
	let _mount = leptos::mount::mount_to(host.clone(), move || {
		view! { <DrawBlockSave positions /> }
	});

	let markup = block::save_markup(&points, &StampConfig::default());
	let expected = host_element("");
	expected.set_inner_html(&markup);

	assert_eq!(stamp_styles(&host), stamp_styles(&expected));
	assert!(host
		.query_selector(".wp-block-ganonpress-draw")
		.unwrap()
		.is_some());
}

fn json(text: &str) -> JsValue {
	js_sys::JSON::parse(text).unwrap()
}

/// Mounts an editor over the viewport rectangle (100, 50, 200, 100) whose `on_change` runs
/// `on_change_body` with `positions` in scope.
async fn editor(on_change_body: &str) -> (web_sys::HtmlElement, EditorHandle) {
	let _ = leptos::task::Executor::init_wasm_bindgen();

	let style = document().create_element("style").unwrap();
	style.set_text_content(Some(".DrawingSurface { height: 100%; }"));
	document().head().unwrap().append_child(&style).unwrap();

	let host = host_element("position: fixed; left: 100px; top: 50px; width: 200px; height: 100px; margin: 0;");
	let on_change = js_sys::Function::new_with_args("positions", on_change_body);
	let handle = mount_editor(
		host.clone(),
		JsValue::UNDEFINED,
		on_change,
		None,
		JsValue::UNDEFINED,
	)
	.unwrap();
	settle().await;
	(host, handle)
}

#[wasm_bindgen_test(async)]
async fn editor_reports_strokes() {
	let (host, _editor) = editor("globalThis.__ganonpressPositions = positions;").await;

	let surface = host.query_selector(".DrawingSurface").unwrap().unwrap();
	assert_eq!(
		surface.get_attribute("class").as_deref(),
		Some("DrawingSurface wp-block-ganonpress-draw")
	);

	// Ignored: the button isn't down yet.
	dispatch_pointer(&surface, "pointermove", 120, 60);
	dispatch_pointer(&surface, "pointerdown", 150, 75);
	dispatch_pointer(&surface, "pointermove", 300, 150);
	dispatch_pointer(&surface, "pointerup", 300, 150);
	dispatch_pointer(&surface, "pointermove", 200, 100);
	settle().await;

	let reported = js_sys::Reflect::get(&js_sys::global(), &"__ganonpressPositions".into()).unwrap();
	let reported: Vec<Point> = serde_wasm_bindgen::from_value(reported).unwrap();
	assert_eq!(reported, [Point::new(0.25, 0.25), Point::new(1.0, 1.0)]);
	assert_eq!(stamp_styles(&host).len(), 2);
}

#[wasm_bindgen_test(async)]
async fn stroke_the_host_rejects_is_not_drawn() {
	let (host, _editor) = editor("throw new Error('not stored');").await;

	let surface = host.query_selector(".DrawingSurface").unwrap().unwrap();
	dispatch_pointer(&surface, "pointerdown", 150, 75);
	dispatch_pointer(&surface, "pointermove", 200, 100);
	dispatch_pointer(&surface, "pointerup", 200, 100);
	settle().await;

	assert!(stamp_styles(&host).is_empty());
}

#[wasm_bindgen_test(async)]
async fn set_positions_rerenders() {
	let (host, editor) = editor("").await;

	editor
		.set_positions(json(r#"[{"x":0.5,"y":0.5},{"x":0.25,"y":0.75},{"x":"bad"}]"#))
		.unwrap();
	settle().await;
	assert_eq!(
		stamp_styles(&host),
		["left: 50%; top: 50%", "left: 25%; top: 75%"]
	);

	editor.set_positions(json("[]")).unwrap();
	settle().await;
	assert!(stamp_styles(&host).is_empty());

	assert!(editor.set_positions(json(r#"{"x":0.5}"#)).is_err());
}

#[wasm_bindgen_test(async)]
async fn unmount_clears_the_editor() {
	let (host, editor) = editor("").await;
	editor.set_positions(json(r#"[{"x":0.5,"y":0.5}]"#)).unwrap();
	settle().await;
	assert_eq!(stamp_styles(&host).len(), 1);

	editor.unmount();
	settle().await;
	assert!(host.query_selector(".DrawingSurface").unwrap().is_none());
}

#[wasm_bindgen_test]
fn save_markup_from_js_skips_malformed_entries() {
	let markup = save_markup_js(
		json(r#"[{"x":0,"y":0},{"x":"left","y":1},null,{"y":0.5},{"x":1,"y":1}]"#),
		json(r#"{"stampImageUrl":"/brush.png"}"#),
	)
	.unwrap();
	assert_eq!(
		markup,
		concat!(
			r#"<div class="wp-block-ganonpress-draw">"#,
			r#"<img alt="" class="wp-block-ganonpress-draw-brush" src="/brush.png" style="left: 0%; top: 0%"/>"#,
			r#"<img alt="" class="wp-block-ganonpress-draw-brush" src="/brush.png" style="left: 100%; top: 100%"/>"#,
			"</div>"
		)
	);

	assert!(save_markup_js(json(r#"{"positions":[]}"#), JsValue::UNDEFINED).is_err());
	assert!(save_markup_js(json("[]"), json(r#"["evil.png"]"#)).is_err());
	assert_eq!(
		save_markup_js(JsValue::NULL, JsValue::NULL).unwrap(),
		r#"<div class="wp-block-ganonpress-draw"></div>"#
	);
}

#[wasm_bindgen_test]
fn block_definition_as_js() {
	let definition = block_definition(json(r#"{"labels":{"title":"Dessin"}}"#)).unwrap();
	let definition: serde_json::Value =
		serde_json::from_str(&String::from(js_sys::JSON::stringify(&definition).unwrap())).unwrap();

	assert_eq!(definition["name"], "ganonpress/draw");
	assert_eq!(definition["title"], "Dessin");
	assert_eq!(definition["category"], "widgets");
	assert_eq!(definition["supports"], serde_json::json!({ "html": false }));
	assert_eq!(
		definition["attributes"],
		serde_json::json!({ "positions": { "type": "array", "default": [] } })
	);
	assert_eq!(definition["editorScript"], "ganonpress-block-editor");
}

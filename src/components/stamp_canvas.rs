use crate::config::StampConfig;
use crate::engine::layout_stamps;
use crate::geom::Point;
use leptos::prelude::*;

/// One brush image per position, placed by percentage so it renders the same at any size.
///
/// Every change re-creates all the images.
#[component]
pub fn StampCanvas(
	#[prop(into)] positions: Signal<Vec<Point>>,
	#[prop(optional)] config: StampConfig,
) -> impl IntoView {
	let stamps = Memo::new(move |_| positions.with(|positions| layout_stamps(positions)));

	move || {
		stamps
			.get()
			.into_iter()
			.map(|stamp| {
				view! {
					<img
						alt=""
						class=config.stamp_class.clone()
						src=config.stamp_image_url.clone()
						style=stamp.style()
					/>
				}
			})
			.collect_view()
	}
}

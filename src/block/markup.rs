use crate::config::StampConfig;
use crate::engine::{layout_stamps, Stamp};
use crate::geom::Point;
use itertools::Itertools;

/// The stylesheet both the editor and the published page need for stamps to land where their
/// offsets say.
pub const BLOCK_STYLESHEET: &str = r#".wp-block-ganonpress-draw {
	position: relative;
	min-height: 300px;
	touch-action: none;
	user-select: none;
}

.wp-block-ganonpress-draw-brush {
	position: absolute;
	transform: translate(-50%, -50%);
	pointer-events: none;
}
"#;

fn escape_attribute(value: &str) -> String {
	value
		.chars()
		.map(|c| match c {
			'&' => "&amp;".to_owned(),
			'"' => "&quot;".to_owned(),
			'<' => "&lt;".to_owned(),
			'>' => "&gt;".to_owned(),
			c => c.to_string(),
		})
		.collect()
}

fn stamp_markup(stamp: &Stamp, class: &str, src: &str) -> String {
	format!(
		r#"<img alt="" class="{class}" src="{src}" style="{}"/>"#,
		stamp.style()
	)
}

/// The markup the host stores as the block's published content.
///
/// It is laid out by the same `layout_stamps` as the editor, so the two always agree.
pub fn save_markup(positions: &[Point], config: &StampConfig) -> String {
	let class = escape_attribute(&config.stamp_class);
	let src = escape_attribute(&config.stamp_image_url);
	let stamps = layout_stamps(positions)
		.iter()
		.map(|stamp| stamp_markup(stamp, &class, &src))
		.join("");
	format!(
		r#"<div class="{}">{stamps}</div>"#,
		escape_attribute(&config.container_class)
	)
}

pub(crate) mod util;

pub mod block;
pub mod components;
pub mod config;
pub mod engine;
pub mod geom;
pub mod logging;
mod pages;


pub use block::{BlockAttributes, BlockDefinition};
pub use components::{DrawBlockEdit, DrawBlockSave, DrawingSurface, StampCanvas};
pub use config::StampConfig;
pub use geom::{Point, RegionBounds};

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use thaw::ConfigProvider;

/// The standalone demo: a local stand-in for the host editor.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Title formatter=|page| format!("GanonPress - {page}") />

		// Inject metadata in the <head> tag.
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ConfigProvider>
			<Router>
				<Routes fallback=|| view! { <pages::NotFound /> }>
					<Route path=path!("/") view=pages::Home />
				</Routes>
			</Router>
		</ConfigProvider>
	}
}

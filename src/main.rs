fn main() {
	if let Err(error) = ganonpress::logging::configure_logging() {
		// We can technically continue without logging.
		tracing::error!(error = error.to_string());
	}

	leptos::mount::mount_to_body(ganonpress::App)
}

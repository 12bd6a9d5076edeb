//! Email template rendering with Handlebars.
//!
//! The two templates this service sends are fixed and embedded in the
//! binary, so template loading is not a runtime failure mode. Each
//! template exists as an HTML and a plain-text variant.

use handlebars::Handlebars;

use crate::prelude::*;

pub const TPL_REVIEW_REQUEST: &str = "review_request";
pub const TPL_REVIEW_NOTIFICATION: &str = "review_notification";

/// Template engine for email rendering
pub struct TemplateEngine {
	handlebars: Handlebars<'static>,
}

impl TemplateEngine {
	pub fn new() -> GvResult<Self> {
		let mut handlebars = Handlebars::new();

		// Strict mode catches variables the caller forgot to pass
		handlebars.set_strict_mode(true);

		let templates: &[(&str, &str)] = &[
			(
				"review_request.html",
				include_str!("../templates/review_request.html.hbs"),
			),
			(
				"review_request.txt",
				include_str!("../templates/review_request.txt.hbs"),
			),
			(
				"review_notification.html",
				include_str!("../templates/review_notification.html.hbs"),
			),
			(
				"review_notification.txt",
				include_str!("../templates/review_notification.txt.hbs"),
			),
		];

		for (name, source) in templates {
			handlebars.register_template_string(name, source).map_err(|err| {
				Error::Internal(format!("Failed to register template '{}': {}", name, err))
			})?;
		}

		Ok(Self { handlebars })
	}

	/// Renders a template with variables.
	///
	/// Returns (html_body, text_body) tuple.
	pub fn render(&self, name: &str, vars: &serde_json::Value) -> GvResult<(String, String)> {
		let html_body = self
			.handlebars
			.render(&format!("{}.html", name), vars)
			.map_err(|err| {
				Error::Internal(format!("Failed to render HTML template '{}': {}", name, err))
			})?;

		let text_body = self
			.handlebars
			.render(&format!("{}.txt", name), vars)
			.map_err(|err| {
				Error::Internal(format!("Failed to render text template '{}': {}", name, err))
			})?;

		Ok((html_body, text_body))
	}
}


// vim: ts=4

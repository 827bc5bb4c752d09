//! Document shell wrapped around assembled page bodies.

use folio_markup::escape_html;
use minijinja::{context, Environment};

/// Values substituted into the document shell.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DocumentContext {
    /// Window title
    pub title: String,
    /// Document language
    pub lang: String,
    /// Generator name and version
    pub generator: String,
    /// Meta keywords, one `meta` element each
    pub keywords: Vec<String>,
    /// Meta description
    pub description: String,
    /// Stylesheet link, if any
    pub stylesheet: Option<String>,
    /// Serialized `body` element
    pub body: String,
}

/// Template engine using minijinja.
pub struct DocumentTemplate {
    env: Environment<'static>,
}

impl DocumentTemplate {
    /// Create a template engine with the built-in document shell.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("document.html".to_string(), DOCUMENT_TEMPLATE.to_string())
            .expect("Failed to add document template");

        Self { env }
    }

    /// Render a complete document.
    pub fn render(&self, context: &DocumentContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("document.html")?;

        tmpl.render(context! {
            title => &context.title,
            lang => &context.lang,
            generator => &context.generator,
            keywords => &context.keywords,
            description => &context.description,
            stylesheet => context.stylesheet.as_deref().map(escape_html),
            body => &context.body,
        })
    }
}

impl Default for DocumentTemplate {
    fn default() -> Self {
        Self::new()
    }
}

const DOCUMENT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ lang }}">
<head>
<meta charset="utf-8">
<title>{{ title }}</title>
<meta name="generator" content="{{ generator }}">
{% for keyword in keywords %}<meta name="keywords" content="{{ keyword }}">
{% endfor %}{% if description %}<meta name="description" content="{{ description }}">
{% endif %}{% if stylesheet %}<link rel="stylesheet" href="{{ stylesheet | safe }}">
{% endif %}</head>
{{ body | safe }}</html>
"##;

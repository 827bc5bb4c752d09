//! Localized resource strings.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\d+)\}").expect("valid placeholder pattern"));

/// Built-in English strings, keyed by resource name.
const DEFAULTS: &[(&str, &str)] = &[
    ("page.overview_summary", "Overview"),
    ("page.window_title", "{0} ({1})"),
    ("nav.overview", "Overview"),
    ("nav.module", "Module"),
    ("nav.package", "Package"),
    ("nav.class", "Class"),
    ("nav.tree", "Tree"),
    ("nav.deprecated", "Deprecated"),
    ("nav.index", "Index"),
    ("nav.help", "Help"),
    ("nav.label", "Navigation"),
    ("nav.skip", "Skip navigation links"),
    ("index.modules", "Modules"),
    ("index.packages", "Packages"),
    ("index.module", "Module"),
    ("index.package", "Package"),
    ("index.description", "Description"),
];

/// Resource string lookup with optional per-project overrides.
#[derive(Debug, Clone, Default)]
pub struct Resources {
    overrides: HashMap<String, String>,
}

impl Resources {
    /// Resources with only the built-in strings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resources where `overrides` take precedence over the built-in strings.
    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    /// Look up a string by key.
    ///
    /// Unknown keys resolve to the key itself so a missing translation shows
    /// up in the output instead of failing the page.
    pub fn get_text(&self, key: &str) -> String {
        if let Some(value) = self.overrides.get(key) {
            return value.clone();
        }
        match DEFAULTS.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => (*value).to_string(),
            None => {
                tracing::warn!(key, "missing resource string");
                key.to_string()
            }
        }
    }

    /// Look up a string and substitute `{0}`, `{1}`, ... with `args`.
    ///
    /// Substitution is a single pass over the template: inserted arguments
    /// are never scanned for placeholders, and placeholders without a
    /// matching argument are left as written.
    pub fn get_text_with(&self, key: &str, args: &[&str]) -> String {
        let text = self.get_text(key);
        PLACEHOLDER
            .replace_all(&text, |caps: &Captures<'_>| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| args.get(i))
                    .map_or_else(|| caps[0].to_string(), |arg| (*arg).to_string())
            })
            .into_owned()
    }
}

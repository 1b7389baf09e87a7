use std::path::Path;

use anyhow::Context;
use handlebars::Handlebars;

pub(crate) const POST_TEMPLATE_NAME: &str = "post";

// Body is followed by a newline and a lone space, with no final newline.
const POST_TEMPLATE: &str = concat!(
    "---\n",
    "title: \"{{title}}\"\n",
    "date: '{{date}}'\n",
    "lang: {{lang}}\n",
    "---\n",
    "{{body}}\n",
    " ",
);

/// Builds the template registry. Output is plain text, so nothing is escaped.
pub(crate) fn generate_renderer(template_file: Option<&Path>) -> anyhow::Result<Handlebars<'static>> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.set_strict_mode(true);

    match template_file {
        Some(path) => handlebars
            .register_template_file(POST_TEMPLATE_NAME, path)
            .with_context(|| format!("while loading template {path:?}"))?,
        None => handlebars
            .register_template_string(POST_TEMPLATE_NAME, POST_TEMPLATE)
            .context("built-in post template")?,
    }

    Ok(handlebars)
}

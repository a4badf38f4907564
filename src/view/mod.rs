//! View rendering module
//!
//! Wraps the handlebars registry: templates are loaded once at startup
//! from the views directory, then rendered per request with a context
//! that always carries a `title`.

use handlebars::{DirectorySourceOptions, Handlebars};
use serde::Serialize;
use serde_json::{Map, Value};

/// Per-request template context; `title` is always present
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct PageContext {
    values: Map<String, Value>,
}

impl PageContext {
    pub fn new(title: impl Into<String>) -> Self {
        let mut values = Map::new();
        values.insert("title".to_string(), Value::String(title.into()));
        Self { values }
    }

    /// Attach an extra context value
    #[must_use]
    pub fn with(mut self, key: &str, value: Value) -> Self {
        self.values.insert(key.to_string(), value);
        self
    }

    pub fn title(&self) -> &str {
        self.values
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}

/// Template registry, immutable after startup
pub struct ViewRegistry {
    registry: Handlebars<'static>,
}

impl ViewRegistry {
    /// Load every `.hbs` template under `views_dir`.
    ///
    /// Template names are the file stems, so `views/index.hbs` renders as
    /// `index`. Subdirectory files keep their path (`blog/post`).
    pub fn load(views_dir: &str) -> Result<Self, handlebars::TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_templates_directory(views_dir, DirectorySourceOptions::default())?;
        Ok(Self { registry })
    }

    /// Render a named template with the given context
    pub fn render(
        &self,
        template: &str,
        ctx: &PageContext,
    ) -> Result<String, handlebars::RenderError> {
        self.registry.render(template, ctx)
    }

    pub fn has_template(&self, template: &str) -> bool {
        self.registry.has_template(template)
    }

    #[cfg(test)]
    pub fn from_template_strings(templates: &[(&str, &str)]) -> Self {
        let mut registry = Handlebars::new();
        for (name, source) in templates {
            registry
                .register_template_string(name, source)
                .expect("test template must parse");
        }
        Self { registry }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_carries_title() {
        let ctx = PageContext::new("About Brady Ouren");
        assert_eq!(ctx.title(), "About Brady Ouren");
    }

    #[test]
    fn test_context_extra_values() {
        let ctx = PageContext::new("404 - page cannot be found")
            .with("url", Value::String("/missing".to_string()));
        assert_eq!(ctx.get("url").unwrap(), "/missing");
        assert_eq!(ctx.title(), "404 - page cannot be found");
    }

    #[test]
    fn test_render_uses_context() {
        let views = ViewRegistry::from_template_strings(&[(
            "hello",
            "<title>{{title}}</title><p>{{greeting}}</p>",
        )]);
        let ctx =
            PageContext::new("Hi").with("greeting", Value::String("hello there".to_string()));
        let html = views.render("hello", &ctx).unwrap();
        assert_eq!(html, "<title>Hi</title><p>hello there</p>");
    }

    #[test]
    fn test_render_unknown_template_fails() {
        let views = ViewRegistry::from_template_strings(&[]);
        assert!(views.render("nope", &PageContext::new("x")).is_err());
    }

    #[test]
    fn test_site_templates_load_and_render() {
        let views = ViewRegistry::load("views").unwrap();
        for name in [
            "index", "about", "contact", "projects", "modesty", "404", "blog", "page", "post",
            "tag", "category",
        ] {
            assert!(views.has_template(name), "missing template {name}");
        }

        let html = views.render("index", &PageContext::new("BrdyOrn")).unwrap();
        assert!(html.contains("BrdyOrn"));

        let ctx = PageContext::new("404 - page cannot be found")
            .with("url", Value::String("/missing".to_string()));
        let html = views.render("404", &ctx).unwrap();
        assert!(html.contains("/missing"));
    }
}

//! Template engine for the home page
//!
//! Uses Tera with the page template embedded at compile time. Operators can
//! replace it by placing an `index.html` in the configured templates
//! directory.
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::{IndexPage, TemplateEngine};
//!
//! let engine = TemplateEngine::new()?;
//! let html = engine.render_index(&IndexPage::prediction("Greater Noida", true))?;
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tera::{Context, Tera};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Name of the home page template
pub const INDEX_TEMPLATE: &str = "index.html";

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),

    /// Custom template could not be read
    #[error("Failed to read template {path}: {reason}")]
    Io {
        /// File that failed
        path: String,
        /// Underlying error
        reason: String,
    },
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(render_chain(&e)),
        }
    }
}

/// Tera hides the useful part of render errors in the source chain
fn render_chain(e: &tera::Error) -> String {
    let mut message = e.to_string();
    let mut source = std::error::Error::source(e);
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

/// Home page template data
///
/// Exactly one of `rain_prediction` and `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexPage {
    /// Location label shown in the heading
    pub location: String,
    /// Whether rain is expected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rain_prediction: Option<bool>,
    /// Error message shown instead of a prediction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IndexPage {
    /// Page showing a prediction
    pub fn prediction(location: impl Into<String>, will_rain: bool) -> Self {
        Self {
            location: location.into(),
            rain_prediction: Some(will_rain),
            error: None,
        }
    }

    /// Page showing an error message
    pub fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            rain_prediction: None,
            error: Some(message.into()),
        }
    }
}

/// Template engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Path to custom templates directory (optional)
    #[serde(default)]
    pub templates_dir: Option<String>,

    /// Whether to use embedded templates when custom ones fail to load
    #[serde(default = "default_true")]
    pub use_embedded_fallback: bool,

    /// Whether to auto-escape HTML by default
    #[serde(default = "default_true")]
    pub auto_escape: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            templates_dir: None,
            use_embedded_fallback: true,
            auto_escape: true,
        }
    }
}

/// Embedded templates - compiled into the binary
mod embedded {
    pub const INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Rain Prediction</title>
    <style>
        body { font-family: system-ui, sans-serif; margin: 0; min-height: 100vh;
               display: flex; align-items: center; justify-content: center;
               background: #eef3f8; color: #1d2733; }
        main { background: #fff; padding: 2.5rem 3rem; border-radius: 12px;
               box-shadow: 0 4px 18px rgba(0, 0, 0, 0.08); text-align: center; }
        .result { font-size: 1.6rem; margin: 1rem 0 0; }
        .rain { color: #1f5fa8; }
        .dry { color: #b86b00; }
        .error { color: #b3261e; }
    </style>
</head>
<body>
<main>
    <h1>Will it rain tomorrow in {{ location }}?</h1>
    {% if error %}
    <p class="result error">Error: {{ error }}</p>
    {% elif rain_prediction %}
    <p class="result rain">Yes, rain is expected. Take an umbrella.</p>
    {% else %}
    <p class="result dry">No, rain is not expected.</p>
    {% endif %}
</main>
</body>
</html>
"#;
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
    config: TemplateConfig,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Create a new template engine with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded template fails to compile.
    pub fn new() -> Result<Self, TemplateError> {
        Self::with_config(TemplateConfig::default())
    }

    /// Create a new template engine with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to compile, or if a custom
    /// template cannot be read and embedded fallback is disabled.
    pub fn with_config(config: TemplateConfig) -> Result<Self, TemplateError> {
        let mut tera = Tera::default();

        tera.autoescape_on(if config.auto_escape {
            vec![".html", ".htm"]
        } else {
            vec![]
        });

        tera.add_raw_template(INDEX_TEMPLATE, embedded::INDEX)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;

        if let Some(ref dir) = config.templates_dir {
            match load_custom(&mut tera, Path::new(dir)) {
                Ok(0) => debug!(dir = %dir, "No custom templates found"),
                Ok(count) => info!(dir = %dir, count, "Loaded custom templates"),
                Err(e) if config.use_embedded_fallback => {
                    warn!(error = %e, "Custom templates failed to load, using embedded");
                    tera.add_raw_template(INDEX_TEMPLATE, embedded::INDEX)
                        .map_err(|e| TemplateError::Compile(e.to_string()))?;
                },
                Err(e) => return Err(e),
            }
        }

        Ok(Self {
            tera: Arc::new(tera),
            config,
        })
    }

    /// Render a template with the given context
    ///
    /// # Errors
    ///
    /// Returns an error if the template is unknown or rendering fails.
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String, TemplateError> {
        self.tera
            .render(template_name, context)
            .map_err(TemplateError::from)
    }

    /// Render the home page
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_index(&self, page: &IndexPage) -> Result<String, TemplateError> {
        let context = Context::from_serialize(page)?;
        self.render(INDEX_TEMPLATE, &context)
    }

    /// Check if a template exists
    #[must_use]
    pub fn template_exists(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }
}

/// Add the known templates found in `dir`, replacing embedded ones
fn load_custom(tera: &mut Tera, dir: &Path) -> Result<usize, TemplateError> {
    let mut count = 0;
    for name in [INDEX_TEMPLATE] {
        let path = dir.join(name);
        if !path.is_file() {
            continue;
        }
        let source = std::fs::read_to_string(&path).map_err(|e| TemplateError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        tera.add_raw_template(name, &source)
            .map_err(|e| TemplateError::Compile(render_chain(&e)))?;
        debug!(template = %name, "Loaded custom template");
        count += 1;
    }
    Ok(count)
}

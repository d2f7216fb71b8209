//! Template expander
//!
//! Reads `<base><template_suffix>.<ext>`, substitutes every directive with
//! the fragments its resolver produces, and replaces
//! `<base><generated_suffix>.<ext>` only when the content differs.

use crate::config::ExpanderConfig;
use crate::error::{Error, Result};
use crate::resolve::Resolver;
use crate::template::line::{Line, classify_line};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of one expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Generated file already matched; nothing was written
    Unchanged(PathBuf),
    /// Generated file was replaced with new content
    Written(PathBuf),
    /// Generated file differs but check mode forbade writing
    Stale(PathBuf),
}

impl Outcome {
    /// Whether the generated file on disk is current after this run
    pub fn is_current(&self) -> bool {
        !matches!(self, Outcome::Stale(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Unchanged(path) => write!(f, "{} unchanged", path.display()),
            Outcome::Written(path) => write!(f, "Wrote to {}", path.display()),
            Outcome::Stale(path) => write!(f, "{} is out of date", path.display()),
        }
    }
}

/// Expands templates using a config and a resolver
pub struct Expander<R> {
    config: ExpanderConfig,
    resolver: R,
    check: bool,
}

impl<R: Resolver> Expander<R> {
    /// Create an expander that writes changed output
    pub fn new(config: ExpanderConfig, resolver: R) -> Self {
        Self {
            config,
            resolver,
            check: false,
        }
    }

    /// Compare only, never write
    pub fn check_only(mut self, check: bool) -> Self {
        self.check = check;
        self
    }

    /// Expand the template for `base` and update its generated file
    ///
    /// `source_folder` overrides the configured default folder.
    pub fn expand(&self, base: &str, source_folder: Option<&Path>) -> Result<Outcome> {
        let template_path = self.config.template_path(base);
        let generated_path = self.config.generated_path(base);
        let folder = source_folder.unwrap_or(self.config.source_folder.as_path());
        log::debug!(
            "Expanding {} -> {} (sources: {})",
            template_path.display(),
            generated_path.display(),
            folder.display()
        );

        let template = fs::read_to_string(&template_path).map_err(|e| Error::TemplateRead {
            path: template_path.clone(),
            source: e,
        })?;
        let generated = self.generate(&template, folder)?;

        let existing = fs::read(&generated_path).map_err(|e| Error::GeneratedRead {
            path: generated_path.clone(),
            source: e,
        })?;

        if existing == generated.as_bytes() {
            log::debug!("{} bytes match existing output", generated.len());
            return Ok(Outcome::Unchanged(generated_path));
        }

        if self.check {
            return Ok(Outcome::Stale(generated_path));
        }

        fs::write(&generated_path, &generated).map_err(|e| Error::GeneratedWrite {
            path: generated_path.clone(),
            source: e,
        })?;
        log::info!("Wrote {} bytes to {}", generated.len(), generated_path.display());

        Ok(Outcome::Written(generated_path))
    }

    /// Build the generated text for a template's content
    pub fn generate(&self, template: &str, folder: &Path) -> Result<String> {
        let mut generated = String::with_capacity(template.len());

        for (index, text) in template.lines().enumerate() {
            match classify_line(index + 1, text, &self.config.marker)? {
                Line::Literal(text) => {
                    generated.push_str(text);
                    generated.push('\n');
                }
                Line::Directive(name) => {
                    log::debug!("Line {}: resolving '{}'", index + 1, name);
                    for fragment in self.resolver.resolve(name, folder)? {
                        generated.push_str(&fragment?);
                    }
                }
            }
        }

        Ok(generated)
    }
}

//! Directive name resolution
//!
//! A resolver maps a directive name and a source folder to a lazy,
//! single-pass sequence of text fragments. The expander appends the
//! fragments verbatim.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::iter;
use std::path::{Path, PathBuf};

/// Text fragments produced for one directive
pub type Fragments<'a> = Box<dyn Iterator<Item = Result<String>> + 'a>;

/// Source of the content a directive pulls in
pub trait Resolver {
    /// Resolve `name` against `folder`
    fn resolve<'a>(&'a self, name: &str, folder: &Path) -> Result<Fragments<'a>>;
}

/// Embeds a source file as a named multi-line string literal
///
/// `<folder>/<name>.<extension>` becomes:
///
/// ```text
/// name =
///  """
/// ...escaped lines...
/// """
/// ```
pub struct LiteralResolver {
    extension: String,
}

impl LiteralResolver {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    /// Location of the source file for a name
    pub fn source_path(&self, name: &str, folder: &Path) -> Result<PathBuf> {
        if name.is_empty()
            || name == "."
            || name == ".."
            || name.contains(['/', '\\'])
        {
            return Err(Error::InvalidName(name.to_string()));
        }
        Ok(folder.join(format!("{}.{}", name, self.extension)))
    }
}

impl Resolver for LiteralResolver {
    fn resolve<'a>(&'a self, name: &str, folder: &Path) -> Result<Fragments<'a>> {
        let path = self.source_path(name, folder)?;
        let file = File::open(&path).map_err(|e| Error::SourceRead {
            path: path.clone(),
            source: e,
        })?;
        log::debug!("Embedding {} as '{}'", path.display(), name);

        let body = BufReader::new(file).lines().map(move |line| {
            line.map(|l| format!("{}\n", escape(&l)))
                .map_err(|e| Error::SourceRead {
                    path: path.clone(),
                    source: e,
                })
        });

        let fragments = iter::once(Ok(format!("{} =\n", name)))
            .chain(iter::once(Ok(" \"\"\"".to_string())))
            .chain(body)
            .chain(iter::once(Ok("\"\"\"\n\n".to_string())));

        Ok(Box::new(fragments))
    }
}

/// Escape a line for use inside a string literal
fn escape(line: &str) -> String {
    let mut escaped = String::with_capacity(line.len());
    for c in line.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(c),
        }
    }
    escaped
}

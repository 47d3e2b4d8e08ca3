//! Document loading
//!
//! [`DocumentLoader`] holds a source text read from a file, a reader or a string, and runs
//! transforms on it. The CLI and the integration tests go through it.
//!
//! ```rust,ignore
//! use bmd_parser::bmd::loader::DocumentLoader;
//!
//! let html = DocumentLoader::from_path("cours.bmd")?.to_html()?;
//! let tree = DocumentLoader::from_string("# Title\n").parse()?;
//! ```

use crate::bmd::ast::Tree;
use crate::bmd::options::RenderOptions;
use crate::bmd::transforms::standard::{pipeline_for, Target, STRING_TO_HTML, STRING_TO_TREE};
use crate::bmd::transforms::{Transform, TransformError};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read input: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// A source text and shortcuts for the standard transforms.
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoaderError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(DocumentLoader { source })
    }

    /// Read the whole of `reader`, for instance stdin.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, LoaderError> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Ok(DocumentLoader { source })
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    /// Run any transform on the source.
    pub fn with<O: 'static>(&self, transform: &Transform<String, O>) -> Result<O, LoaderError> {
        Ok(transform.run(self.source.clone())?)
    }

    /// The document tree, with the default tab width.
    pub fn parse(&self) -> Result<Tree, LoaderError> {
        self.with(&STRING_TO_TREE)
    }

    /// The HTML fragment, with the default options.
    pub fn to_html(&self) -> Result<String, LoaderError> {
        self.with(&STRING_TO_HTML)
    }

    /// Render to `target` with explicit options.
    pub fn render(&self, target: Target, options: &RenderOptions) -> Result<String, LoaderError> {
        self.with(&pipeline_for(target, options))
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_string() {
        let loader = DocumentLoader::from_string("para\n");
        assert_eq!(loader.source(), "para\n");
        assert_eq!(loader.to_html().unwrap(), "<p>para</p>\n");
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "# Title\n\nSome text.\n").unwrap();
        let loader = DocumentLoader::from_path(file.path()).unwrap();
        assert_eq!(loader.parse().unwrap().visible().count(), 2);
    }

    #[test]
    fn test_from_path_nonexistent() {
        let err = DocumentLoader::from_path("/nonexistent/cours.bmd").unwrap_err();
        assert!(matches!(err, LoaderError::Read { .. }));
        assert!(err.to_string().starts_with("cannot read /nonexistent/cours.bmd:"));
    }

    #[test]
    fn test_from_reader() {
        let loader = DocumentLoader::from_reader("- a\n".as_bytes()).unwrap();
        assert!(loader.to_html().unwrap().starts_with("<ul>\n"));
    }

    #[test]
    fn test_render_with_options() {
        let loader = DocumentLoader::from_string("a\n");
        let options = RenderOptions {
            line_numbers: true,
            ..RenderOptions::default()
        };
        assert_eq!(
            loader.render(Target::Html, &options).unwrap(),
            "0001\t<p>a</p>\n"
        );
    }

    #[test]
    fn test_loader_is_reusable() {
        let loader = DocumentLoader::from_string("a\n");
        assert_eq!(loader.to_html().unwrap(), loader.to_html().unwrap());
    }
}

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for vpxgen-props operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'git submodule update --init' to fetch the vendored libvpx checkout"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse props file")]
    #[diagnostic(code(vpxgen::props::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: roxmltree::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(vpxgen::props::invalid_project))]
    InvalidProject {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Create a parse error from a roxmltree error with source context
    pub fn parse(source: roxmltree::Error, src: &str, filename: &str) -> Box<Self> {
        let span = offset_of(src, source.pos()).map(|offset| SourceSpan::new(offset.into(), 0));
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create an invalid-project error pointing at a byte range
    pub fn invalid_project_at(
        message: impl Into<String>,
        src: &str,
        filename: &str,
        span: impl Into<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::InvalidProject {
            src: NamedSource::new(filename, src.to_string()),
            span: Some(span.into()),
            message: message.into(),
        })
    }
}

/// Convert a 1-based row/column position into a byte offset into `src`.
fn offset_of(src: &str, pos: roxmltree::TextPos) -> Option<usize> {
    let row = pos.row.checked_sub(1)? as usize;
    let line_start = if row == 0 {
        0
    } else {
        src.match_indices('\n').nth(row - 1).map(|(i, _)| i + 1)?
    };
    Some(line_start + pos.col.saturating_sub(1) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of_first_line() {
        let src = "abc\ndef\n";
        let pos = roxmltree::TextPos { row: 1, col: 2 };
        assert_eq!(offset_of(src, pos), Some(1));
    }

    #[test]
    fn test_offset_of_later_line() {
        let src = "abc\ndef\nghi\n";
        let pos = roxmltree::TextPos { row: 3, col: 1 };
        assert_eq!(offset_of(src, pos), Some(8));
    }

    #[test]
    fn test_offset_of_row_past_end() {
        let src = "abc\n";
        let pos = roxmltree::TextPos { row: 9, col: 1 };
        assert_eq!(offset_of(src, pos), None);
    }
}

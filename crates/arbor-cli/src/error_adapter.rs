//! Rendering [`ArborError`] through miette.
//!
//! A parse failure carries exactly one [`Diagnostic`] plus the source it
//! points into, and becomes a report with labeled spans. Every other variant
//! becomes a plain report with an `arbor::*` code.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceCode, SourceSpan};

use arbor::ArborError;
use arbor_parser::{Span, error::Diagnostic};

/// One miette report for a failed CLI run.
#[derive(Debug)]
pub enum Report<'a> {
    /// The parser diagnostic and the notation it refers to.
    Parse { diag: &'a Diagnostic, src: &'a str },
    /// Any failure without a source location.
    Other(&'a ArborError),
}

impl<'a> Report<'a> {
    /// Build the report for `err`.
    pub fn new(err: &'a ArborError) -> Self {
        match err {
            ArborError::Parse { err, src } => Report::Parse {
                diag: err.diagnostic(),
                src,
            },
            _ => Report::Other(err),
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Parse { diag, .. } => f.write_str(diag.message()),
            Report::Other(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Report<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Report::Parse { .. } => None,
            Report::Other(err) => err.source(),
        }
    }
}

impl MietteDiagnostic for Report<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let name = match self {
            Report::Parse { diag, .. } => {
                return diag.code().map(|code| Box::new(code) as Box<dyn fmt::Display>);
            }
            Report::Other(ArborError::Io(_)) => "arbor::io",
            Report::Other(ArborError::Config(_)) => "arbor::config",
            Report::Other(ArborError::Export(_)) => "arbor::export",
            Report::Other(ArborError::Parse { .. }) => "arbor::parse",
        };
        Some(Box::new(name))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Report::Parse { diag, .. } => diag
                .help()
                .map(|help| Box::new(help) as Box<dyn fmt::Display>),
            Report::Other(ArborError::Config(_)) => Some(Box::new(
                "colors accept CSS names and hex values; engine is `basic` or `contour`",
            )),
            Report::Other(_) => None,
        }
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        match self {
            Report::Parse { src, .. } => Some(src as &dyn SourceCode),
            Report::Other(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let Report::Parse { diag, .. } = self else {
            return None;
        };
        if diag.labels().is_empty() {
            return None;
        }

        Some(Box::new(diag.labels().iter().map(|label| {
            let span = source_span(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

fn source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

#[cfg(test)]
mod tests {
    use arbor_parser::error::{ErrorCode, ParseError};

    use super::*;

    fn code_of(report: &Report<'_>) -> Option<String> {
        report.code().map(|code| code.to_string())
    }

    #[test]
    fn test_parse_error_report() {
        let diag = Diagnostic::error("unclosed bracket")
            .with_code(ErrorCode::E101)
            .with_label(Span::new(4..5), "this `[` is never closed")
            .with_secondary_label(Span::new(8..8), "input ends here")
            .with_help("add a matching `]`");
        let err = ArborError::new_parse_error(ParseError::from(diag), "[CP [+WH");

        let report = Report::new(&err);

        assert_eq!(report.to_string(), "unclosed bracket");
        assert_eq!(code_of(&report).as_deref(), Some("E101"));
        assert_eq!(
            report.help().map(|help| help.to_string()).as_deref(),
            Some("add a matching `]`")
        );
        assert!(report.source_code().is_some());

        let labels: Vec<_> = report.labels().expect("parse reports carry labels").collect();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].label(), Some("this `[` is never closed"));
        assert!(labels[0].primary());
        assert_eq!(labels[0].offset(), 4);
        assert_eq!(labels[1].label(), Some("input ends here"));
        assert!(!labels[1].primary());
    }

    #[test]
    fn test_config_error_report() {
        let err = ArborError::Config("bad color".to_string());

        let report = Report::new(&err);

        assert_eq!(report.to_string(), "Configuration error: bad color");
        assert_eq!(code_of(&report).as_deref(), Some("arbor::config"));
        assert!(report.help().is_some());
        assert!(report.labels().is_none());
        assert!(report.source_code().is_none());
    }

    #[test]
    fn test_io_error_report() {
        let err = ArborError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing.tree",
        ));

        let report = Report::new(&err);

        assert_eq!(code_of(&report).as_deref(), Some("arbor::io"));
        assert!(report.help().is_none());
    }

    #[test]
    fn test_rendered_report_names_code_and_source() {
        let err = ArborError::new_parse_error(
            ParseError::from(
                Diagnostic::error("extra trailing input")
                    .with_code(ErrorCode::E103)
                    .with_label(Span::new(4..7), "not part of the tree"),
            ),
            "[A] [B]",
        );

        let mut out = String::new();
        miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor())
            .render_report(&mut out, &Report::new(&err))
            .expect("render to string");

        assert!(out.contains("E103"));
        assert!(out.contains("extra trailing input"));
        assert!(out.contains("not part of the tree"));
    }
}

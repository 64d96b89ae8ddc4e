use miette::{Diagnostic, SourceSpan};
use nom::error::ErrorKind;
use thiserror::Error;

use crate::atoms::errors::AtomicLookupError;

pub type Result<T, E = Box<CompositionError>> = std::result::Result<T, E>;

/// A chemical formula that could not be parsed, with the offending region of the formula labeled
#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
#[error("{kind}")]
pub struct CompositionError {
    #[source_code]
    formula: String,
    #[label("{label}")]
    span: SourceSpan,
    label: &'static str,
    #[help]
    help: Option<String>,
    kind: CompositionErrorKind,
}

#[derive(Clone, Eq, PartialEq, Debug, Diagnostic, Error)]
pub enum CompositionErrorKind {
    #[error(
        "expected an element (like Au) or an isotope (like [15N]) optionally followed by a number"
    )]
    ExpectedAtomicOffset,

    #[diagnostic(help(
        "a count of 1 is implied when no number is given, and counts of 0 should be left out entirely"
    ))]
    #[error("counts cannot start with 0")]
    ExpectedNoLeadingZero,

    #[error("expected an ASCII digit 1-9")]
    ExpectedDigit,

    #[error("expected an element symbol")]
    ExpectedElementSymbol,

    #[error("expected '[' to open isotope brackets")]
    ExpectedIsotopeStart,

    #[error("expected an isotopic mass number")]
    ExpectedMassNumber,

    #[diagnostic(help("you've probably forgotten to close an earlier '[' bracket"))]
    #[error("expected ']' to close isotope brackets")]
    ExpectedIsotopeEnd,

    #[error("expected an uppercase ASCII letter")]
    ExpectedUppercase,

    #[error("expected a lowercase ASCII letter")]
    ExpectedLowercase,

    #[diagnostic(transparent)]
    #[error(transparent)]
    LookupError(Box<AtomicLookupError>),

    #[diagnostic(help(
        "this is an internal error that you shouldn't ever see! If you have gotten this error, \
        then please report it as a bug!"
    ))]
    #[error("internal `nom` error: {0:?}")]
    NomError(ErrorKind),

    #[diagnostic(help(
        "check the unparsed region for errors, or remove it from the rest of the formula"
    ))]
    #[error("could not interpret the full input as a valid chemical formula")]
    Incomplete,
}

impl CompositionError {
    pub(crate) fn new(formula: &str, offset: usize, length: usize, kind: CompositionErrorKind) -> Self {
        // NOTE: The additional space is added so that labels can point to the end of an input
        let formula = format!("{formula} ");
        let span = SourceSpan::from(offset..offset + length);
        let label = kind.label();
        let help = kind.help().map(|h| h.to_string());
        Self {
            formula,
            span,
            label,
            help,
            kind,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &CompositionErrorKind {
        &self.kind
    }

    #[must_use]
    pub const fn span(&self) -> SourceSpan {
        self.span
    }
}

impl CompositionErrorKind {
    fn label(&self) -> &'static str {
        match self {
            // NOTE: Stuck with this nested match until either `box_patterns` or `deref_patterns` are stabilized
            Self::LookupError(e) => match **e {
                AtomicLookupError::Element(..) => "element not found",
                AtomicLookupError::Isotope(..) => "isotope not found",
            },
            Self::ExpectedAtomicOffset => "expected an element or isotope",
            Self::ExpectedUppercase => "expected uppercase",
            Self::ExpectedLowercase => "expected lowercase",
            Self::ExpectedDigit => "expected digit",
            Self::ExpectedElementSymbol => "expected an element symbol",
            Self::ExpectedIsotopeStart => "expected '['",
            Self::ExpectedIsotopeEnd => "expected ']'",
            Self::ExpectedMassNumber => "expected a mass number",
            Self::ExpectedNoLeadingZero => "expected non-zero",
            Self::Incomplete => "input was valid up until this point",
            Self::NomError(_) => "the region that triggered this bug!",
        }
    }
}

impl From<AtomicLookupError> for CompositionErrorKind {
    fn from(value: AtomicLookupError) -> Self {
        Self::LookupError(Box::new(value))
    }
}

impl From<ErrorKind> for CompositionErrorKind {
    fn from(value: ErrorKind) -> Self {
        match value {
            ErrorKind::Eof => Self::Incomplete,
            kind => Self::NomError(kind),
        }
    }
}

//! Error types for address range parsing.

use std::fmt;

use crate::constants::EXPECTED_FORMAT;

/// Errors that can occur when parsing an address range.
///
/// The `Display` output starts with the caller-supplied prefix, followed by
/// the offending input and the expected address shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// Prefix prepended to the rendered message
    pub prefix: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(input: &str, prefix: &str, kind: ParseErrorKind) -> Self {
        Self {
            input: input.to_string(),
            prefix: prefix.to_string(),
            kind,
        }
    }
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Address string is empty
    EmptyAddress,
    /// Host portion is empty after extraction
    EmptyHost,
    /// Unbalanced or misplaced bracket around an IPv6 literal
    MalformedIpv6 {
        /// Reason for invalidity
        reason: &'static str,
    },
    /// More than one colon outside brackets, and the input is not a bare IPv6 address
    AmbiguousIpv6WithoutBrackets,
    /// A port token is non-numeric or outside 0-65535
    InvalidPort {
        /// The offending token
        token: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// Range lower bound is greater than its upper bound
    InvalidPortRange {
        /// Lower bound as given
        from: u16,
        /// Upper bound as given
        to: u16,
    },
    /// Structurally invalid input not covered by the other kinds
    MalformedAddress {
        /// The unexpected trailing text
        trailing: String,
    },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAddress => write!(f, "address is empty"),
            Self::EmptyHost => write!(f, "host is empty"),
            Self::MalformedIpv6 { reason } => write!(f, "malformed IPv6 literal: {reason}"),
            Self::AmbiguousIpv6WithoutBrackets => write!(
                f,
                "multiple colons outside brackets; enclose IPv6 addresses in '[' and ']' when a port follows"
            ),
            Self::InvalidPort { token, reason } => write!(f, "invalid port '{token}': {reason}"),
            Self::InvalidPortRange { from, to } => {
                write!(f, "port range start {from} is greater than end {to}")
            }
            Self::MalformedAddress { trailing } => {
                write!(f, "unexpected '{trailing}' after closing bracket; expected ':' and a port")
            }
        }
    }
}

impl std::error::Error for ParseErrorKind {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}failed to parse address '{}': {}; expected {EXPECTED_FORMAT}",
            self.prefix, self.input, self.kind
        )
    }
}

impl std::error::Error for ParseError {}

/// Errors for port and port range construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortRangeError {
    /// A port token is non-numeric or outside 0-65535
    InvalidPort {
        /// The offending token
        token: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// Lower bound is greater than upper bound
    Reversed {
        /// Lower bound as given
        from: u16,
        /// Upper bound as given
        to: u16,
    },
}

impl fmt::Display for PortRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort { token, reason } => write!(f, "invalid port '{token}': {reason}"),
            Self::Reversed { from, to } => {
                write!(f, "port range start {from} is greater than end {to}")
            }
        }
    }
}

impl std::error::Error for PortRangeError {}

impl From<PortRangeError> for ParseErrorKind {
    fn from(err: PortRangeError) -> Self {
        match err {
            PortRangeError::InvalidPort { token, reason } => Self::InvalidPort { token, reason },
            PortRangeError::Reversed { from, to } => Self::InvalidPortRange { from, to },
        }
    }
}

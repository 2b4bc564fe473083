//! Address range parser and its options.
//!
//! # Grammar Reference
//!
//! The address grammar is defined in `grammar.abnf`:
//!
//! ```abnf
//! address   = ip-literal [ ":" port-spec ]
//!           / host [ ":" port-spec ]
//!           / bare-ipv6
//! ip-literal = "[" 1*( %x21-5A / %x5C / %x5E-7E ) "]"
//! ```
//!
//! An unbracketed input with two or more colons is accepted only when the
//! whole input is an IPv6 address; a trailing port cannot be told apart from
//! the address's own groups, so such input must use the bracketed form.

use std::net::Ipv6Addr;

use crate::address_range::AddressRange;
use crate::constants::PORT_SEPARATOR;
use crate::error::{ParseError, ParseErrorKind};
use crate::port_range::PortRange;

/// Options controlling how an [`AddressRangeParser`] fills in and reports.
///
/// # Examples
///
/// ```
/// use host_port_range::{ParseOptions, PortRange};
///
/// let options = ParseOptions::new()
///     .with_default_ports(PortRange::new(47500, 47509).unwrap())
///     .with_error_prefix("discovery: ");
/// assert_eq!(options.default_ports.count(), 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParseOptions {
    /// Ports used when the input carries no port specification.
    ///
    /// Default: the single port 0
    pub default_ports: PortRange,

    /// Text prepended to every error message.
    ///
    /// Default: empty
    pub error_prefix: String,
}

impl ParseOptions {
    /// Creates options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ports applied when the input has none.
    #[must_use]
    pub const fn with_default_ports(mut self, ports: PortRange) -> Self {
        self.default_ports = ports;
        self
    }

    /// Sets the error message prefix.
    #[must_use]
    pub fn with_error_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.error_prefix = prefix.into();
        self
    }
}

/// Parses `host[:port[..port]]` strings into [`AddressRange`] values.
///
/// The parser holds only its options and may be shared freely across threads.
///
/// # Examples
///
/// ```
/// use host_port_range::{AddressRangeParser, ParseOptions, PortRange};
///
/// let parser = AddressRangeParser::new(
///     ParseOptions::new().with_default_ports(PortRange::new(18360, 18362).unwrap()),
/// );
///
/// let range = parser.parse("[::1]:8080..8090").unwrap();
/// assert_eq!(range.host(), "::1");
/// assert_eq!((range.port_from(), range.port_to()), (8080, 8090));
///
/// let range = parser.parse("127.0.0.1").unwrap();
/// assert_eq!((range.port_from(), range.port_to()), (18360, 18362));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AddressRangeParser {
    options: ParseOptions,
}

impl AddressRangeParser {
    /// Creates a parser with the given options.
    #[must_use]
    pub const fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Returns the parser's options.
    #[must_use]
    pub const fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parses an address range.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the input is empty, has an empty host, has
    /// unbalanced brackets, has unbracketed IPv6 with a port, has an invalid
    /// port token, or has a reversed port range.
    pub fn parse(&self, input: &str) -> Result<AddressRange, ParseError> {
        let defaults = self.options.default_ports;
        parse(
            input,
            defaults.from(),
            defaults.to(),
            &self.options.error_prefix,
        )
    }
}

pub(crate) fn parse(
    input: &str,
    default_port_from: u16,
    default_port_to: u16,
    error_prefix: &str,
) -> Result<AddressRange, ParseError> {
    let result = parse_kind(input, default_port_from, default_port_to)
        .map_err(|kind| ParseError::new(input, error_prefix, kind));

    #[cfg(feature = "tracing")]
    if let Err(err) = &result {
        tracing::debug!(input, error = %err.kind, "rejected address range");
    }

    result
}

fn parse_kind(
    input: &str,
    default_port_from: u16,
    default_port_to: u16,
) -> Result<AddressRange, ParseErrorKind> {
    if input.is_empty() {
        return Err(ParseErrorKind::EmptyAddress);
    }

    let (host, port_spec) = split_host(input)?;

    if host.is_empty() {
        return Err(ParseErrorKind::EmptyHost);
    }

    // Defaults are checked only when they are actually applied
    let ports = match port_spec {
        Some(spec) => PortRange::parse(spec)?,
        None => PortRange::new(default_port_from, default_port_to)?,
    };

    Ok(AddressRange::from_parts(host.to_string(), ports))
}

/// Splits the input into host and optional port specification.
fn split_host(input: &str) -> Result<(&str, Option<&str>), ParseErrorKind> {
    if let Some(rest) = input.strip_prefix('[') {
        return split_bracketed(rest);
    }

    if input.contains(['[', ']']) {
        return Err(ParseErrorKind::MalformedIpv6 {
            reason: "brackets must enclose the whole host",
        });
    }

    match input.matches(PORT_SEPARATOR).count() {
        0 => Ok((input, None)),
        1 => Ok(input
            .split_once(PORT_SEPARATOR)
            .map_or((input, None), |(host, spec)| (host, Some(spec)))),
        _ if input.parse::<Ipv6Addr>().is_ok() => Ok((input, None)),
        _ => Err(ParseErrorKind::AmbiguousIpv6WithoutBrackets),
    }
}

/// Splits the remainder of a bracketed literal, opening bracket already consumed.
fn split_bracketed(rest: &str) -> Result<(&str, Option<&str>), ParseErrorKind> {
    let closing = rest.find(']').ok_or(ParseErrorKind::MalformedIpv6 {
        reason: "missing closing bracket",
    })?;

    let host = &rest[..closing];
    let after = &rest[closing + 1..];

    if host.contains('[') || after.contains(['[', ']']) {
        return Err(ParseErrorKind::MalformedIpv6 {
            reason: "unbalanced brackets",
        });
    }

    if after.is_empty() {
        return Ok((host, None));
    }

    after
        .strip_prefix(PORT_SEPARATOR)
        .map(|spec| (host, Some(spec)))
        .ok_or_else(|| ParseErrorKind::MalformedAddress {
            trailing: after.to_string(),
        })
}

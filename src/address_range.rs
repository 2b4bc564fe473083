//! The parsed host and port range value.

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::constants::PORT_SEPARATOR;
use crate::error::{ParseError, ParseErrorKind, PortRangeError};
use crate::host::{self, HostKind};
use crate::parser;
use crate::port_range::PortRange;

/// A host together with an inclusive port range.
///
/// IPv6 hosts are stored without surrounding brackets. Two values are equal
/// when host, lower port and upper port are all equal; hashing and ordering
/// follow the same fields, so values can be used as map keys or kept sorted.
///
/// # Examples
///
/// ```
/// use host_port_range::AddressRange;
///
/// let range = AddressRange::parse("127.0.0.1:8080..8090", 18360, 18362, "").unwrap();
/// assert_eq!(range.host(), "127.0.0.1");
/// assert_eq!(range.port_from(), 8080);
/// assert_eq!(range.port_to(), 8090);
///
/// let range = AddressRange::parse("127.0.0.1", 18360, 18362, "").unwrap();
/// assert_eq!((range.port_from(), range.port_to()), (18360, 18362));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AddressRange {
    host: String,
    ports: PortRange,
}

impl AddressRange {
    /// Parses `host[:port[..port]]`, applying the default ports when the
    /// input carries no port specification.
    ///
    /// `error_prefix` is prepended to the message of any returned error.
    ///
    /// The defaults are only checked when applied: if the input has no port
    /// and `default_port_from > default_port_to`, parsing fails with
    /// `ParseErrorKind::InvalidPortRange` rather than producing a range whose
    /// start lies above its end.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The address or its host is empty
    /// - Brackets around an IPv6 literal are missing or unbalanced
    /// - An unbracketed input has several colons and is not a bare IPv6 address
    /// - A port is not a decimal number in 0-65535
    /// - A port range, or the defaults when applied, has its start above its end
    /// - Anything but `:` follows a bracketed host
    pub fn parse(
        address: &str,
        default_port_from: u16,
        default_port_to: u16,
        error_prefix: &str,
    ) -> Result<Self, ParseError> {
        parser::parse(address, default_port_from, default_port_to, error_prefix)
    }

    /// Creates an address range from its parts.
    ///
    /// # Errors
    ///
    /// Returns `ParseErrorKind::EmptyHost` if `host` is empty,
    /// `ParseErrorKind::MalformedIpv6` if `host` contains `[` or `]`, or
    /// `ParseErrorKind::InvalidPortRange` if `port_from > port_to`.
    pub fn new(
        host: impl Into<String>,
        port_from: u16,
        port_to: u16,
    ) -> Result<Self, ParseErrorKind> {
        let host = host.into();
        if host.is_empty() {
            return Err(ParseErrorKind::EmptyHost);
        }
        // Brackets only delimit IPv6 literals; the stored host never has them
        if host.contains(['[', ']']) {
            return Err(ParseErrorKind::MalformedIpv6 {
                reason: "host must not contain brackets",
            });
        }
        let ports = PortRange::new(port_from, port_to)?;
        Ok(Self { host, ports })
    }

    pub(crate) const fn from_parts(host: String, ports: PortRange) -> Self {
        Self { host, ports }
    }

    /// Returns the host, without brackets for IPv6 literals.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the lower (or only) port.
    #[must_use]
    pub const fn port_from(&self) -> u16 {
        self.ports.from()
    }

    /// Returns the upper port; equal to `port_from` for a single port.
    #[must_use]
    pub const fn port_to(&self) -> u16 {
        self.ports.to()
    }

    /// Returns the port range.
    #[must_use]
    pub const fn ports(&self) -> PortRange {
        self.ports
    }

    /// Classifies the host as an IPv4 literal, IPv6 literal or hostname.
    #[must_use]
    pub fn host_kind(&self) -> HostKind {
        HostKind::classify(&self.host)
    }

    /// Returns the host as an IP address, if it is a literal.
    #[must_use]
    pub fn ip(&self) -> Option<IpAddr> {
        self.host_kind().ip()
    }

    /// Returns true if the host names the local machine.
    #[must_use]
    pub fn is_loopback(&self) -> bool {
        host::is_loopback(&self.host)
    }

    /// Returns a copy with a different port range.
    ///
    /// # Errors
    ///
    /// Returns `PortRangeError::Reversed` if `port_from > port_to`.
    ///
    /// # Examples
    ///
    /// ```
    /// use host_port_range::AddressRange;
    ///
    /// let range = AddressRange::parse("localhost", 0, 0, "").unwrap();
    /// let widened = range.with_ports(8080, 8090).unwrap();
    /// assert_eq!(widened.port_to(), 8090);
    /// ```
    pub fn with_ports(&self, port_from: u16, port_to: u16) -> Result<Self, PortRangeError> {
        Ok(Self {
            host: self.host.clone(),
            ports: PortRange::new(port_from, port_to)?,
        })
    }

    /// Returns every socket address in the range, or `None` for hostnames.
    ///
    /// No name resolution is performed.
    ///
    /// # Examples
    ///
    /// ```
    /// use host_port_range::AddressRange;
    ///
    /// let range = AddressRange::parse("[::1]:8080..8081", 0, 0, "").unwrap();
    /// let addrs: Vec<_> = range.socket_addrs().unwrap().collect();
    /// assert_eq!(addrs.len(), 2);
    /// assert_eq!(addrs[1].to_string(), "[::1]:8081");
    /// ```
    #[must_use]
    pub fn socket_addrs(&self) -> Option<impl Iterator<Item = SocketAddr>> {
        let ip = self.ip()?;
        Some(self.ports.iter().map(move |port| SocketAddr::new(ip, port)))
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(PORT_SEPARATOR) {
            write!(f, "[{}]{PORT_SEPARATOR}{}", self.host, self.ports)
        } else {
            write!(f, "{}{PORT_SEPARATOR}{}", self.host, self.ports)
        }
    }
}

impl FromStr for AddressRange {
    type Err = ParseError;

    /// Parses with port 0 as the default and no error prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, 0, 0, "")
    }
}

impl TryFrom<&str> for AddressRange {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AddressRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AddressRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

//! Inclusive port range type.
//!
//! # Grammar Reference
//!
//! ```abnf
//! port-spec = port [ ".." port ]
//! port      = 1*5DIGIT   ; 0-65535
//! ```

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::constants::{MAX_PORT, MIN_PORT, RANGE_SEPARATOR};
use crate::error::PortRangeError;

/// A validated, inclusive range of ports.
///
/// A single port is a range whose bounds are equal.
///
/// # Examples
///
/// ```
/// use host_port_range::PortRange;
///
/// let range = PortRange::parse("8080..8090").unwrap();
/// assert_eq!(range.from(), 8080);
/// assert_eq!(range.to(), 8090);
/// assert_eq!(range.count(), 11);
///
/// let single = PortRange::parse("443").unwrap();
/// assert!(single.is_single());
/// ```
///
/// The default range is the single port 0, conventionally "any port" when binding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortRange {
    from: u16,
    to: u16,
}

impl PortRange {
    /// Creates a range from its inclusive bounds.
    ///
    /// # Errors
    ///
    /// Returns `PortRangeError::Reversed` if `from > to`.
    pub const fn new(from: u16, to: u16) -> Result<Self, PortRangeError> {
        if from > to {
            return Err(PortRangeError::Reversed { from, to });
        }
        Ok(Self { from, to })
    }

    /// Creates a range covering exactly one port.
    #[must_use]
    pub const fn single(port: u16) -> Self {
        Self { from: port, to: port }
    }

    /// Parses a port specification: either `port` or `port..port`.
    ///
    /// # Errors
    ///
    /// Returns `PortRangeError` if:
    /// - A port token is empty, contains anything but decimal digits, or exceeds 65535
    /// - The lower bound is greater than the upper bound
    pub fn parse(spec: &str) -> Result<Self, PortRangeError> {
        match spec.split_once(RANGE_SEPARATOR) {
            Some((from, to)) => Self::new(Self::parse_port(from)?, Self::parse_port(to)?),
            None => Self::parse_port(spec).map(Self::single),
        }
    }

    /// Returns the lower bound.
    #[must_use]
    pub const fn from(&self) -> u16 {
        self.from
    }

    /// Returns the upper bound.
    #[must_use]
    pub const fn to(&self) -> u16 {
        self.to
    }

    /// Returns true if the range covers exactly one port.
    #[must_use]
    pub const fn is_single(&self) -> bool {
        self.from == self.to
    }

    /// Returns the number of ports in the range (always at least 1).
    #[must_use]
    pub fn count(&self) -> u32 {
        u32::from(self.to) - u32::from(self.from) + 1
    }

    /// Returns true if `port` lies within the range.
    #[must_use]
    pub const fn contains(&self, port: u16) -> bool {
        self.from <= port && port <= self.to
    }

    /// Returns an iterator over every port in the range.
    #[must_use]
    pub const fn iter(&self) -> RangeInclusive<u16> {
        self.from..=self.to
    }

    fn parse_port(token: &str) -> Result<u16, PortRangeError> {
        if token.is_empty() {
            return Err(PortRangeError::InvalidPort {
                token: String::new(),
                reason: "port is empty",
            });
        }

        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PortRangeError::InvalidPort {
                token: token.to_string(),
                reason: "port must contain only decimal digits",
            });
        }

        token
            .parse::<u32>()
            .ok()
            .filter(|port| (u32::from(MIN_PORT)..=u32::from(MAX_PORT)).contains(port))
            .and_then(|port| u16::try_from(port).ok())
            .ok_or_else(|| PortRangeError::InvalidPort {
                token: token.to_string(),
                reason: "port must be 0-65535",
            })
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.from)
        } else {
            write!(f, "{}{RANGE_SEPARATOR}{}", self.from, self.to)
        }
    }
}

impl FromStr for PortRange {
    type Err = PortRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for PortRange {
    type Error = PortRangeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl IntoIterator for PortRange {
    type Item = u16;
    type IntoIter = RangeInclusive<u16>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &PortRange {
    type Item = u16;
    type IntoIter = RangeInclusive<u16>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PortRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PortRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

//! Constants for address range parsing.

/// Lowest valid port number.
pub const MIN_PORT: u16 = 0;

/// Highest valid port number.
pub const MAX_PORT: u16 = u16::MAX;

/// Separator between the host and the port specification.
pub const PORT_SEPARATOR: char = ':';

/// Separator between the two ends of a port range.
pub const RANGE_SEPARATOR: &str = "..";

/// Human-readable shape of an accepted address, used in error messages.
pub const EXPECTED_FORMAT: &str = "host[:port[..port]]";

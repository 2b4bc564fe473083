//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use host_port_range::prelude::*;
//!
//! let range = AddressRange::parse("localhost:8080", 0, 0, "").unwrap();
//! assert_eq!(range.ports(), PortRange::single(8080));
//! ```

pub use crate::{
    // Core types
    AddressRange, HostKind, PortRange,
    // Parser
    AddressRangeParser, ParseOptions,
    // Errors
    ParseError, ParseErrorKind, PortRangeError,
    // Constants
    EXPECTED_FORMAT, MAX_PORT, MIN_PORT, PORT_SEPARATOR, RANGE_SEPARATOR,
};

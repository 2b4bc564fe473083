//! Parser and validator for host and port range specifications.
//!
//! This crate turns strings such as `127.0.0.1:8080..8090`, `[::1]:8080` or
//! `node.example.com` into a validated [`AddressRange`] suitable for binding
//! listeners or connecting to remote endpoints.
//!
//! # Overview
//!
//! Accepted input has the shape:
//!
//! ```text
//! host[:port[..port]]
//! [ipv6][:port[..port]]
//! ```
//!
//! When the port specification is omitted, caller-supplied default ports are
//! applied. IPv6 literals must be bracketed when a port follows, since the
//! port separator is also the IPv6 group separator.
//!
//! # Quick Start
//!
//! ```rust
//! use host_port_range::AddressRange;
//!
//! let range = AddressRange::parse("[::1]:8080..8090", 18360, 18362, "").unwrap();
//! assert_eq!(range.host(), "::1");
//! assert_eq!(range.port_from(), 8080);
//! assert_eq!(range.port_to(), 8090);
//!
//! // Without a port the defaults apply
//! let range = AddressRange::parse("127.0.0.1", 18360, 18362, "").unwrap();
//! assert_eq!((range.port_from(), range.port_to()), (18360, 18362));
//!
//! // Unbracketed IPv6 followed by a port is rejected
//! let err = AddressRange::parse("3ffe:2a00:100:7031:::8080", 0, 0, "config: ").unwrap_err();
//! assert!(err.to_string().starts_with("config: "));
//! ```
//!
//! # Reusable Parser
//!
//! ```rust
//! use host_port_range::{AddressRangeParser, ParseOptions, PortRange};
//!
//! let parser = AddressRangeParser::new(
//!     ParseOptions::new()
//!         .with_default_ports(PortRange::new(47500, 47509).unwrap())
//!         .with_error_prefix("discovery: "),
//! );
//!
//! let range = parser.parse("localhost").unwrap();
//! assert_eq!(range.ports().count(), 10);
//! ```
//!
//! # Grammar Specification
//!
//! The accepted grammar is defined in `grammar.abnf` at the crate root.
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `serde` | `Serialize`/`Deserialize` for values and options |
//! | `tracing` | `debug` event for every rejected input |

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod address_range;
mod constants;
mod error;
mod host;
#[cfg(kani)]
mod kani_impls;
mod parser;
mod port_range;
pub mod prelude;

pub use address_range::AddressRange;
pub use constants::{EXPECTED_FORMAT, MAX_PORT, MIN_PORT, PORT_SEPARATOR, RANGE_SEPARATOR};
pub use error::{ParseError, ParseErrorKind, PortRangeError};
pub use host::HostKind;
pub use parser::{AddressRangeParser, ParseOptions};
pub use port_range::PortRange;

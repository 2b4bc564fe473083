//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{AddressRange, ParseErrorKind, PortRange};

/// Characters that exercise every branch of the address grammar
const ADDRESS_CHARS: &[u8] = b"a1:.[]";

/// Generate a short string over `ADDRESS_CHARS`
fn arbitrary_address(max_len: usize) -> String {
    let len: usize = kani::any();
    let len = len % (max_len + 1);
    (0..len)
        .map(|_| {
            let idx: usize = kani::any();
            ADDRESS_CHARS[idx % ADDRESS_CHARS.len()] as char
        })
        .collect()
}

impl kani::Arbitrary for PortRange {
    fn any() -> Self {
        let from: u16 = kani::any();
        let to: u16 = kani::any();
        kani::assume(from <= to);
        PortRange::new(from, to).expect("ordered bounds by construction")
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: Constructed ranges always satisfy from <= to
#[kani::proof]
fn proof_port_range_ordered() {
    let range: PortRange = kani::any();
    assert!(range.from() <= range.to());
    assert!(range.count() >= 1);
}

/// Proof: Reversed bounds are always rejected
#[kani::proof]
fn proof_reversed_bounds_rejected() {
    let from: u16 = kani::any();
    let to: u16 = kani::any();
    kani::assume(from > to);
    assert!(PortRange::new(from, to).is_err());
}

/// Proof: Parsing never panics and successful results hold the invariants
#[kani::proof]
#[kani::unwind(8)]
fn proof_parse_never_panics() {
    let input = arbitrary_address(6);
    let defaults: PortRange = kani::any();
    if let Ok(range) = AddressRange::parse(&input, defaults.from(), defaults.to(), "") {
        assert!(!range.host().is_empty());
        assert!(range.port_from() <= range.port_to());
    }
}

/// Proof: Input without a port always yields the defaults
#[kani::proof]
#[kani::unwind(8)]
fn proof_defaults_applied() {
    let defaults: PortRange = kani::any();
    let result = AddressRange::parse("a.a", defaults.from(), defaults.to(), "");
    let range = result.expect("hostname without port parses");
    assert_eq!(range.ports(), defaults);
}

/// Proof: An empty host is always rejected
#[kani::proof]
fn proof_empty_host_rejected() {
    let port: u16 = kani::any();
    let input = format!(":{port}");
    let err = AddressRange::parse(&input, 0, 0, "").expect_err("empty host");
    assert_eq!(err.kind, ParseErrorKind::EmptyHost);
}

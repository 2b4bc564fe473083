//! Property-based tests validating the parser against the address grammar.
//!
//! These tests generate random inputs according to grammar constraints and
//! verify the parser accepts them with the expected values, and rejects the
//! shapes the grammar excludes.

use std::collections::HashSet;

use proptest::prelude::*;

use host_port_range::{AddressRange, AddressRangeParser, ParseErrorKind, ParseOptions, PortRange};

/// Strategies for generating grammar-conformant inputs.
mod strategies {
    use super::*;

    /// Valid alphanumeric characters for DNS labels
    const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

    /// Generate a DNS label (1-12 alphanumeric chars)
    pub fn dns_label() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(ALPHANUMERIC.to_vec()), 1..=12)
            .prop_map(|chars| chars.into_iter().map(char::from).collect())
    }

    /// Generate a hostname (1-4 labels separated by dots)
    pub fn hostname() -> impl Strategy<Value = String> {
        prop::collection::vec(dns_label(), 1..=4).prop_map(|labels| labels.join("."))
    }

    /// Generate a valid IPv4 address
    pub fn ipv4() -> impl Strategy<Value = String> {
        (0u8..=255, 0u8..=255, 0u8..=255, 0u8..=255)
            .prop_map(|(a, b, c, d)| format!("{a}.{b}.{c}.{d}"))
    }

    /// Generate a valid IPv6 address (full form only)
    pub fn ipv6() -> impl Strategy<Value = String> {
        prop::collection::vec(0u16..=0xffff, 8).prop_map(|groups| {
            groups
                .iter()
                .map(|g| format!("{g:x}"))
                .collect::<Vec<_>>()
                .join(":")
        })
    }

    /// Generate a host without colons
    pub fn plain_host() -> impl Strategy<Value = String> {
        prop_oneof![
            3 => hostname(),
            1 => ipv4(),
        ]
    }

    /// Generate any non-empty host `AddressRange::new` accepts (no brackets)
    pub fn any_host() -> impl Strategy<Value = String> {
        "[^\\[\\]]{1,16}"
    }

    /// Generate an ordered pair of ports
    pub fn port_bounds() -> impl Strategy<Value = (u16, u16)> {
        (any::<u16>(), any::<u16>()).prop_map(|(a, b)| (a.min(b), a.max(b)))
    }
}

mod accepted {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn missing_port_applies_defaults(host in plain_host(), (lo, hi) in port_bounds()) {
            let range = AddressRange::parse(&host, lo, hi, "").unwrap();
            prop_assert_eq!(range.host(), host.as_str());
            prop_assert_eq!((range.port_from(), range.port_to()), (lo, hi));
        }

        #[test]
        fn port_range_round_trips(
            host in plain_host(),
            (lo, hi) in port_bounds(),
            (d_lo, d_hi) in port_bounds(),
        ) {
            let input = format!("{host}:{lo}..{hi}");
            let range = AddressRange::parse(&input, d_lo, d_hi, "").unwrap();
            prop_assert_eq!(range, AddressRange::new(host, lo, hi).unwrap());
        }

        #[test]
        fn single_port_collapses_range(host in plain_host(), port in any::<u16>()) {
            let input = format!("{host}:{port}");
            let range = AddressRange::parse(&input, 1, 2, "").unwrap();
            prop_assert_eq!(range.port_from(), port);
            prop_assert_eq!(range.port_to(), port);
        }

        #[test]
        fn bracketed_ipv6_with_range(ip in ipv6(), (lo, hi) in port_bounds()) {
            let input = format!("[{ip}]:{lo}..{hi}");
            let range = AddressRange::parse(&input, 0, 0, "").unwrap();
            prop_assert_eq!(range.host(), ip.as_str());
            prop_assert_eq!((range.port_from(), range.port_to()), (lo, hi));
        }

        #[test]
        fn bare_ipv6_applies_defaults(ip in ipv6(), (lo, hi) in port_bounds()) {
            let range = AddressRange::parse(&ip, lo, hi, "").unwrap();
            prop_assert_eq!(range.host(), ip.as_str());
            prop_assert_eq!(range.ports(), PortRange::new(lo, hi).unwrap());
        }

        #[test]
        fn display_reparses_to_equal_value(
            host in prop_oneof![plain_host(), ipv6(), any_host()],
            (lo, hi) in port_bounds(),
        ) {
            let range = AddressRange::new(host, lo, hi).unwrap();
            let reparsed: AddressRange = range.to_string().parse().unwrap();
            prop_assert_eq!(reparsed, range);
        }

        #[test]
        fn equal_inputs_hash_once(host in plain_host(), port in any::<u16>()) {
            let a = AddressRange::parse(&format!("{host}:{port}"), 0, 0, "").unwrap();
            let b = AddressRange::parse(&format!("{host}:{port}..{port}"), 0, 0, "").unwrap();
            let set: HashSet<_> = [a, b].into_iter().collect();
            prop_assert_eq!(set.len(), 1);
        }
    }
}

mod rejected {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn unbracketed_ipv6_with_port_is_rejected(ip in ipv6(), port in any::<u16>()) {
            let input = format!("{ip}:{port}");
            let err = AddressRange::parse(&input, 0, 0, "").unwrap_err();
            prop_assert_eq!(err.kind, ParseErrorKind::AmbiguousIpv6WithoutBrackets);
        }

        #[test]
        fn bracketed_host_is_not_constructible(
            head in "[^\\[\\]]{0,6}",
            bracket in prop::sample::select(vec!['[', ']']),
            tail in "[^\\[\\]]{0,6}",
        ) {
            let host = format!("{head}{bracket}{tail}");
            let result = AddressRange::new(host, 80, 80);
            let is_malformed = matches!(result, Err(ParseErrorKind::MalformedIpv6 { .. }));
            prop_assert!(is_malformed);
        }

        #[test]
        fn empty_host_is_rejected(port in any::<u16>()) {
            let err = AddressRange::parse(&format!(":{port}"), 0, 0, "").unwrap_err();
            prop_assert_eq!(err.kind, ParseErrorKind::EmptyHost);
        }

        #[test]
        fn reversed_range_is_rejected(host in plain_host(), a in 1u16.., b in any::<u16>()) {
            let (lo, hi) = (a.min(b), a.max(b));
            prop_assume!(lo < hi);
            let input = format!("{host}:{hi}..{lo}");
            let err = AddressRange::parse(&input, 0, 0, "").unwrap_err();
            prop_assert_eq!(err.kind, ParseErrorKind::InvalidPortRange { from: hi, to: lo });
        }

        #[test]
        fn out_of_range_port_is_rejected(host in plain_host(), port in 65536u32..1_000_000) {
            let input = format!("{host}:{port}");
            let err = AddressRange::parse(&input, 0, 0, "").unwrap_err();
            let is_invalid_port = matches!(err.kind, ParseErrorKind::InvalidPort { .. });
            prop_assert!(is_invalid_port);
        }

        #[test]
        fn error_message_carries_prefix(prefix in "[a-z]{1,10}: ", port in any::<u16>()) {
            let parser = AddressRangeParser::new(ParseOptions::new().with_error_prefix(prefix.clone()));
            let err = parser.parse(&format!(":{port}")).unwrap_err();
            prop_assert!(err.to_string().starts_with(&prefix));
        }
    }
}

#[test]
fn rejects_empty_address() {
    let err = AddressRange::parse("", 18360, 18362, "").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::EmptyAddress);
}

#[test]
fn rejects_reference_ambiguous_ipv6() {
    assert!(AddressRange::parse("3ffe:2a00:100:7031:::8080", 18360, 18362, "").is_err());
}

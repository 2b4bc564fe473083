//! Classification of extracted hosts.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// What kind of host an address range names.
///
/// Classification is purely syntactic: hostnames are never resolved and are
/// not validated beyond being non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKind {
    /// An IPv4 literal (e.g., "127.0.0.1")
    Ipv4(Ipv4Addr),
    /// An IPv6 literal, stored without brackets (e.g., `::1`)
    Ipv6(Ipv6Addr),
    /// Anything else, treated as a hostname
    Name,
}

impl HostKind {
    /// Classifies a host string.
    #[must_use]
    pub fn classify(host: &str) -> Self {
        if let Ok(ip) = host.parse::<Ipv4Addr>() {
            return Self::Ipv4(ip);
        }
        if let Ok(ip) = host.parse::<Ipv6Addr>() {
            return Self::Ipv6(ip);
        }
        Self::Name
    }

    /// Returns the IP address for literal hosts.
    #[must_use]
    pub const fn ip(&self) -> Option<IpAddr> {
        match self {
            Self::Ipv4(ip) => Some(IpAddr::V4(*ip)),
            Self::Ipv6(ip) => Some(IpAddr::V6(*ip)),
            Self::Name => None,
        }
    }
}

/// Returns true if `host` names the local machine.
pub(crate) fn is_loopback(host: &str) -> bool {
    match HostKind::classify(host) {
        HostKind::Ipv4(ip) => ip.is_loopback(),
        HostKind::Ipv6(ip) => ip.is_loopback(),
        HostKind::Name => host.eq_ignore_ascii_case("localhost"),
    }
}

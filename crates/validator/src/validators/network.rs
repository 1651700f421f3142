//! IP address validator

use std::net::IpAddr;

use crate::foundation::ValidationError;

/// Address families accepted by [`IpAddress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IpVersion {
    /// IPv4 or IPv6.
    #[default]
    Any,
    /// Dotted-quad IPv4 only.
    V4,
    /// IPv6 only.
    V6,
}

impl IpVersion {
    const fn label(self) -> &'static str {
        match self {
            Self::Any => "ip",
            Self::V4 => "ipv4",
            Self::V6 => "ipv6",
        }
    }

    fn accepts(self, addr: IpAddr) -> bool {
        match self {
            Self::Any => true,
            Self::V4 => addr.is_ipv4(),
            Self::V6 => addr.is_ipv6(),
        }
    }
}

crate::validator! {
    /// Validates an IP address literal.
    ///
    /// IPv4 must be dotted-quad without leading zeros; IPv6 follows RFC 4291
    /// text form (including `::` compression and embedded IPv4). Zone ids and
    /// brackets are rejected.
    ///
    /// ```
    /// use tollgate_validator::validators::{ip_address, IpVersion};
    /// use tollgate_validator::foundation::Validate;
    ///
    /// assert!(ip_address(IpVersion::Any).validate("192.168.0.1").is_ok());
    /// assert!(ip_address(IpVersion::V6).validate("192.168.0.1").is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub IpAddress { version: IpVersion } for str;
    rule(self, input) {
        input.parse::<IpAddr>().is_ok_and(|addr| self.version.accepts(addr))
    }
    error(self, input) { ValidationError::invalid_format(self.version.label()) }
    fn ip_address(version: IpVersion);
}

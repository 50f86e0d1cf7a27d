//! Local address reporting
//!
//! Works out which address to print in the startup URL. Best effort only:
//! the result is never used for binding.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use super::calculator_routes::CALCULATE_PATH;

/// Address of the interface used for outbound traffic, or loopback
pub fn detect_local_ip() -> IpAddr {
    match local_ip_address::local_ip() {
        Ok(ip) => {
            tracing::debug!(ip = %ip, "Detected local IP address");
            ip
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to detect local IP address, using loopback");
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        }
    }
}

/// Address clients should use to reach a server bound to `bound`
///
/// A wildcard bind is reachable on every interface, so the detected
/// outward-facing address is reported instead.
pub fn reachable_ip(bound: &SocketAddr) -> IpAddr {
    if bound.ip().is_unspecified() {
        detect_local_ip()
    } else {
        bound.ip()
    }
}

/// Convenience URL of the calculation endpoint
pub fn calculate_url(ip: IpAddr, port: u16) -> String {
    let addr = SocketAddr::new(ip, port);
    format!("http://{}{}", addr, CALCULATE_PATH)
}

use std::net::Ipv4Addr;

/// Checks a token is a dotted-quad IPv4 address.
pub fn is_ipv4(token: &str) -> bool {
    token.parse::<Ipv4Addr>().is_ok()
}

/// Converts a BSD style hex netmask (`0xffffff00`) to dotted-quad.
pub fn hex_netmask_to_str(mask: &str) -> Option<String> {
    let digits = mask
        .strip_prefix("0x")
        .or_else(|| mask.strip_prefix("0X"))?;
    let bits = u32::from_str_radix(digits, 16).ok()?;
    Some(Ipv4Addr::from(bits).to_string())
}

/// Normalizes a netmask as printed by ifconfig, dotted-quad or hex.
pub fn netmask_to_str(mask: &str) -> Option<String> {
    if is_ipv4(mask) {
        return Some(mask.to_string());
    }
    hex_netmask_to_str(mask)
}

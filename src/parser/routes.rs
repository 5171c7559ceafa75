use crate::net::is_ipv4;
use log::{debug, trace};
use std::collections::HashMap;

/// Default gateway per interface name, resolved from one routing table dump.
#[derive(Debug, Default)]
pub struct GatewayTable {
    gateways: HashMap<String, String>,
}

impl GatewayTable {
    pub fn new() -> GatewayTable {
        GatewayTable {
            gateways: HashMap::new(),
        }
    }

    /// Records a default route. The first route seen for an interface wins.
    pub fn add(&mut self, interface: &str, gateway: &str) {
        if self.gateways.contains_key(interface) {
            trace!("Routes: ignoring extra default route {gateway} on {interface}");
            return;
        }
        debug!("Routes: default gateway {gateway} on {interface}");
        self.gateways
            .insert(interface.to_string(), gateway.to_string());
    }

    pub fn get(&self, interface: &str) -> Option<&str> {
        self.gateways.get(interface).map(String::as_str)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.gateways.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.gateways.is_empty()
    }
}

/// Token right after `key` on a whitespace split line.
fn value_after<'a>(tokens: &[&'a str], key: &str) -> Option<&'a str> {
    let pos = tokens.iter().position(|t| *t == key)?;
    tokens.get(pos + 1).copied()
}

/// Parses `ip route` output, e.g. `default via 192.168.1.1 dev eth0 proto dhcp metric 100`.
pub fn parse_ip_route(output: &str) -> GatewayTable {
    let mut table = GatewayTable::new();
    for line in output.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if !tokens.contains(&"default") {
            continue;
        }
        let gateway = value_after(&tokens, "via").filter(|gw| is_ipv4(gw));
        let device = value_after(&tokens, "dev");
        match (gateway, device) {
            (Some(gateway), Some(device)) => table.add(device, gateway),
            _ => trace!("Routes: skipping `{line}`"),
        }
    }
    table
}

/// Parses `netstat -rn` output, e.g. `default  192.168.1.1  UGScg  en0`.
///
/// The interface column moves depending on the OS release (Refs/Use columns
/// before it, Expire after it), so the interface is the last token after the
/// flags that is neither `!` nor a plain number.
pub fn parse_netstat(output: &str) -> GatewayTable {
    let mut table = GatewayTable::new();
    for line in output.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (Some(destination), Some(gateway)) = (tokens.first(), tokens.get(1)) else {
            continue;
        };
        if !destination.eq_ignore_ascii_case("default") || !is_ipv4(gateway) {
            continue;
        }
        let interface = tokens
            .iter()
            .skip(3)
            .rev()
            .find(|t| **t != "!" && !t.chars().all(|c| c.is_ascii_digit()));
        match interface {
            Some(interface) => table.add(interface, gateway),
            None => trace!("Routes: skipping `{line}`"),
        }
    }
    table
}

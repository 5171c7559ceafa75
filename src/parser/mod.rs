pub mod routes;

use crate::interface::{InterfaceRecord, InterfaceTable};
use crate::net::netmask_to_str;
use log::{debug, trace};
use regex::Regex;
use std::sync::OnceLock;

const HEADER_MARKER: &str = "flags=";

fn ipv4_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\binet\s+(\d+\.\d+\.\d+\.\d+)\s+netmask\s+(\d+\.\d+\.\d+\.\d+|0[xX][0-9a-fA-F]+)")
            .expect("valid IPv4 pattern")
    })
}

fn ipv6_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\binet6\s+([a-fA-F0-9:]+)").expect("valid IPv6 pattern"))
}

fn mac_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bether\s+(\S+)").expect("valid MAC pattern"))
}

/// Interface name of a stanza header such as `en0: flags=8863<UP,...> mtu 1500`.
///
/// Headers start at column zero; indented lines like macOS `eflags=` belong to
/// the current stanza.
pub fn match_header(line: &str) -> Option<&str> {
    if !line.contains(HEADER_MARKER) || line.starts_with(char::is_whitespace) {
        return None;
    }
    let name = line.split(':').next().unwrap_or(line);
    Some(name.trim())
}

/// Address and netmask of an `inet <addr> netmask <mask>` line. The mask is
/// `None` when it cannot be read as dotted-quad or hex.
pub fn match_ipv4(line: &str) -> Option<(String, Option<String>)> {
    let caps = ipv4_pattern().captures(line)?;
    let mask = netmask_to_str(&caps[2]);
    if mask.is_none() {
        debug!("Parser: unreadable netmask `{}`", &caps[2]);
    }
    Some((caps[1].to_string(), mask))
}

pub fn match_ipv6(line: &str) -> Option<String> {
    let caps = ipv6_pattern().captures(line)?;
    Some(caps[1].to_string())
}

pub fn match_mac(line: &str) -> Option<String> {
    let caps = mac_pattern().captures(line)?;
    Some(caps[1].to_string())
}

/// Scrapes an ifconfig style listing into per-interface records.
///
/// Lines that match no pattern are skipped. Lines before the first header are
/// ignored. Each record asks `resolve_gateway` for its default gateway when the
/// header is seen.
pub fn parse<F>(raw_listing: &str, resolve_gateway: F) -> InterfaceTable
where
    F: Fn(&str) -> Option<String>,
{
    let mut table = InterfaceTable::new();
    let mut current: Option<InterfaceRecord> = None;

    for line in raw_listing.lines() {
        if let Some(name) = match_header(line) {
            debug!("Parser: interface {name}");
            if let Some(done) = current.take() {
                table.insert(done);
            }
            let mut record = InterfaceRecord::new(name);
            record.default_gateway = resolve_gateway(name);
            current = Some(record);
            continue;
        }

        let Some(record) = current.as_mut() else {
            trace!("Parser: no interface yet, skipping `{line}`");
            continue;
        };
        let mut matched = false;
        if let Some((addr, mask)) = match_ipv4(line) {
            record.ipv4 = Some(addr);
            record.netmask = mask;
            matched = true;
        }
        if let Some(addr) = match_ipv6(line) {
            record.ipv6 = Some(addr);
            matched = true;
        }
        if let Some(mac) = match_mac(line) {
            record.mac = Some(mac);
            matched = true;
        }
        if !matched {
            trace!("Parser: skipping `{}`", line.trim());
        }
    }

    if let Some(done) = current {
        table.insert(done);
    }
    table
}

use crate::error::Error;
use crate::parser::routes::{self, GatewayTable};
use std::fmt;

/// An external command with fixed arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandLine {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program)?;
        for arg in self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

const IFCONFIG: CommandLine = CommandLine {
    program: "ifconfig",
    args: &[],
};
const IP_ROUTE: CommandLine = CommandLine {
    program: "ip",
    args: &["route"],
};
const NETSTAT_ROUTES: CommandLine = CommandLine {
    program: "netstat",
    args: &["-rn"],
};

/// Supported command dialects, picked once per process from the host kernel name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
}

impl Platform {
    pub fn from_sysname(sysname: &str) -> Result<Platform, Error> {
        match sysname.to_ascii_lowercase().as_str() {
            "linux" => Ok(Platform::Linux),
            "darwin" => Ok(Platform::MacOs),
            _ => Err(Error::PlatformUnsupported(sysname.to_string())),
        }
    }

    /// Command listing every interface.
    pub fn listing_command(&self) -> CommandLine {
        IFCONFIG
    }

    /// Command dumping the routing table.
    pub fn routing_command(&self) -> CommandLine {
        match self {
            Platform::Linux => IP_ROUTE,
            Platform::MacOs => NETSTAT_ROUTES,
        }
    }

    pub fn parse_routes(&self, output: &str) -> GatewayTable {
        match self {
            Platform::Linux => routes::parse_ip_route(output),
            Platform::MacOs => routes::parse_netstat(output),
        }
    }
}

/// Kernel name of the running host, e.g. `Linux` or `Darwin`.
#[cfg(unix)]
pub fn host_sysname() -> String {
    match nix::sys::utsname::uname() {
        Ok(uts) => uts.sysname().to_string_lossy().into_owned(),
        Err(_) => std::env::consts::OS.to_string(),
    }
}

#[cfg(not(unix))]
pub fn host_sysname() -> String {
    std::env::consts::OS.to_string()
}

#[cfg(test)]
mod test {
    use super::Platform;
    use crate::error::Error;

    #[test]
    fn test_from_sysname() {
        assert_eq!(Platform::Linux, Platform::from_sysname("Linux").unwrap());
        assert_eq!(Platform::MacOs, Platform::from_sysname("Darwin").unwrap());
        assert!(matches!(
            Platform::from_sysname("Windows_NT"),
            Err(Error::PlatformUnsupported(name)) if name == "Windows_NT"
        ));
    }

    #[test]
    fn test_routing_command() {
        assert_eq!("ip route", Platform::Linux.routing_command().to_string());
        assert_eq!("netstat -rn", Platform::MacOs.routing_command().to_string());
        assert_eq!("ifconfig", Platform::MacOs.listing_command().to_string());
    }
}

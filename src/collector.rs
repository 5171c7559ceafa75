use crate::error::Error;
use crate::parser::routes::GatewayTable;
use crate::platform::{CommandLine, Platform};
use log::{info, warn};
use std::cell::OnceCell;
use std::process::Command;

/// Runs an external command and hands back its standard output.
pub trait CommandRunner {
    fn run(&self, command: CommandLine) -> Result<String, Error>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, command: CommandLine) -> Result<String, Error> {
        (**self).run(command)
    }
}

/// Spawns real subprocesses.
pub struct SystemCommand;

impl CommandRunner for SystemCommand {
    fn run(&self, command: CommandLine) -> Result<String, Error> {
        info!("Running `{command}`");
        let output = Command::new(command.program)
            .args(command.args)
            .output()
            .map_err(|err| Error::CommandFailed {
                command: command.to_string(),
                status: None,
                detail: err.to_string(),
            })?;
        if !output.status.success() {
            return Err(Error::CommandFailed {
                command: command.to_string(),
                status: output.status.code(),
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

pub struct Collector<R> {
    platform: Platform,
    runner: R,
    gateways: OnceCell<GatewayTable>,
}

impl<R: CommandRunner> Collector<R> {
    pub fn new(platform: Platform, runner: R) -> Collector<R> {
        Collector {
            platform,
            runner,
            gateways: OnceCell::new(),
        }
    }

    /// Picks the dialect for a kernel name such as `Linux` or `Darwin`.
    /// Nothing is spawned before the name is accepted.
    pub fn for_host(sysname: &str, runner: R) -> Result<Collector<R>, Error> {
        let platform = Platform::from_sysname(sysname)?;
        info!("Platform: {platform:?} ({sysname})");
        Ok(Collector::new(platform, runner))
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn fetch_interface_listing(&self) -> Result<String, Error> {
        self.runner.run(self.platform.listing_command())
    }

    /// Default routes of the host. The routing table is dumped on first use
    /// only; a failing command only costs the gateways.
    pub fn gateways(&self) -> &GatewayTable {
        self.gateways
            .get_or_init(|| match self.runner.run(self.platform.routing_command()) {
                Ok(output) => self.platform.parse_routes(&output),
                Err(err) => {
                    warn!("Gateway lookup skipped: {err}");
                    GatewayTable::new()
                }
            })
    }

    pub fn fetch_default_gateway(&self, interface: &str) -> Option<String> {
        self.gateways().get(interface).map(str::to_string)
    }
}

use crate::collector::{Collector, CommandRunner, SystemCommand};
use crate::error::Error;
use crate::interface::InterfaceTable;
use crate::parser;
use crate::platform::host_sysname;
use crate::presenter;

/// Fetches the listing and routing table, then scrapes them into records.
pub fn collect<R: CommandRunner>(collector: &Collector<R>) -> Result<InterfaceTable, Error> {
    let listing = collector.fetch_interface_listing()?;
    if listing.trim().is_empty() {
        let command = collector.platform().listing_command();
        return Err(Error::EmptyListing(command.to_string()));
    }
    Ok(parser::parse(&listing, |name| {
        collector.fetch_default_gateway(name)
    }))
}

/// Full report for the running host.
pub fn run() -> Result<(), Error> {
    let collector = Collector::for_host(&host_sysname(), SystemCommand)?;
    let table = collect(&collector)?;
    presenter::display(&table);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::collect;
    use crate::collector::test::ScriptedRunner;
    use crate::collector::Collector;
    use crate::error::Error;
    use crate::platform::Platform;
    use crate::presenter::render;

    const LISTING: &str = "\
en0: flags=8863<UP,BROADCAST,SMART,RUNNING,SIMPLEX,MULTICAST> mtu 1500
\tether a4:83:e7:01:02:03
\tinet 192.168.1.20 netmask 255.255.255.0 broadcast 192.168.1.255
en1: flags=8963<UP,BROADCAST,SMART,RUNNING,PROMISC,SIMPLEX,MULTICAST> mtu 1500
\tether 82:1f:4a:aa:bb:01
\tstatus: inactive
";

    #[test]
    fn test_report_round_trip() {
        let runner = ScriptedRunner::new(
            Some(LISTING),
            Some("default via 192.168.1.1 dev en0 proto dhcp metric 100\n"),
        );
        let collector = Collector::new(Platform::Linux, &runner);
        let table = collect(&collector).unwrap();

        let mut out = Vec::new();
        render(&table, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(1, out.matches("Interface: ").count());
        assert!(out.contains("Interface: en0"));
        assert!(out.contains("  IPv4 Address: 192.168.1.20"));
        assert!(out.contains("  Default Gateway: 192.168.1.1"));
        assert!(!out.contains("en1"));
        // routing table is read once, not per interface
        assert_eq!(vec!["ifconfig", "ip route"], *runner.calls.borrow());
    }

    #[test]
    fn test_report_listing_failure() {
        let runner = ScriptedRunner::new(None, Some(""));
        let collector = Collector::new(Platform::MacOs, &runner);
        assert!(matches!(collect(&collector), Err(Error::CommandFailed { .. })));
        assert_eq!(vec!["ifconfig"], *runner.calls.borrow());
    }

    #[test]
    fn test_report_empty_listing() {
        let runner = ScriptedRunner::new(Some("  \n"), Some(""));
        let collector = Collector::new(Platform::Linux, &runner);
        assert!(matches!(collect(&collector), Err(Error::EmptyListing(cmd)) if cmd == "ifconfig"));
    }
}

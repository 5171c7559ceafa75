use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported platform `{0}`, only Linux and macOS are supported")]
    PlatformUnsupported(String),
    #[error("`{command}` failed ({}): {detail}", describe_status(.status))]
    CommandFailed {
        command: String,
        /// Exit code, `None` if the process never ran or was killed by a signal.
        status: Option<i32>,
        detail: String,
    },
    #[error("`{0}` produced no output")]
    EmptyListing(String),
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit status {code}"),
        None => "no exit status".to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn test_command_failed_message() {
        let err = Error::CommandFailed {
            command: "ip route".to_string(),
            status: Some(2),
            detail: "permission denied".to_string(),
        };
        assert_eq!(
            "`ip route` failed (exit status 2): permission denied",
            err.to_string()
        );

        let err = Error::CommandFailed {
            command: "ifconfig".to_string(),
            status: None,
            detail: "No such file or directory (os error 2)".to_string(),
        };
        assert!(err.to_string().contains("no exit status"));
    }
}

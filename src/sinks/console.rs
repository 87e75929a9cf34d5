//! Process standard streams as sinks

use super::Sink;
use std::io;

impl Sink {
    /// Process standard error (the default sink)
    pub fn stderr() -> Self {
        Self::named("stderr", io::stderr())
    }

    pub fn stdout() -> Self {
        Self::named("stdout", io::stdout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_sinks_accept_bytes() {
        assert_eq!(Sink::stderr().name(), "stderr");
        assert_eq!(Sink::stdout().name(), "stdout");
        assert!(Sink::stdout().write_all(b"").is_ok());
        assert!(Sink::stderr().flush().is_ok());
    }
}

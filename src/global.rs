//! Process-wide default logger
//!
//! The default logger is created on first use with the stock configuration
//! (`Info`, text formatter, stderr) and lives until the process exits; it is
//! never torn down. The free functions here forward to it. Code that needs
//! isolation, tests in particular, should build its own [`Logger`] instead.

use crate::core::{LogOption, LogWriter, Logger};
use std::fmt;
use std::sync::OnceLock;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The shared default logger, created on first call
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(Logger::new)
}

/// Reconfigure the default logger
pub fn set_options<I>(options: I)
where
    I: IntoIterator<Item = LogOption>,
{
    default_logger().set_options(options);
}

/// The default logger as a byte destination
pub fn writer() -> LogWriter<'static> {
    default_logger().writer()
}

#[track_caller]
pub fn debug(args: &[&dyn fmt::Display]) {
    default_logger().debug(args);
}

#[track_caller]
pub fn info(args: &[&dyn fmt::Display]) {
    default_logger().info(args);
}

#[track_caller]
pub fn warn(args: &[&dyn fmt::Display]) {
    default_logger().warn(args);
}

#[track_caller]
pub fn error(args: &[&dyn fmt::Display]) {
    default_logger().error(args);
}

#[track_caller]
pub fn panic(args: &[&dyn fmt::Display]) -> ! {
    default_logger().panic(args)
}

#[track_caller]
pub fn fatal(args: &[&dyn fmt::Display]) -> ! {
    default_logger().fatal(args)
}

#[track_caller]
pub fn debugf(template: &str, args: &[&dyn fmt::Display]) {
    default_logger().debugf(template, args);
}

#[track_caller]
pub fn infof(template: &str, args: &[&dyn fmt::Display]) {
    default_logger().infof(template, args);
}

#[track_caller]
pub fn warnf(template: &str, args: &[&dyn fmt::Display]) {
    default_logger().warnf(template, args);
}

#[track_caller]
pub fn errorf(template: &str, args: &[&dyn fmt::Display]) {
    default_logger().errorf(template, args);
}

#[track_caller]
pub fn panicf(template: &str, args: &[&dyn fmt::Display]) -> ! {
    default_logger().panicf(template, args)
}

#[track_caller]
pub fn fatalf(template: &str, args: &[&dyn fmt::Display]) -> ! {
    default_logger().fatalf(template, args)
}

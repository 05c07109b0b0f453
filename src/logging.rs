#![cfg(feature = "std")]

//! Stderr logger with per-module levels.
//!
//! `SALVO_LOG` holds comma-separated directives: a bare level sets the
//! default, `target=level` overrides it for a module path and everything
//! below it, e.g. `info,salvo::placement=trace`. Each line is prefixed with
//! the level and the short module name (`placement`, `ai`, `hunt`, ...).

use std::env;

use log::{LevelFilter, Metadata, Record};

/// Parsed `SALVO_LOG` directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFilter {
    default: LevelFilter,
    targets: Vec<(String, LevelFilter)>,
}

impl LogFilter {
    /// Parse a directive list. Unknown levels are skipped; the default level
    /// is `info` unless a bare level is given.
    pub fn parse(spec: &str) -> Self {
        let mut default = LevelFilter::Info;
        let mut targets = Vec::new();
        for directive in spec.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            match directive.split_once('=') {
                Some((target, level)) => {
                    if let Ok(level) = level.trim().parse() {
                        targets.push((target.trim().to_string(), level));
                    }
                }
                None => {
                    if let Ok(level) = directive.parse() {
                        default = level;
                    }
                }
            }
        }
        // longest prefix first so the most specific directive wins
        targets.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        LogFilter { default, targets }
    }

    /// Level in effect for a log target such as `salvo::placement`.
    pub fn level_for(&self, target: &str) -> LevelFilter {
        self.targets
            .iter()
            .find(|(prefix, _)| {
                target == prefix
                    || (target.starts_with(prefix.as_str())
                        && target[prefix.len()..].starts_with("::"))
            })
            .map_or(self.default, |(_, level)| *level)
    }

    /// Most verbose level any directive enables.
    pub fn max_level(&self) -> LevelFilter {
        self.targets
            .iter()
            .map(|(_, level)| *level)
            .fold(self.default, Ord::max)
    }
}

/// Short name for a module path: `salvo::placement` becomes `placement`.
pub fn short_target(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

struct StderrLogger {
    filter: LogFilter,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.filter.level_for(metadata.target())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{:<5} [{}] {}",
                record.level(),
                short_target(record.target()),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// Install the stderr logger using directives from `SALVO_LOG`.
/// Calling it again after a logger is installed has no effect.
pub fn init_logging() {
    let filter = LogFilter::parse(&env::var("SALVO_LOG").unwrap_or_default());
    let max = filter.max_level();
    let logger = Box::new(StderrLogger { filter });
    if log::set_boxed_logger(logger).is_ok() {
        log::set_max_level(max);
    }
}

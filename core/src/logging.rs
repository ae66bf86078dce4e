//! Structured log events emitted by the router.
//!
//! Events carry a message template with `{key}` placeholders and the values
//! for those keys. Where they end up is decided by the [`RouterLogger`]
//! handed to the router; [`NullLogger`] is the default.

use log::Level;

/// Key/value pairs attached to a log event.
pub type LogContext<'a> = [(&'a str, String)];

/// Sink for router log events.
pub trait RouterLogger: Send + Sync {
    fn log(&self, level: Level, template: &str, context: &LogContext<'_>);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl RouterLogger for NullLogger {
    fn log(&self, _level: Level, _template: &str, _context: &LogContext<'_>) {}
}

/// Forwards events to the `log` facade under the `signpost` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct FacadeLogger;

impl RouterLogger for FacadeLogger {
    fn log(&self, level: Level, template: &str, context: &LogContext<'_>) {
        if log::log_enabled!(target: "signpost", level) {
            log::log!(target: "signpost", level, "{}", interpolate(template, context));
        }
    }
}

/// Replaces each `{key}` in `template` with its value from `context`.
/// Placeholders without a value are kept as written.
pub fn interpolate(template: &str, context: &LogContext<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let key = &after[..close];
                match context.iter().find(|(name, _)| *name == key) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Domain-aware logging macros.
///
/// Each macro injects a `domain` field so log lines can be grouped by
/// subsystem: `sys` (gateway lifecycle), `data` (data generation), `sess`
/// (login/logout), `poll` (poller and subscription hub), `conf` (config).
///
/// ```ignore
/// ws_info!(sys, interval = %interval, "poller started");
/// ws_debug!(data, op = "get_zone_heatmap", cells = 96, "snapshot built");
/// ```
///
/// The domain is a bare identifier, not a string.

#[doc(hidden)]
macro_rules! ws_log {
    ($level:ident, $domain:ident, $($field:tt)*) => {
        tracing::$level!(domain = stringify!($domain), $($field)*)
    };
}

/// Log at ERROR level with an automatic `domain` field.
#[allow(unused_macros)]
macro_rules! ws_error {
    ($domain:ident, $($rest:tt)*) => {
        ws_log!(error, $domain, $($rest)*)
    };
}

/// Log at WARN level with an automatic `domain` field.
macro_rules! ws_warn {
    ($domain:ident, $($rest:tt)*) => {
        ws_log!(warn, $domain, $($rest)*)
    };
}

/// Log at INFO level with an automatic `domain` field.
macro_rules! ws_info {
    ($domain:ident, $($rest:tt)*) => {
        ws_log!(info, $domain, $($rest)*)
    };
}

/// Log at DEBUG level with an automatic `domain` field.
macro_rules! ws_debug {
    ($domain:ident, $($rest:tt)*) => {
        ws_log!(debug, $domain, $($rest)*)
    };
}

/// Log at TRACE level with an automatic `domain` field.
#[allow(unused_macros)]
macro_rules! ws_trace {
    ($domain:ident, $($rest:tt)*) => {
        ws_log!(trace, $domain, $($rest)*)
    };
}

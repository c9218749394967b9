//! Telemetry initialization (tracing/tracing-subscriber).
//!
//! - LOG_LEVEL sets the filter directives; unset or invalid falls back to `DEFAULT_FILTER`.
//! - LOG_FORMAT=json switches to structured JSON lines; anything else is human readable.
//!
//! Targets used across the crate: `vibequest_backend` (boot, config, transport), `session`
//! (lifecycle, resource changes) and `challenge` (selection, scoring).

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info,session=debug,challenge=debug,vibequest_backend=debug,tower_http=info,axum=info";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Filter from `directives`, or `DEFAULT_FILTER` when absent or unparsable.
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let level = std::env::var("LOG_LEVEL").ok();
    let format = LogFormat::parse(std::env::var("LOG_FORMAT").ok().as_deref());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level.as_deref()))
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    let installed = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
    if installed.is_ok() {
        tracing::info!(target: "vibequest_backend", ?format, "Tracing initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_format_is_opt_in() {
        assert_eq!(LogFormat::parse(Some("json")), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some(" JSON ")), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some("pretty")), LogFormat::Pretty);
        assert_eq!(LogFormat::parse(None), LogFormat::Pretty);
    }

    #[test]
    fn bad_directives_fall_back_to_default() {
        let f = build_filter(Some("session=notalevel"));
        assert_eq!(f.to_string(), EnvFilter::new(DEFAULT_FILTER).to_string());
    }
}

use tracing_subscriber::EnvFilter;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &[
    "rainsim",
    "rainsim_aggregate",
    "rainsim_calendar",
    "rainsim_generator",
    "rainsim_stats",
];

/// Maps a `-v` count to a level name.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Filter directive applying `level` to every workspace crate.
fn default_directive(level: &str) -> String {
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing based on CLI verbosity level.
///
/// `RUST_LOG` overrides the CLI flag if set. Logs go to stderr so the
/// statistics panel on stdout stays clean.
pub fn init(verbosity: u8) {
    let default_filter = default_directive(level_for(verbosity));

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(3), "trace");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn directive_covers_all_crates() {
        let d = default_directive("debug");
        for t in CRATE_TARGETS {
            assert!(d.contains(&format!("{t}=debug")), "missing {t}");
        }
        assert_eq!(d.split(',').count(), CRATE_TARGETS.len());
    }
}

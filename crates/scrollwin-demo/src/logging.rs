use scrollwin_core::logging::TARGET;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV: &str = "SCROLLWIN_LOG";

/// Filter used when `SCROLLWIN_LOG` is unset.
#[must_use]
pub fn default_directives(verbose: bool) -> String {
    if verbose {
        format!("warn,{TARGET}=debug")
    } else {
        "warn".to_string()
    }
}

/// Install the stderr subscriber. `SCROLLWIN_LOG` wins over `verbose`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_only_the_core_target() {
        assert_eq!(default_directives(false), "warn");
        assert_eq!(default_directives(true), "warn,scrollwin=debug");
    }
}

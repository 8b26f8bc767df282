//! Opt-in tracing subscriber.
//!
//! Nothing is installed unless `NIXPY_LOG` is set. Its value is an
//! `EnvFilter` directive such as `debug` or `nixpy=trace`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive.
pub const LOG_ENV: &str = "NIXPY_LOG";

/// Install a global fmt subscriber if `NIXPY_LOG` is set.
///
/// Returns `true` if a subscriber was installed by this call. A second call,
/// or a subscriber installed by the host application, leaves things as they are.
pub fn init() -> bool {
    let Some(directive) = std::env::var(LOG_ENV).ok().filter(|v| !v.trim().is_empty()) else {
        return false;
    };

    let filter = match EnvFilter::try_new(&directive) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("[nixpy] ignoring invalid {}='{}': {}", LOG_ENV, directive, e);
            return false;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

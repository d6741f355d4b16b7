//! Console and log-file output for target runs.

mod logger;
mod subscriber;
mod types;
mod utils;

pub use logger::Logger;
pub use subscriber::init_subscriber;
pub use types::{Log, TaskEntry, TaskStatus};

/// Serializes `XDG_CACHE_HOME` changes made by tests running on other threads.
#[cfg(test)]
pub(crate) static CACHE_ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Run `f` with `XDG_CACHE_HOME` pointing at `dir`, restoring it afterwards.
#[cfg(test)]
pub(crate) fn with_cache_home<T>(dir: &std::path::Path, f: impl FnOnce() -> T) -> T {
    let _lock = CACHE_ENV_LOCK
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    let previous = std::env::var_os("XDG_CACHE_HOME");
    // SAFETY: every test that touches XDG_CACHE_HOME holds CACHE_ENV_LOCK.
    #[allow(unsafe_code)]
    unsafe {
        std::env::set_var("XDG_CACHE_HOME", dir);
    }
    let out = f();
    #[allow(unsafe_code)]
    unsafe {
        match previous {
            Some(value) => std::env::set_var("XDG_CACHE_HOME", value),
            None => std::env::remove_var("XDG_CACHE_HOME"),
        }
    }
    out
}

/// A [`Logger`] whose events land in a log file under a private temp dir.
///
/// The dispatcher guard is thread-local; keep it alive for the whole test.
#[cfg(test)]
#[allow(clippy::expect_used)]
pub(crate) fn scoped_test_logger() -> (Logger, tempfile::TempDir, tracing::dispatcher::DefaultGuard)
{
    use tracing_subscriber::{Layer as _, filter::LevelFilter, layer::SubscriberExt as _};

    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let (layer, log) = with_cache_home(tmp.path(), || {
        (subscriber::FileLayer::new("test"), Logger::new("test"))
    });
    let layer = layer.expect("failed to create file layer");
    let registry = tracing_subscriber::registry().with(layer.with_filter(LevelFilter::DEBUG));
    let guard = tracing::dispatcher::set_default(&tracing::Dispatch::new(registry));
    (log, tmp, guard)
}

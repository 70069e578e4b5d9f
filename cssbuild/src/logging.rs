use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, Registry};

use anyhow::Context as _;
use tracing::level_filters::LevelFilter;

pub type LevelHandle = reload::Handle<LevelFilter, Registry>;

/// Installs the global subscriber: a reloadable level filter in front of a
/// stderr formatter. Stdout is left to the selectors being printed.
pub fn tracing_init(level: LevelFilter) -> LevelHandle {
    let (filter, handle) = reload::Layer::new(level);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();

    handle
}

pub fn set_level(handle: &LevelHandle, level: LevelFilter) -> anyhow::Result<()> {
    handle
        .reload(level)
        .context("could not replace the log level filter")
}

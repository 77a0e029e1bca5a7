// SPDX-License-Identifier: MPL-2.0
use iced_lightbox::app::{self, Flags};
use iced_lightbox::directory_scanner::SortOrder;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Log directives used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "iced_lightbox=info";

fn main() -> iced::Result {
    init_tracing();

    let mut args = pico_args::Arguments::from_env();

    let sort_order = match args.opt_value_from_str::<_, SortOrder>("--sort") {
        Ok(order) => order.unwrap_or_default(),
        Err(err) => {
            tracing::warn!(%err, "ignoring --sort");
            SortOrder::default()
        }
    };
    let config_dir = match args.opt_value_from_str::<_, PathBuf>("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            tracing::warn!(%err, "ignoring --config-dir");
            None
        }
    };

    let flags = Flags {
        path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
        sort_order,
        config_dir,
    };

    app::run(flags)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

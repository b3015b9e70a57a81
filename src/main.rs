// SPDX-License-Identifier: MPL-2.0

use tikzmotion::app::{self, Flags};
use tikzmotion::config;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if let Ok(Some(dir)) = args.opt_value_from_str::<_, String>("--config-dir") {
        std::env::set_var(config::CONFIG_DIR_ENV, dir);
    }

    let flags = Flags {
        language: args.opt_value_from_str("--lang").unwrap_or(None),
        endpoint: args.opt_value_from_str("--endpoint").unwrap_or(None),
    };

    app::run(flags)
}

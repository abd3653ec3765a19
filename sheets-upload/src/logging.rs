//! Logger setup

use log::LevelFilter;

/// Level used when `RUST_LOG` is not set, shifted by `-v`/`-q` counts
pub fn default_level(verbose: u8, quiet: u8) -> LevelFilter {
    let levels = [
        LevelFilter::Off,
        LevelFilter::Error,
        LevelFilter::Warn,
        LevelFilter::Info,
        LevelFilter::Debug,
        LevelFilter::Trace,
    ];
    // Info is index 3
    let idx = (3 + verbose as i32 - quiet as i32).clamp(0, levels.len() as i32 - 1);
    levels[idx as usize]
}

/// Initialize env_logger. `RUST_LOG` takes precedence over the flags.
pub fn init(verbose: u8, quiet: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(default_level(verbose, quiet));
    builder.parse_default_env();
    builder.format_timestamp_millis();
    // Ignore double-init (tests may call this more than once)
    let _ = builder.try_init();
}

use env_logger::fmt::Formatter;
use log::Record;
use std::io::Write;

/// Initialize log environment variables
pub fn log_env_init(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder()
        .format(log_formatter)
        .filter_level(level)
        .parse_default_env()
        // recovered-file diagnostics are part of the output, `RUST_LOG` can't hide them
        .filter_module("butler::rewrite", level)
        .format_timestamp(None)
        .format_target(false)
        .format_module_path(false)
        .format_level(false)
        .target(env_logger::Target::Stdout)
        .init();
}

/// Logging formatter function
///
/// Warnings are printed verbatim: the recovery diagnostic of a reverted file
/// starts with `butler:` and tooling greps for it.
pub fn log_formatter(
    buf: &mut Formatter,
    record: &Record,
) -> std::result::Result<(), std::io::Error> {
    let prefix = match record.level() {
        log::Level::Error => "⛔ ",
        _ => "",
    };
    writeln!(buf, "{}{}", prefix, record.args())
}

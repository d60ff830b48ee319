// SPDX-License-Identifier: MPL-2.0
use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};
use gamma_gallery::app::{self, paths, Flags};

const HELP: &str = "\
gamma_gallery - Café Gamma photo gallery

USAGE:
  gamma_gallery [OPTIONS]

OPTIONS:
  --lang <ID>          Interface language (e.g. he, en-US)
  --config-dir <DIR>   Directory holding settings.toml and logs
  --delay-ms <N>       Filter transition delay in milliseconds (0-5000)
  -h, --help           Print this help
";

fn parse_args() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        delay_ms: args.opt_value_from_str("--delay-ms")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {remaining:?}");
    }

    Ok(flags)
}

fn init_logging() -> Option<LoggerHandle> {
    let Some(log_dir) = paths::get_log_dir() else {
        eprintln!("Failed to create log directory");
        return None;
    };

    Logger::try_with_env_or_str("info, iced=error, wgpu_hal=error, wgpu_core=error, naga=error")
        .and_then(|logger| {
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(&log_dir)
                        .basename("gamma_gallery")
                        .suffix("log")
                        .suppress_timestamp(),
                )
                .rotate(
                    Criterion::Size(64 * 1024),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(3),
                )
                .duplicate_to_stderr(Duplicate::Warn)
                .start()
        })
        .map_err(|err| eprintln!("Failed to start logger: {err}"))
        .ok()
}

fn main() -> iced::Result {
    let flags = match parse_args() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    // Must precede logger setup: the log directory follows the config directory
    paths::init_cli_overrides(flags.config_dir.clone());
    let _logger = init_logging();

    log::info!("Starting Gamma Gallery {}", env!("CARGO_PKG_VERSION"));

    let result = app::run(flags);

    log::info!("Shutting down.");
    result
}

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use log::LevelFilter;

/// Route `log` records to `path`. The terminal belongs to the UI, so nothing is
/// written to stdout or stderr.
pub fn setup_logger(path: &Path, level: LevelFilter) -> Result<(), fern::InitError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                record.target(),
                message
            ));
        })
        .level(level)
        .chain(fern::log_file(path)?)
        .apply()?;
    Ok(())
}

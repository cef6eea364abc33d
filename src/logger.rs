//! Logger that appends to a file so log output never lands on the
//! terminal the UI is drawing to

use log::{set_boxed_logger, set_max_level, LevelFilter, Log, Metadata, Record};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl FileLogger {
    fn format(record: &Record) -> String {
        format!(
            "[{}] {} {}: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = self.file.lock() {
                writeln!(file, "{}", Self::format(record)).ok();
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            file.flush().ok();
        }
    }
}

/// Install the file logger, creating the log file's directory if needed
pub fn init(path: &Path, level: LevelFilter) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    set_boxed_logger(Box::new(FileLogger {
        level,
        file: Mutex::new(file),
    }))
    .map_err(|e| anyhow::anyhow!("Could not install logger: {}", e))?;
    set_max_level(level);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;
    use mktemp::Temp;

    #[test]
    fn test_writes_enabled_records() {
        let tmp = Temp::new_dir().unwrap();
        let path = Path::join(&tmp, "datepick.log");
        let file = OpenOptions::new().create(true).append(true).open(&path).unwrap();

        let logger = FileLogger {
            level: LevelFilter::Info,
            file: Mutex::new(file),
        };

        logger.log(
            &Record::builder()
                .args(format_args!("picked 2026-10-17"))
                .level(Level::Info)
                .target("datepick")
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("too chatty"))
                .level(Level::Debug)
                .target("datepick")
                .build(),
        );
        logger.flush();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("INFO datepick: picked 2026-10-17"));
        assert!(!contents.contains("too chatty"));
    }
}

use std::fs::{self, OpenOptions, Permissions};
use std::io::Write;
use std::os::unix::fs::{chown, DirBuilderExt, PermissionsExt};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use snafu::ResultExt;
use uuid::Uuid;

use crate::common::{LogBootstrapSnafu, LogWriteSnafu, Result};

const DIR_MODE: u32 = 0o755;
const FILE_MODE: u32 = 0o644;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_line(timestamp: NaiveDateTime, message: &str) -> String {
    format!("{} - {}\n", timestamp.format(TIMESTAMP_FORMAT), message)
}

/// Append-only run history kept next to the proxy install.
pub struct EventLog {
    path: PathBuf,
}

impl EventLog {
    /// Opens the log, creating its directory and file on first use.
    ///
    /// Ownership and modes are only applied to what this call creates;
    /// existing artifacts are left untouched.
    pub fn bootstrap(config: &super::Config) -> Result<Self> {
        let path = config.path.clone();
        let uid = Some(config.owner_uid);
        let gid = Some(config.owner_gid);

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.exists() {
                let context = || LogBootstrapSnafu {
                    path: dir.display().to_string(),
                    message: "Failed to create log directory",
                };
                fs::DirBuilder::new()
                    .recursive(true)
                    .mode(DIR_MODE)
                    .create(dir)
                    .context(context())?;
                // DirBuilder's mode is filtered through the umask.
                fs::set_permissions(dir, Permissions::from_mode(DIR_MODE)).context(context())?;
                chown(dir, uid, gid).context(context())?;
                tracing::info!(path = dir.display().to_string(), "Created log directory");
            }
        }

        if !path.exists() {
            let context = || LogBootstrapSnafu {
                path: path.display().to_string(),
                message: "Failed to create log file",
            };
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .context(context())?;
            chown(&path, uid, gid).context(context())?;
            fs::set_permissions(&path, Permissions::from_mode(FILE_MODE)).context(context())?;
            tracing::info!(path = path.display().to_string(), "Created log file");
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, message: &str) -> Result<()> {
        let line = format_line(Local::now().naive_local(), message);
        let context = || LogWriteSnafu {
            path: self.path.display().to_string(),
        };
        OpenOptions::new()
            .append(true)
            .open(&self.path)
            .context(context())?
            .write_all(line.as_bytes())
            .context(context())
    }

    pub fn info(&self, run_id: &Uuid, message: &str) -> Result<()> {
        tracing::info!(run_id = run_id.to_string(), "{message}");
        self.append(message)
    }

    /// Records a failure. An unwritable log is reported on the console only,
    /// so the failure being recorded is never masked.
    pub fn error(&self, run_id: &Uuid, message: &str) {
        tracing::error!(run_id = run_id.to_string(), "{message}");
        if let Err(err) = self.append(message) {
            tracing::warn!(error = err.to_string(), "Event log is not writable");
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn config(path: PathBuf) -> super::super::Config {
        // SAFETY: getuid and getgid cannot fail.
        let (uid, gid) = unsafe { (libc::getuid(), libc::getgid()) };
        super::super::Config {
            path,
            owner_uid: uid,
            owner_gid: gid,
        }
    }

    fn mode(path: &Path) -> u32 {
        fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[test]
    fn test_format_line() {
        let timestamp = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(14, 20, 3)
            .unwrap();
        assert_eq!(
            format_line(timestamp, "Run started, region: SG"),
            "2024-05-01 14:20:03 - Run started, region: SG\n"
        );
    }

    #[test]
    fn test_bootstrap_creates_directory_and_file() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("hy");
        let path = dir.join("auto-change-site.log");

        let log = EventLog::bootstrap(&config(path.clone())).unwrap();

        assert_eq!(log.path(), path);
        assert!(path.is_file());
        assert_eq!(mode(&dir), 0o755);
        assert_eq!(mode(&path), 0o644);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_bootstrap_keeps_existing_log() {
        let root = tempfile::tempdir().unwrap();
        let path = root.path().join("auto-change-site.log");
        fs::write(&path, "2024-05-01 14:20:03 - earlier run\n").unwrap();

        EventLog::bootstrap(&config(path.clone())).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "2024-05-01 14:20:03 - earlier run\n"
        );
    }

    #[test]
    fn test_bootstrap_fails_when_directory_cannot_be_created() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("hy");
        fs::write(&blocker, "not a directory").unwrap();

        let err = EventLog::bootstrap(&config(blocker.join("site.log")))
            .err()
            .unwrap();
        assert!(err.to_string().contains("Failed to create log"), "{err}");
    }

    #[test]
    fn test_records_are_appended_with_timestamps() {
        let root = tempfile::tempdir().unwrap();
        let path = root.path().join("auto-change-site.log");
        let log = EventLog::bootstrap(&config(path.clone())).unwrap();

        let run_id = Uuid::new_v4();
        log.info(&run_id, "first").unwrap();
        log.error(&run_id, "second");

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        for (line, message) in lines.iter().zip(["first", "second"]) {
            let (timestamp, rest) = line.split_once(" - ").unwrap();
            assert!(NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).is_ok());
            assert_eq!(rest, message);
        }
    }
}

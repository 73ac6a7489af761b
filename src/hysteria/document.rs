use std::fs;
use std::io::Write;
use std::os::unix::fs::{fchown, MetadataExt};
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use snafu::ResultExt;

use crate::common::{ConfigFormatSnafu, ConfigIoSnafu, Result};

/// Mappings leading to the masquerade URL, outermost first.
const MASQUERADE_PATH: [&str; 2] = ["masquerade", "proxy"];
const URL_KEY: &str = "url";

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Sets `masquerade.proxy.url`, creating the intermediate mappings when they
/// are missing or null. Every other node is left as it was.
pub(crate) fn with_masquerade_url(document: Value, url: &str, source: &str) -> Result<Value> {
    let mut root = match document {
        Value::Null => Mapping::new(),
        Value::Mapping(mapping) => mapping,
        other => {
            return ConfigFormatSnafu {
                path: source,
                message: format!("root node is {} instead of a mapping", describe(&other)),
            }
            .fail()
        }
    };

    let mut node = &mut root;
    let mut key_path: Vec<&str> = Vec::with_capacity(MASQUERADE_PATH.len());
    for key in MASQUERADE_PATH {
        key_path.push(key);
        let entry = node
            .entry(Value::String(key.to_string()))
            .or_insert_with(|| Value::Mapping(Mapping::new()));
        if entry.is_null() {
            *entry = Value::Mapping(Mapping::new());
        }
        node = match entry {
            Value::Mapping(mapping) => mapping,
            other => {
                return ConfigFormatSnafu {
                    path: source,
                    message: format!(
                        "{} is {} instead of a mapping",
                        key_path.join("."),
                        describe(other)
                    ),
                }
                .fail()
            }
        };
    }

    node.insert(
        Value::String(URL_KEY.to_string()),
        Value::String(url.to_string()),
    );
    Ok(Value::Mapping(root))
}

fn is_blank(raw: &str) -> bool {
    raw.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

/// The Hysteria server configuration file.
pub struct HysteriaConfig {
    path: PathBuf,
}

impl HysteriaConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<Value> {
        let raw = fs::read_to_string(&self.path)
            .boxed_local()
            .context(ConfigIoSnafu {
                path: self.display_path(),
                action: "read",
            })?;

        if is_blank(&raw) {
            return Ok(Value::Null);
        }

        serde_yaml::from_str(&raw)
            .boxed_local()
            .context(ConfigIoSnafu {
                path: self.display_path(),
                action: "parse",
            })
    }

    /// Replaces the file through a sibling temp file so readers never see a
    /// partial document. Symlinks are followed and the target keeps its
    /// owner, group and mode.
    fn write(&self, document: &Value) -> Result<()> {
        let serialized = serde_yaml::to_string(document)
            .boxed_local()
            .context(ConfigIoSnafu {
                path: self.display_path(),
                action: "serialize",
            })?;

        let write_context = || ConfigIoSnafu {
            path: self.display_path(),
            action: "write",
        };

        let target = fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .boxed_local()
            .context(write_context())?;
        tmp.write_all(serialized.as_bytes())
            .boxed_local()
            .context(write_context())?;

        if let Ok(metadata) = fs::metadata(&target) {
            fchown(tmp.as_file(), Some(metadata.uid()), Some(metadata.gid()))
                .boxed_local()
                .context(write_context())?;
            // Applied after fchown, which may clear setuid/setgid bits.
            tmp.as_file()
                .set_permissions(metadata.permissions())
                .boxed_local()
                .context(write_context())?;
        }
        tmp.as_file()
            .sync_all()
            .boxed_local()
            .context(write_context())?;

        tmp.persist(&target)
            .map_err(|err| err.error)
            .boxed_local()
            .context(write_context())?;
        Ok(())
    }

    /// Current `masquerade.proxy.url`, if set to a string.
    pub fn masquerade_url(&self) -> Result<Option<String>> {
        let document = self.read()?;
        let mut node = &document;
        for key in MASQUERADE_PATH {
            match node.get(key) {
                Some(child) => node = child,
                None => return Ok(None),
            }
        }
        Ok(node.get(URL_KEY).and_then(Value::as_str).map(str::to_string))
    }

    pub fn set_masquerade_url(&self, url: &str) -> Result<()> {
        let document = self.read()?;
        let updated = with_masquerade_url(document, url, &self.display_path())?;
        self.write(&updated)?;

        tracing::debug!(path = self.display_path(), url, "Masquerade URL written");
        Ok(())
    }
}

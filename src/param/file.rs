use std::fs;
use std::path::{Path, PathBuf};

use bitflags::bitflags;

use crate::error::{ConfigError, ConversionError, ValidationError};
use crate::param::core::{Param, ValueSpec};

bitflags! {
    /// Filesystem requirements checked against a [`FileParam`] value.
    ///
    /// Combined attributes are checked individually; each one must hold.
    /// `NO_ATTRIBUTES` accepts any path without touching the filesystem.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FileAttributes: u8 {
        /// The path must exist.
        const EXISTS = 0x01;
        /// The path must not exist.
        const DOESNT_EXIST = 0x02;
        /// The path must be a directory.
        const IS_DIR = 0x04;
        /// The path must be a plain file.
        const IS_FILE = 0x08;
        /// The path must be readable.
        const IS_READABLE = 0x10;
        /// The path must be writable.
        const IS_WRITABLE = 0x20;
        /// No filesystem requirement.
        const NO_ATTRIBUTES = 0;
    }
}

fn readable(path: &Path) -> bool {
    if path.is_dir() {
        fs::read_dir(path).is_ok()
    } else {
        fs::File::open(path).is_ok()
    }
}

fn writable(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(metadata) => !metadata.permissions().readonly(),
        Err(_) => false,
    }
}

/// Conversion and attribute behaviour for [`FileParam`].
pub struct FileSpec {
    attributes: FileAttributes,
}

impl FileSpec {
    fn failure(&self, tag: &str, path: &Path, requirement: &str) -> ValidationError {
        ValidationError::FileAttribute {
            tag: tag.to_string(),
            path: path.display().to_string(),
            requirement: requirement.to_string(),
        }
    }
}

impl ValueSpec for FileSpec {
    type Value = PathBuf;

    fn convert(&self, _tag: &str, raw: &str) -> Result<PathBuf, ConversionError> {
        Ok(PathBuf::from(raw))
    }

    fn validate(&self, tag: &str, value: &PathBuf) -> Result<(), ValidationError> {
        let attributes = self.attributes;

        if attributes.contains(FileAttributes::EXISTS) && !value.exists() {
            return Err(self.failure(tag, value, "must exist"));
        }

        if attributes.contains(FileAttributes::DOESNT_EXIST) && value.exists() {
            return Err(self.failure(tag, value, "must not exist"));
        }

        if attributes.contains(FileAttributes::IS_DIR) && !value.is_dir() {
            return Err(self.failure(tag, value, "must be a directory"));
        }

        if attributes.contains(FileAttributes::IS_FILE) && !value.is_file() {
            return Err(self.failure(tag, value, "must be a plain file"));
        }

        if attributes.contains(FileAttributes::IS_READABLE) && !readable(value) {
            return Err(self.failure(tag, value, "must be readable"));
        }

        if attributes.contains(FileAttributes::IS_WRITABLE) && !writable(value) {
            return Err(self.failure(tag, value, "must be writable"));
        }

        Ok(())
    }

    fn display(&self, value: &PathBuf) -> String {
        value.display().to_string()
    }
}

/// A filesystem path command line parameter.
///
/// Conversion wraps the raw token as a path without touching the filesystem;
/// the configured [`FileAttributes`] are checked at validation time, so the
/// filesystem state observed is the state at parse time.
pub type FileParam = Param<FileSpec>;

impl Param<FileSpec> {
    /// Create a file parameter with the given attribute requirements.
    pub fn new(
        tag: impl Into<String>,
        desc: impl Into<String>,
        attributes: FileAttributes,
    ) -> Result<Self, ConfigError> {
        Param::build(FileSpec { attributes }, tag, desc)
    }

    /// The attribute requirements checked against parsed paths.
    pub fn attributes(&self) -> FileAttributes {
        self.spec().attributes
    }

    /// Replace the attribute requirements.
    /// Affects only subsequent values; stored values are not re-checked.
    pub fn set_attributes(&mut self, attributes: FileAttributes) {
        self.spec_mut().attributes = attributes;
    }
}

//! Fixture loading for the dashboard test suites
//!
//! Fixtures are static, version-controlled files addressed by a relative path
//! under a fixed root. The encoding is inferred from the path suffix and the
//! file content is returned in the matching representation: raw bytes for
//! `.b64` (after decoding) and `.parquet`, a parsed value for `.json`, and
//! verbatim UTF-8 text for everything else. Every call re-reads from disk;
//! fixtures are small and test isolation matters more than speed.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use nutype::nutype;
use serde::de::DeserializeOwned;
#[allow(unused_imports)] // These are used by nutype derive macros
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::config::Settings;
use crate::error::{DecodeError, Error, Result};

/// Relative path to a fixture under the fixture root
///
/// Must stay inside the fixture tree: absolute paths and parent-directory
/// components are rejected at construction.
#[nutype(
    derive(Clone, Debug, Display, PartialEq, Eq, Hash, Deserialize, Serialize, TryFrom, AsRef),
    validate(predicate = is_tree_relative),
)]
pub struct FixturePath(String);

fn is_tree_relative(raw: &str) -> bool {
    !raw.is_empty()
        && Path::new(raw)
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}

/// Encoding kind for a fixture, resolved once per load from the path alone.
///
/// Precedence: `.b64` first, then `.parquet`, then `.json`, then text.
/// `.parquet` files never also end `.json`, but a `.parquet.b64` file is
/// base64 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureEncoding {
    /// Base64 text that decodes to raw bytes (`.b64`)
    Base64,
    /// Opaque binary, read without text decoding (`.parquet`)
    Binary,
    /// UTF-8 text parsed into a structured value (`.json`)
    Json,
    /// UTF-8 text returned verbatim (everything else)
    Text,
}

impl FixtureEncoding {
    /// Infer the encoding from a path suffix. Pure; no filesystem access.
    pub fn for_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        if name.ends_with(".b64") {
            Self::Base64
        } else if name.ends_with(".parquet") {
            Self::Binary
        } else if name.ends_with(".json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// A loaded fixture in the representation appropriate to its encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum FixtureValue {
    Bytes(Vec<u8>),
    Json(serde_json::Value),
    Text(String),
}

impl FixtureValue {
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn into_json(self) -> Option<serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Reads fixtures from a fixed root directory.
///
/// The loader never writes or mutates fixtures, keeps no cache, and holds no
/// file handle beyond the single read inside [`FixtureLoader::load`].
#[derive(Debug, Clone)]
pub struct FixtureLoader {
    root: PathBuf,
}

impl FixtureLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.fixture_root())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load a fixture by path relative to the root.
    ///
    /// Fails with [`Error::NotFound`] when the path does not resolve to a
    /// readable file inside the fixture tree, and with [`Error::Decode`] when
    /// the content is malformed for its suffix-implied encoding. No partial
    /// results are ever returned.
    pub fn load(&self, relative: &str) -> Result<FixtureValue> {
        let relative = FixturePath::try_new(relative.to_string()).map_err(|_| {
            Error::not_found(
                self.root.join(relative),
                io::Error::new(io::ErrorKind::NotFound, "path escapes the fixture tree"),
            )
        })?;
        let path = self.root.join(relative.as_ref());
        let encoding = FixtureEncoding::for_path(&path);
        debug!(path = %path.display(), ?encoding, "loading fixture");

        let raw = fs::read(&path).map_err(|source| Error::not_found(&path, source))?;
        match encoding {
            FixtureEncoding::Base64 => {
                let encoded = text(raw, &path)?;
                // Node and Python both tolerate whitespace in base64 input
                let compact: String = encoded.split_whitespace().collect();
                let bytes = BASE64
                    .decode(compact)
                    .map_err(|source| Error::decode(&path, source))?;
                Ok(FixtureValue::Bytes(bytes))
            }
            FixtureEncoding::Binary => Ok(FixtureValue::Bytes(raw)),
            FixtureEncoding::Json => {
                let content = text(raw, &path)?;
                let value = serde_json::from_str(&content)
                    .map_err(|source| Error::decode(&path, source))?;
                Ok(FixtureValue::Json(value))
            }
            FixtureEncoding::Text => Ok(FixtureValue::Text(text(raw, &path)?)),
        }
    }

    /// Load a `.json` fixture and deserialize it into a concrete type.
    pub fn load_json<T: DeserializeOwned>(&self, relative: &str) -> Result<T> {
        let path = self.root.join(relative);
        match self.load(relative)? {
            FixtureValue::Json(value) => {
                serde_json::from_value(value).map_err(|source| Error::decode(&path, source))
            }
            other => Err(Error::decode(
                &path,
                DecodeError::Json(serde::de::Error::custom(format!(
                    "expected a JSON fixture, got {other:?}"
                ))),
            )),
        }
    }
}

fn text(raw: Vec<u8>, path: &Path) -> Result<String> {
    String::from_utf8(raw).map_err(|source| Error::decode(path, source))
}

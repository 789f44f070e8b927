//! Wire DTOs for the auth and generation services.
//!
//! DESIGN
//! ======
//! Response types are decoded leniently: optional fields default instead of
//! failing, and identifiers accept either JSON strings or numbers. A body that
//! still cannot be decoded is reported to the caller as a failed request.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{Error as _, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An authenticated user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend user identifier.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email.
    #[serde(default)]
    pub email: String,
}

/// One generated source file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileItem {
    /// Filename; taken from the map key when the entry omits it.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub language: String,
}

/// Generated project files keyed by filename, in response order.
///
/// The generation service returns files as a JSON object; the first key of
/// that object becomes the active file, so document order is kept instead of
/// sorting. A repeated key replaces the earlier entry in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileSet {
    entries: Vec<(String, FileItem)>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Insert or replace a file, keeping the original position on replace.
    pub fn insert(&mut self, filename: impl Into<String>, file: FileItem) {
        let filename = filename.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == filename) {
            slot.1 = file;
        } else {
            self.entries.push((filename, file));
        }
    }

    pub fn get(&self, filename: &str) -> Option<&FileItem> {
        self.entries
            .iter()
            .find(|(k, _)| k == filename)
            .map(|(_, file)| file)
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.get(filename).is_some()
    }

    /// First filename in response order.
    pub fn first_name(&self) -> Option<&str> {
        self.entries.first().map(|(k, _)| k.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileItem)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, FileItem)> for FileSet {
    fn from_iter<I: IntoIterator<Item = (K, FileItem)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (filename, file) in iter {
            set.insert(filename, file);
        }
        set
    }
}

impl Serialize for FileSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (filename, file) in &self.entries {
            map.serialize_entry(filename, file)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FileSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FileSetVisitor;

        impl<'de> Visitor<'de> for FileSetVisitor {
            type Value = FileSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of filename to file")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<FileSet, A::Error> {
                let mut set = FileSet::new();
                while let Some((filename, mut file)) = access.next_entry::<String, FileItem>()? {
                    if file.name.is_empty() {
                        file.name.clone_from(&filename);
                    }
                    set.insert(filename, file);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(FileSetVisitor)
    }
}

/// A persisted build. Declared for wire compatibility; nothing loads or
/// stores projects from this client yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: String,
    #[serde(default)]
    pub files: Option<FileSet>,
}

/// Classification tag the generation service uses to route a prompt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    #[default]
    Build,
}

/// Body of `POST /api/ask`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest {
    pub prompt: String,
    pub request_type: RequestType,
}

impl AskRequest {
    pub fn build(prompt: impl Into<String>) -> Self {
        Self { prompt: prompt.into(), request_type: RequestType::Build }
    }
}

/// Body returned by `POST /api/ask`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub files: Option<FileSet>,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}

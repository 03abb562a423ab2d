//! Domain value objects: ComponentKind, Extension, ComponentSpec.
//!
//! # Design
//!
//! The enums are pure value types — `Copy`, equality-by-value, no identity.
//! `ComponentSpec` is the one entity of the system: the validated, normalized
//! answer record produced by the collector and consumed exactly once by the
//! source builder. It is immutable after construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;
use crate::domain::normalize::{is_valid_path, normalize_directory, to_pascal_case};

// ── ComponentKind ─────────────────────────────────────────────────────────────

/// The shape of the generated component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Class,
    Function,
}

impl ComponentKind {
    /// All variants, in prompt order.
    pub const ALL: [Self; 2] = [Self::Class, Self::Function];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Function => "function",
        }
    }

    /// Choice label shown in the interactive prompt.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::Function => "Function",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "class" => Ok(Self::Class),
            "function" => Ok(Self::Function),
            other => Err(DomainError::UnknownComponentKind(other.into())),
        }
    }
}

// ── Extension ─────────────────────────────────────────────────────────────────

/// File extension of the generated source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extension {
    Js,
    Jsx,
}

impl Extension {
    /// All variants, in prompt order.
    pub const ALL: [Self; 2] = [Self::Js, Self::Jsx];

    /// Extension including the leading dot, ready for concatenation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Js => ".js",
            Self::Jsx => ".jsx",
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Extension {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().trim_start_matches('.') {
            "js" => Ok(Self::Js),
            "jsx" => Ok(Self::Jsx),
            other => Err(DomainError::UnknownExtension(other.into())),
        }
    }
}

// ── ComponentSpec ─────────────────────────────────────────────────────────────

/// The validated answer record for one scaffolding run.
///
/// Constructed once by the answer collector, read-only thereafter. The name
/// is PascalCased and the directory is guaranteed to end in a separator, so
/// [`file_path`](Self::file_path) can concatenate without further checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSpec {
    name: String,
    kind: ComponentKind,
    connected: bool,
    extension: Extension,
    directory: String,
}

impl ComponentSpec {
    /// Build a spec from raw answers, normalizing as the prompt flow does.
    ///
    /// The name is accepted as-is (an empty name produces degenerate output;
    /// input quality is the collector's responsibility). The directory must
    /// pass the path-syntax predicate.
    pub fn new(
        name: impl Into<String>,
        kind: ComponentKind,
        connected: bool,
        extension: Extension,
        directory: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let directory = directory.into();
        if !is_valid_path(&directory) {
            return Err(DomainError::InvalidDirectoryPath { value: directory });
        }

        Ok(Self {
            name: to_pascal_case(&name.into()),
            kind,
            connected,
            extension,
            directory: normalize_directory(&directory),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn connected(&self) -> bool {
        self.connected
    }

    pub fn extension(&self) -> Extension {
        self.extension
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// File name without the directory, e.g. `MyButton.js`.
    pub fn file_name(&self) -> String {
        format!("{}{}", self.name, self.extension.as_str())
    }

    /// Destination path: directory + name + extension, by concatenation.
    ///
    /// No existence check and no directory creation happen here or later;
    /// a missing target directory surfaces as a write failure.
    pub fn file_path(&self) -> String {
        format!("{}{}{}", self.directory, self.name, self.extension.as_str())
    }
}

impl fmt::Display for ComponentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {} component",
            if self.connected { "connected " } else { "" },
            self.kind,
            self.name
        )
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

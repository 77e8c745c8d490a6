//! Invocation context handed to every precheck.
//!
//! The host extracts one [`Context`] per macro invocation. Prechecks read only
//! the fields they need, so new fields can be added without touching
//! existing prechecks.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumString};

/// How the utility-class macro was invoked at the call site.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum InvocationKind {
    /// `<div tw="...">`
    Property,
    /// `` tw`...` ``
    #[default]
    TaggedTemplate,
    /// `` tw.div`...` ``
    StyledElement,
    /// `` ${tw`...`} `` inside a `css` or `styled` template
    Interpolation,
}

/// Source position of an invocation, supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
    #[serde(default)]
    pub column: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Read-only description of one macro invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Context {
    /// Literal class string passed to the macro, before interpolation
    pub class_name_raw: String,

    #[serde(default)]
    pub kind: InvocationKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl Context {
    pub fn new(class_name_raw: impl Into<String>) -> Self {
        Self {
            class_name_raw: class_name_raw.into(),
            kind: InvocationKind::default(),
            location: None,
        }
    }

    pub fn with_kind(mut self, kind: InvocationKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Section metadata supplied by the host page
//!
//! A presentation is a titled list of sections. Any section with
//! `has_animation = true` mounts one demo controller.

use crate::config::DemoConfig;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// One content section of the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionData {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Paragraphs, in display order
    #[serde(default)]
    pub content: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_caption: Option<String>,
    #[serde(default)]
    pub has_animation: bool,
}

impl fmt::Display for SectionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.has_animation { " [demo]" } else { "" };
        write!(f, "{:<12} {}{}", self.id, self.title, marker)
    }
}

/// The whole page: sections plus the configuration for their demos
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    pub title: String,
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default, rename = "section")]
    pub sections: Vec<SectionData>,
}

impl Presentation {
    /// Parse and validate a presentation from TOML
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let presentation: Presentation = toml::from_str(content)?;
        presentation.validate()?;
        Ok(presentation)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let presentation = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            sections = presentation.sections.len(),
            "loaded presentation"
        );
        Ok(presentation)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.demo.validate()?;

        let mut seen = HashSet::new();
        for (index, section) in self.sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(ConfigError::EmptySectionId { index });
            }
            if !seen.insert(section.id.as_str()) {
                return Err(ConfigError::DuplicateSection(section.id.clone()));
            }
        }
        Ok(())
    }

    pub fn section(&self, id: &str) -> Option<&SectionData> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Sections that mount a demo widget, in page order
    pub fn animated_sections(&self) -> impl Iterator<Item = &SectionData> {
        self.sections.iter().filter(|s| s.has_animation)
    }
}

#[cfg(test)]
#[path = "section_tests.rs"]
mod tests;

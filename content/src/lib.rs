//! Portfolio content for Folio.
//!
//! The page is data-driven: everything shown (profile, about, skills,
//! projects, experience, contact, footer) comes from a TOML document. An
//! embedded default ships with the binary; a user file of the same shape
//! replaces it.

mod model;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use model::{
    About, Contact, ContactForm, ContactMethod, Experience, Footer, FormField, Heading, Link,
    MediaCard, Portfolio, Profile, Project, Projects, Side, Skill, SkillGroup, Skills, Stat,
    TimelineEntry, Updates,
};

const DEFAULT_PORTFOLIO: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/portfolio.toml"));

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse portfolio content: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("`{field}` must not be empty")]
    EmptyField { field: String },
    #[error("skill `{skill}` has level {level}; levels run from 0 to 100")]
    SkillLevel { skill: String, level: u8 },
    #[error("timeline entry `{title}` has no bullet points")]
    EmptyTimelineEntry { title: String },
}

impl Portfolio {
    /// The portfolio bundled with the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_toml_str(DEFAULT_PORTFOLIO)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = toml::from_str(source)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let source = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let portfolio = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "Loaded portfolio content");
        Ok(portfolio)
    }

    /// Checks invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ContentError> {
        require("profile.name", &self.profile.name)?;
        require("profile.brand", &self.profile.brand)?;

        for (field, heading) in [
            ("about.heading", &self.about.heading),
            ("skills.heading", &self.skills.heading),
            ("projects.heading", &self.projects.heading),
            ("experience.heading", &self.experience.heading),
            ("contact.heading", &self.contact.heading),
        ] {
            if heading.lead.trim().is_empty() && heading.accent.trim().is_empty() {
                return Err(ContentError::EmptyField {
                    field: field.to_string(),
                });
            }
        }

        for skill in self.skills.groups.iter().flat_map(|g| &g.skills) {
            require("skills.groups.skills.name", &skill.name)?;
            if skill.level > 100 {
                return Err(ContentError::SkillLevel {
                    skill: skill.name.clone(),
                    level: skill.level,
                });
            }
        }

        for project in &self.projects.items {
            require("projects.items.title", &project.title)?;
        }

        for entry in &self.experience.entries {
            require("experience.entries.title", &entry.title)?;
            if entry.bullets.is_empty() {
                return Err(ContentError::EmptyTimelineEntry {
                    title: entry.title.clone(),
                });
            }
        }

        Ok(())
    }
}

fn require(field: &str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        Err(ContentError::EmptyField {
            field: field.to_string(),
        })
    } else {
        Ok(())
    }
}

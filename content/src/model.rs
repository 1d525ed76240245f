//! Serde model of the portfolio document.

use serde::Deserialize;

const fn default_rows() -> u16 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub about: About,
    pub skills: Skills,
    pub projects: Projects,
    pub experience: Experience,
    pub contact: Contact,
    pub footer: Footer,
}

/// Two-tone section title: `lead` in the primary color, `accent` highlighted.
#[derive(Debug, Clone, Deserialize)]
pub struct Heading {
    pub lead: String,
    #[serde(default)]
    pub accent: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// Embedded external media, shown as a titled link card.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaCard {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    /// Short mark shown at the left of the navigation bar.
    pub brand: String,
    pub greeting: String,
    pub name: String,
    pub headline: String,
    #[serde(default)]
    pub highlight: String,
    pub intro: String,
    #[serde(default)]
    pub links: Vec<Link>,
    pub featured: Option<MediaCard>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct About {
    pub heading: Heading,
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0-100.
    pub level: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skills {
    pub heading: Heading,
    pub groups: Vec<SkillGroup>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub icon: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Updates {
    pub heading: Heading,
    pub posts: Vec<Link>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Projects {
    pub heading: Heading,
    pub items: Vec<Project>,
    pub updates: Updates,
}

/// Which side of the timeline spine an entry hangs from on wide layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimelineEntry {
    pub period: String,
    pub title: String,
    pub organization: String,
    #[serde(default)]
    pub side: Side,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    pub heading: Heading,
    pub entries: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactMethod {
    /// Channel name, e.g. "Email".
    pub kind: String,
    pub text: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormField {
    pub label: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default = "default_rows")]
    pub rows: u16,
}

/// The message form. Drawn only; it has no submit handler.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    pub title: String,
    pub fields: Vec<FormField>,
    pub submit_label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    pub heading: Heading,
    pub methods: Vec<ContactMethod>,
    pub form: ContactForm,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Footer {
    pub tagline: String,
    pub owner: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use crate::effects::color::{ColorError, Hsl};

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("project #{0} has an empty slug")]
    EmptySlug(usize),
    #[error("project slug `{0}` is used more than once")]
    DuplicateSlug(String),
    #[error("invalid colour in {field}: {source}")]
    Color {
        field: String,
        #[source]
        source: ColorError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HeroEntrance {
    #[default]
    FadeUp,
    SplitChars,
    Scramble,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Award {
    pub name: String,
    pub count: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct HeroConfig {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub closing: Option<String>,
    #[serde(default)]
    pub entrance: HeroEntrance,
    #[serde(default)]
    pub awards: Vec<Award>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub section: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Media {
    pub kind: MediaKind,
    pub src: String,
    #[serde(default)]
    pub poster: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectEntry {
    pub slug: String,
    pub title: String,
    pub company: String,
    pub category: String,
    pub year: String,
    pub description: String,
    pub full_description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub color: String,
    pub background_color: String,
    pub button_color: String,
    pub media: Media,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub case_study_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaygroundItem {
    pub title: String,
    pub description: String,
    pub color: String,
    pub icon: String,
    pub preview: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct AboutConfig {
    pub heading: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub stickers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShopItem {
    pub title: String,
    pub description: String,
    pub price: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CaseStudyImage {
    pub src: String,
    pub alt: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct ContactConfig {
    pub heading: String,
    pub blurb: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
}

impl ContactConfig {
    pub fn mailto(&self) -> String {
        match &self.subject {
            Some(subject) => format!("mailto:{}?subject={}", self.email, urlencoding::encode(subject)),
            None => format!("mailto:{}", self.email),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
}

fn default_spark_color() -> String {
    "#A8FFDC".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteContent {
    pub owner: String,
    pub hero: HeroConfig,
    #[serde(default)]
    pub nav: Vec<NavItem>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub playground: Vec<PlaygroundItem>,
    #[serde(default)]
    pub about: AboutConfig,
    #[serde(default)]
    pub shop: Vec<ShopItem>,
    #[serde(default)]
    pub case_studies: Vec<CaseStudyImage>,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default = "default_spark_color")]
    pub spark_color: String,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            owner: String::new(),
            hero: HeroConfig::default(),
            nav: Vec::new(),
            projects: Vec::new(),
            playground: Vec::new(),
            about: AboutConfig::default(),
            shop: Vec::new(),
            case_studies: Vec::new(),
            contact: ContactConfig::default(),
            socials: Vec::new(),
            spark_color: default_spark_color(),
        }
    }
}

impl SiteContent {
    pub fn parse(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for (index, project) in self.projects.iter().enumerate() {
            if project.slug.trim().is_empty() {
                return Err(ContentError::EmptySlug(index));
            }
            if !seen.insert(project.slug.as_str()) {
                return Err(ContentError::DuplicateSlug(project.slug.clone()));
            }
        }

        Hsl::from_hex(&self.spark_color).map_err(|source| ContentError::Color {
            field: "spark_color".to_string(),
            source,
        })?;
        Ok(())
    }

    pub fn find_project(&self, slug: &str) -> Option<&ProjectEntry> {
        self.projects.iter().find(|p| p.slug == slug)
    }
}

static SITE: Lazy<SiteContent> = Lazy::new(|| match SiteContent::parse(SITE_JSON) {
    Ok(content) => {
        log::debug!("Loaded site content with {} projects", content.projects.len());
        content
    }
    Err(e) => {
        log::error!("Failed to load site content: {}", e);
        SiteContent::default()
    }
});

pub fn site() -> &'static SiteContent {
    &SITE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_loads() {
        let content = SiteContent::parse(SITE_JSON).expect("embedded site.json should be valid");
        assert!(!content.projects.is_empty());
        assert_eq!(content.hero.entrance, HeroEntrance::SplitChars);
        assert_eq!(content.find_project("quillbot").map(|p| p.title.as_str()), Some("QuillBot"));
        assert!(content.find_project("does-not-exist").is_none());
    }

    #[test]
    fn duplicate_slugs_are_rejected() {
        let json = r##"{
            "owner": "x",
            "hero": { "title": "t", "subtitle": "s" },
            "projects": [
                { "slug": "a", "title": "A", "company": "c", "category": "c", "year": "2024",
                  "description": "d", "full_description": "f", "color": "#fff",
                  "background_color": "#fff", "button_color": "#fff",
                  "media": { "kind": "image", "src": "/a.png" } },
                { "slug": "a", "title": "B", "company": "c", "category": "c", "year": "2024",
                  "description": "d", "full_description": "f", "color": "#fff",
                  "background_color": "#fff", "button_color": "#fff",
                  "media": { "kind": "image", "src": "/b.png" } }
            ]
        }"##;
        match SiteContent::parse(json) {
            Err(ContentError::DuplicateSlug(slug)) => assert_eq!(slug, "a"),
            other => panic!("expected duplicate slug error, got {:?}", other),
        }
    }

    #[test]
    fn bad_spark_colour_is_rejected() {
        let json = r#"{ "owner": "x", "hero": { "title": "t", "subtitle": "s" }, "spark_color": "teal" }"#;
        assert!(matches!(SiteContent::parse(json), Err(ContentError::Color { .. })));
    }

    #[test]
    fn mailto_encodes_subject() {
        let contact = ContactConfig {
            heading: String::new(),
            blurb: String::new(),
            email: "me@example.com".to_string(),
            subject: Some("Hi there & hello".to_string()),
        };
        assert_eq!(contact.mailto(), "mailto:me@example.com?subject=Hi%20there%20%26%20hello");
    }
}

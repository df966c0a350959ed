use ratatui::style::Color;
use serde::Deserialize;

use super::collection::DeckError;

/// Stable identity of a card within a deck. Assigned at deck construction,
/// never derived from memory location, so lookups stay meaningful across
/// clones of the deck.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardId(String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One unit of content displayed full-screen within the carousel.
/// Carries no ordering state of its own; position comes from the deck.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub color: Color,
}

/// Declarative card description as it appears in deck files and config.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CardSpec {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub color: String,
}

impl Card {
    pub fn from_spec(spec: &CardSpec) -> Result<Self, DeckError> {
        let id = spec
            .id
            .clone()
            .unwrap_or_else(|| slugify(&spec.title));
        let color = spec.color.parse::<Color>().map_err(|_| DeckError::InvalidColor {
            id: id.clone(),
            value: spec.color.clone(),
        })?;

        Ok(Self {
            id: CardId::new(id),
            title: spec.title.clone(),
            color,
        })
    }
}

fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_dash = true;
    for ch in title.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, AppResult};

use super::card::{Card, CardId, CardSpec};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DeckError {
    #[error("deck has no cards")]
    Empty,
    #[error("duplicate card id: {0}")]
    DuplicateId(String),
    #[error("card {id}: unrecognized color {value:?}")]
    InvalidColor { id: String, value: String },
}

/// Ordered, fixed-for-the-session collection of cards.
///
/// Invariants enforced at construction: at least one card, no duplicate
/// identities. Identity lookup goes through an explicit index map so it
/// stays unambiguous.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    index: HashMap<CardId, usize>,
}

#[derive(Debug, Deserialize)]
struct DeckFile {
    #[serde(default)]
    cards: Vec<CardSpec>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.is_empty() {
            return Err(DeckError::Empty);
        }

        let mut index = HashMap::with_capacity(cards.len());
        for (position, card) in cards.iter().enumerate() {
            if index.insert(card.id.clone(), position).is_some() {
                return Err(DeckError::DuplicateId(card.id.as_str().to_string()));
            }
        }

        Ok(Self { cards, index })
    }

    pub fn from_specs(specs: &[CardSpec]) -> Result<Self, DeckError> {
        let cards = specs
            .iter()
            .map(Card::from_spec)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(cards)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read deck: {}", path.display()))
        })?;
        let parsed = toml::from_str::<DeckFile>(&raw).map_err(|source| {
            AppError::invalid_argument(format!("failed to parse deck {}: {source}", path.display()))
        })?;
        Ok(Self::from_specs(&parsed.cards)?)
    }

    /// The six-card demo deck shown when no deck file is supplied.
    pub fn builtin() -> Self {
        let cards = [
            ("blue", "Blue"),
            ("red", "Red"),
            ("green", "Green"),
            ("pink", "Pink"),
            ("purple", "Purple"),
            ("orange", "Orange"),
        ];
        let specs: Vec<CardSpec> = cards
            .iter()
            .map(|(id, title)| CardSpec {
                id: Some((*id).to_string()),
                title: (*title).to_string(),
                color: id.to_string(),
            })
            .collect();
        Self::from_specs(&specs).expect("builtin deck is statically valid")
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        // Construction rejects empty decks; kept for the conventional pair.
        self.cards.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.cards.len() - 1
    }

    pub fn card(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    pub fn index_of(&self, id: &CardId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

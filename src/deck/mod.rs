mod card;
mod collection;
mod neighbors;

pub use card::{Card, CardId, CardSpec};
pub use collection::{Deck, DeckError};
pub use neighbors::NeighborResolver;

use super::card::{Card, CardId};
use super::collection::Deck;

/// Adjacent-card lookup for the paging container.
///
/// Wraparound is a single policy switch: with `wrap` off the deck ends are
/// hard boundaries and `before`/`after` return `None` there; with `wrap` on
/// the opposite-end card is returned instead. An identity that is not in the
/// deck is treated as a boundary, never as an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeighborResolver {
    wrap: bool,
}

impl NeighborResolver {
    pub fn new(wrap: bool) -> Self {
        Self { wrap }
    }

    pub fn wrap(&self) -> bool {
        self.wrap
    }

    pub fn before<'a>(&self, deck: &'a Deck, id: &CardId) -> Option<&'a Card> {
        let position = deck.index_of(id)?;
        if position == 0 {
            return self.wrap.then(|| deck.card(deck.last_index())).flatten();
        }
        deck.card(position - 1)
    }

    pub fn after<'a>(&self, deck: &'a Deck, id: &CardId) -> Option<&'a Card> {
        let position = deck.index_of(id)?;
        if position == deck.last_index() {
            return self.wrap.then(|| deck.card(0)).flatten();
        }
        deck.card(position + 1)
    }
}

#[cfg(test)]
mod tests {
    use crate::deck::{CardId, CardSpec, Deck};

    use super::NeighborResolver;

    fn six_card_deck() -> Deck {
        let specs: Vec<CardSpec> = ["a", "b", "c", "d", "e", "f"]
            .iter()
            .map(|id| CardSpec {
                id: Some((*id).to_string()),
                title: id.to_uppercase(),
                color: "white".to_string(),
            })
            .collect();
        Deck::from_specs(&specs).expect("deck should build")
    }

    #[test]
    fn before_and_after_step_through_interior_cards() {
        let deck = six_card_deck();
        let resolver = NeighborResolver::new(false);

        let before = resolver.before(&deck, &CardId::new("d"));
        assert_eq!(before.map(|c| c.id.as_str()), Some("c"));

        let after = resolver.after(&deck, &CardId::new("d"));
        assert_eq!(after.map(|c| c.id.as_str()), Some("e"));
    }

    #[test]
    fn boundaries_return_none_without_wrap() {
        let deck = six_card_deck();
        let resolver = NeighborResolver::new(false);

        assert!(resolver.before(&deck, &CardId::new("a")).is_none());
        assert!(resolver.after(&deck, &CardId::new("f")).is_none());
    }

    #[test]
    fn boundaries_return_opposite_end_with_wrap() {
        let deck = six_card_deck();
        let resolver = NeighborResolver::new(true);

        let before = resolver.before(&deck, &CardId::new("a"));
        assert_eq!(before.map(|c| c.id.as_str()), Some("f"));

        let after = resolver.after(&deck, &CardId::new("f"));
        assert_eq!(after.map(|c| c.id.as_str()), Some("a"));
    }

    #[test]
    fn unknown_identity_is_treated_as_boundary() {
        let deck = six_card_deck();
        let resolver = NeighborResolver::new(true);

        assert!(resolver.before(&deck, &CardId::new("ghost")).is_none());
        assert!(resolver.after(&deck, &CardId::new("ghost")).is_none());
    }
}

use std::rc::Rc;

use yew::Reducible;

use crate::model::Quote;

pub fn default_quotes() -> Vec<Quote> {
    vec![
        Quote::new("The cosmos is within us. We are made of star-stuff.", "Carl Sagan"),
        Quote::new("Look up at the stars and not down at your feet.", "Stephen Hawking"),
        Quote::new("Code is the poetry of a better reality.", "Stellar Walker"),
    ]
}

/// Rotating list of hero quotes.
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteRotation {
    quotes: Vec<Quote>,
    index: usize,
}

impl Default for QuoteRotation {
    fn default() -> Self {
        Self {
            quotes: default_quotes(),
            index: 0,
        }
    }
}

impl QuoteRotation {
    pub fn current(&self) -> &Quote {
        &self.quotes[self.index]
    }

    /// Appends a fetched quote unless it is just the first default again
    /// (which is what the offline fallback returns).
    pub fn push_fetched(&mut self, quote: Quote) -> bool {
        if quote.text == self.quotes[0].text {
            return false;
        }
        self.quotes.push(quote);
        true
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.quotes.len();
    }
}

pub enum QuoteAction {
    Advance,
    Fetched(Quote),
}

impl Reducible for QuoteRotation {
    type Action = QuoteAction;

    fn reduce(self: Rc<Self>, action: QuoteAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            QuoteAction::Advance => next.advance(),
            QuoteAction::Fetched(q) => {
                if !next.push_fetched(q) {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_around() {
        let mut r = QuoteRotation::default();
        assert_eq!(r.current().author, "Carl Sagan");
        r.advance();
        r.advance();
        assert_eq!(r.current().author, "Stellar Walker");
        r.advance();
        assert_eq!(r.current().author, "Carl Sagan");
    }

    #[test]
    fn fallback_quote_is_not_duplicated() {
        let mut r = QuoteRotation::default();
        let dup = default_quotes().remove(0);
        assert!(!r.push_fetched(dup));
        assert_eq!(r.quotes.len(), 3);
        assert!(r.push_fetched(Quote::new("Stars compile slowly.", "Gemini AI")));
        assert_eq!(r.quotes.len(), 4);
        for _ in 0..3 {
            r.advance();
        }
        assert_eq!(r.current().author, "Gemini AI");
    }

    #[test]
    fn reducer_keeps_state_on_duplicate() {
        let r = Rc::new(QuoteRotation::default());
        let same = r.clone().reduce(QuoteAction::Fetched(default_quotes().remove(0)));
        assert!(Rc::ptr_eq(&r, &same));
        let moved = r.reduce(QuoteAction::Advance);
        assert_eq!(moved.current().author, "Stephen Hawking");
    }
}

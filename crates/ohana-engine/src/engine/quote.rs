use rand::{Rng, seq::IndexedRandom as _};

/// Flavor-text lines shown when rows are cleared.
///
/// The engine only ever asks for one line at random; the content comes from the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteBank {
    quotes: Vec<String>,
}

impl QuoteBank {
    #[must_use]
    pub fn new(quotes: Vec<String>) -> Self {
        Self { quotes }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Picks a quote uniformly at random, or `None` if the bank is empty.
    pub fn pick<R>(&self, rng: &mut R) -> Option<&str>
    where
        R: Rng + ?Sized,
    {
        self.quotes.choose(rng).map(String::as_str)
    }
}

impl<S> FromIterator<S> for QuoteBank
where
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

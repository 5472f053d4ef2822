use std::fmt;

/// Persistence failure of a [`ScoreStore`].
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("best score store failed: {message}")]
pub struct ScoreStoreError {
    message: String,
}

impl ScoreStoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Storage for a single persisted best-score value.
pub trait ScoreStore: fmt::Debug {
    /// Reads the stored value. A missing value is `Ok(0)`.
    fn load(&mut self) -> Result<u64, ScoreStoreError>;

    /// Overwrites the stored value.
    fn save(&mut self, score: u64) -> Result<(), ScoreStoreError>;
}

/// In-memory store, for tests and sessions without persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    score: u64,
}

impl MemoryScoreStore {
    #[must_use]
    pub fn new(score: u64) -> Self {
        Self { score }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&mut self) -> Result<u64, ScoreStoreError> {
        Ok(self.score)
    }

    fn save(&mut self, score: u64) -> Result<(), ScoreStoreError> {
        self.score = score;
        Ok(())
    }
}

/// Best score of all games, backed by a [`ScoreStore`].
///
/// The stored value is read once when opened. Afterwards [`BestScore::offer`] is the
/// only way to change it: a single compare-and-set against the score just computed.
///
/// Persistence failures are soft. An unreadable store counts as 0; after the first
/// failed write the best score is tracked in memory only for the rest of the run.
///
/// # Example
///
/// ```
/// use ohana_engine::{BestScore, MemoryScoreStore};
///
/// let mut best = BestScore::open(Box::new(MemoryScoreStore::new(500)));
/// assert!(!best.offer(400));
/// assert!(best.offer(700));
/// assert_eq!(best.value(), 700);
/// ```
#[derive(Debug)]
pub struct BestScore {
    value: u64,
    store: Option<Box<dyn ScoreStore>>,
}

impl Default for BestScore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl BestScore {
    /// Opens the store and reads the stored best score.
    pub fn open(mut store: Box<dyn ScoreStore>) -> Self {
        let value = store.load().unwrap_or_else(|e| {
            log::warn!("{e}; starting from a best score of 0");
            0
        });
        Self {
            value,
            store: Some(store),
        }
    }

    /// Best score tracked in memory only.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            value: 0,
            store: None,
        }
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Returns whether the best score is still written to its store.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.store.is_some()
    }

    /// Records `score` if it beats the best score, and returns whether it did.
    pub fn offer(&mut self, score: u64) -> bool {
        if score <= self.value {
            return false;
        }
        self.value = score;
        if let Some(store) = &mut self.store
            && let Err(e) = store.save(score)
        {
            log::warn!("{e}; keeping the best score in memory only");
            self.store = None;
        }
        true
    }
}

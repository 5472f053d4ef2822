use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
    seq::SliceRandom,
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::PieceKind;

/// Piece randomizer using the 7-bag algorithm.
///
/// # 7-Bag System
///
/// 1. The bag is filled with all 7 piece kinds in a random order
/// 2. Pieces are drawn from the bag one at a time
/// 3. The bag is refilled exactly when it is empty
///
/// Any 7 consecutive draws starting at a refill boundary therefore contain every
/// kind exactly once. Nothing is guaranteed across a boundary.
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
///
/// use ohana_engine::PieceBag;
///
/// let mut bag = PieceBag::new();
/// let kinds: HashSet<_> = (0..7).map(|_| bag.next_kind()).collect();
/// assert_eq!(kinds.len(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct PieceBag {
    rng: Pcg32,
    bag: Vec<PieceKind>,
}

impl Default for PieceBag {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceBag {
    /// Creates a new, empty bag with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic piece generation.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
            bag: Vec::with_capacity(PieceKind::LEN),
        }
    }

    /// Draws the next piece kind, refilling the bag first if it is empty.
    ///
    /// # Panics
    ///
    /// Panics if the bag is empty after a refill (should never happen).
    pub fn next_kind(&mut self) -> PieceKind {
        if self.bag.is_empty() {
            self.refill();
        }
        self.bag
            .pop()
            .expect("piece bag should never be empty after a refill")
    }

    /// Number of kinds left before the next refill.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.bag.len()
    }

    fn refill(&mut self) {
        debug_assert!(self.bag.is_empty());
        self.bag.extend(PieceKind::ALL);
        self.bag.shuffle(&mut self.rng);
    }
}

/// Seed for deterministic piece generation.
///
/// A 128-bit seed, written as 32 hex digits. The same seed always produces the same
/// piece sequence, which makes games reproducible for debugging and tests.
///
/// # Example
///
/// ```
/// use ohana_engine::{PieceBag, PieceSeed};
///
/// let seed: PieceSeed = "0123456789abcdef0123456789abcdef".parse().unwrap();
/// let mut a = PieceBag::with_seed(seed);
/// let mut b = PieceBag::with_seed(seed);
/// assert_eq!(a.next_kind(), b.next_kind());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSeed([u8; 16]);

impl PieceSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("invalid piece seed {input:?}: expected 32 hex digits")]
pub struct ParsePieceSeedError {
    input: String,
}

impl FromStr for PieceSeed {
    type Err = ParsePieceSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePieceSeedError {
            input: s.to_owned(),
        };
        if s.len() != 32 || !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| err())?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl fmt::Display for PieceSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl Serialize for PieceSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PieceSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

impl Distribution<PieceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        PieceSeed(seed)
    }
}

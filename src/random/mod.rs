//! Pseudo-random sources for random vectors and matrices.
//!
//! Every generator here owns its state and implements [`rand::RngCore`] and
//! [`rand::SeedableRng`], so it plugs into anything that takes an `Rng`,
//! including [`Vector::random`](crate::Vector::random) and
//! [`Matrix::random`](crate::Matrix::random). [`Generator`] selects one of them
//! at construction time from a [`GeneratorKind`].
//!
//! [`RandomExt`] adds the helpers the engine layers on top of a uniform source:
//! approximate normal draws, shuffling and random strings.

use std::fmt;
use std::str::FromStr;

use rand::{Rng, RngCore};

use crate::error::LinalgError;

pub mod lcg;
pub mod mt19937;
pub mod xorshift;

pub use lcg::Lcg48;
pub use mt19937::Mt19937;
pub use xorshift::Xorshift128;

/// Generator algorithms selectable at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneratorKind {
    /// 32-bit Mersenne Twister.
    #[default]
    MersenneTwister,
    /// xorshift over four 64-bit lanes.
    Xorshift,
    /// 48-bit linear congruential generator.
    Lcg,
}

impl FromStr for GeneratorKind {
    type Err = LinalgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mt" | "mt19937" | "mersenne" | "mersenne-twister" | "sfmt" => Ok(GeneratorKind::MersenneTwister),
            "xorshift" | "xor128" | "xorshift128" => Ok(GeneratorKind::Xorshift),
            "lcg" | "lcg48" => Ok(GeneratorKind::Lcg),
            other => Err(LinalgError::InvalidArgument(format!("unknown generator kind '{other}'"))),
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GeneratorKind::MersenneTwister => "mt19937",
            GeneratorKind::Xorshift => "xorshift",
            GeneratorKind::Lcg => "lcg",
        };
        f.write_str(name)
    }
}

/// One of the built-in generators, chosen at construction.
#[derive(Debug, Clone)]
pub enum Generator {
    MersenneTwister(Box<Mt19937>),
    Xorshift(Xorshift128),
    Lcg(Lcg48),
}

impl Generator {
    /// Seeded generator of the given kind.
    pub fn new(kind: GeneratorKind, seed: u64) -> Self {
        match kind {
            GeneratorKind::MersenneTwister => Generator::MersenneTwister(Box::new(Mt19937::new(seed as u32))),
            GeneratorKind::Xorshift => Generator::Xorshift(Xorshift128::new(seed)),
            GeneratorKind::Lcg => Generator::Lcg(Lcg48::new(seed)),
        }
    }

    /// Generator seeded from the thread-local entropy source.
    pub fn from_entropy(kind: GeneratorKind) -> Self {
        Self::new(kind, rand::thread_rng().next_u64())
    }

    pub fn kind(&self) -> GeneratorKind {
        match self {
            Generator::MersenneTwister(_) => GeneratorKind::MersenneTwister,
            Generator::Xorshift(_) => GeneratorKind::Xorshift,
            Generator::Lcg(_) => GeneratorKind::Lcg,
        }
    }

    /// Restart the sequence from `seed` without changing the algorithm.
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::new(self.kind(), seed);
    }
}

impl RngCore for Generator {
    fn next_u32(&mut self) -> u32 {
        match self {
            Generator::MersenneTwister(g) => g.next_u32(),
            Generator::Xorshift(g) => g.next_u32(),
            Generator::Lcg(g) => g.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Generator::MersenneTwister(g) => g.next_u64(),
            Generator::Xorshift(g) => g.next_u64(),
            Generator::Lcg(g) => g.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_from_u64(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Fill `dest` with little-endian words drawn from `next_u64`.
pub(crate) fn fill_bytes_from_u64<R: RngCore + ?Sized>(rng: &mut R, dest: &mut [u8]) {
    for chunk in dest.chunks_mut(8) {
        let word = rng.next_u64().to_le_bytes();
        chunk.copy_from_slice(&word[..chunk.len()]);
    }
}

const ALPHANUMERIC: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

// Printable ASCII without '"', '&', '*', '.', ';', '<', '=', '>', '?', '\\', '|'.
const SYMBOLS: &[u8] = b"!#$%'()+,-/0123456789:@ABCDEFGHIJKLMNOPQRSTUVWXYZ[]^_`abcdefghijklmnopqrstuvwxyz{}~";

/// Helpers layered on any uniform source.
pub trait RandomExt: Rng {
    /// Approximately standard-normal draw: the sum of twelve uniforms minus six.
    fn next_normal(&mut self) -> f64 {
        (0..12).map(|_| self.r#gen::<f64>()).sum::<f64>() - 6.0
    }

    /// Index in `0..n` taken as `floor(u * n)` of a uniform draw `u`.
    fn next_index(&mut self, n: usize) -> usize {
        ((self.r#gen::<f64>() * n as f64).floor() as usize).min(n.saturating_sub(1))
    }

    /// Fisher–Yates shuffle, walking from the back.
    fn shuffle_slice<T>(&mut self, values: &mut [T]) {
        for i in (1..values.len()).rev() {
            let j = self.next_index(i + 1);
            values.swap(i, j);
        }
    }

    /// Shuffle a slice of floats in place.
    fn shuffle_f64(&mut self, values: &mut [f64]) {
        self.shuffle_slice(values);
    }

    /// Random string over `0-9A-Za-z`.
    fn alphanumeric(&mut self, len: usize) -> String {
        self.pick_string(ALPHANUMERIC, len)
    }

    /// Random string over printable ASCII minus shell- and regex-hostile symbols.
    ///
    /// Every one of the 83 allowed characters (`!` through `~` without
    /// `" & * . ; < = > ? \ |`) is equally likely. This intentionally differs
    /// from an offset-and-bump mapping of `0..83`, which skews toward a few
    /// characters and never reaches `t` through `~`.
    fn symbol_string(&mut self, len: usize) -> String {
        self.pick_string(SYMBOLS, len)
    }

    #[doc(hidden)]
    fn pick_string(&mut self, alphabet: &[u8], len: usize) -> String {
        (0..len)
            .map(|_| alphabet[self.next_index(alphabet.len())] as char)
            .collect()
    }
}

impl<R: Rng + ?Sized> RandomExt for R {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_and_displays() {
        assert_eq!("Xorshift".parse::<GeneratorKind>().unwrap(), GeneratorKind::Xorshift);
        assert_eq!("sfmt".parse::<GeneratorKind>().unwrap(), GeneratorKind::MersenneTwister);
        assert_eq!("lcg".parse::<GeneratorKind>().unwrap(), GeneratorKind::Lcg);
        assert!("pcg64".parse::<GeneratorKind>().is_err());
        for kind in [GeneratorKind::MersenneTwister, GeneratorKind::Xorshift, GeneratorKind::Lcg] {
            assert_eq!(kind.to_string().parse::<GeneratorKind>().unwrap(), kind);
        }
    }

    #[test]
    fn symbol_alphabet_has_83_characters() {
        assert_eq!(SYMBOLS.len(), 83);
        for banned in b"\"&*.;<=>?\\|" {
            assert!(!SYMBOLS.contains(banned));
        }
        for upper in b't'..=b'~' {
            assert_eq!(SYMBOLS.contains(&upper), upper != b'|');
        }
    }

    #[test]
    fn reseed_restarts_sequence() {
        let mut g = Generator::new(GeneratorKind::Xorshift, 7);
        let first: Vec<u64> = (0..4).map(|_| g.next_u64()).collect();
        g.reseed(7);
        let again: Vec<u64> = (0..4).map(|_| g.next_u64()).collect();
        assert_eq!(first, again);
        assert_eq!(g.kind(), GeneratorKind::Xorshift);
    }

    #[test]
    fn fill_bytes_handles_partial_words() {
        let mut g = Generator::new(GeneratorKind::Lcg, 1);
        let mut bytes = [0u8; 13];
        g.fill_bytes(&mut bytes);
        assert!(bytes.iter().any(|&b| b != 0));
    }

    #[test]
    fn strings_use_their_alphabet() {
        let mut g = Generator::new(GeneratorKind::MersenneTwister, 99);
        let s = g.alphanumeric(64);
        assert_eq!(s.len(), 64);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
        let s = g.symbol_string(64);
        assert!(s.bytes().all(|b| SYMBOLS.contains(&b)));
    }
}

//! Sampling utilities over the deterministic stream.
//!
//! Every helper here is a pure function of the stream position and its
//! inputs. The order and count of draws each helper consumes is part of
//! the reproducibility contract — changing either silently changes every
//! report generated after the call site.

use crate::error::{EngineError, EngineResult};
use crate::rng::ReportRng;

impl ReportRng {
    /// Pick one element at `floor(draw * len)`.
    /// An empty pool is a configuration error upstream and fails loudly.
    pub fn pick_one<'a, T>(&mut self, pool: &'a [T]) -> EngineResult<&'a T> {
        if pool.is_empty() {
            return Err(EngineError::EmptyPool);
        }
        let idx = self.index_below(pool.len());
        Ok(&pool[idx])
    }

    /// Pick `count` distinct elements without replacement.
    ///
    /// Returns `[]` for a zero count or empty pool, and a straight copy
    /// when the pool is not larger than `count` (no draws consumed).
    /// Otherwise removes one drawn element at a time from a working
    /// copy — the removal order decides which elements remain, so it
    /// must not be replaced by an index-set scheme.
    pub fn pick_many_unique<T: Clone>(&mut self, pool: &[T], count: usize) -> Vec<T> {
        if count == 0 || pool.is_empty() {
            return Vec::new();
        }
        if count >= pool.len() {
            return pool.to_vec();
        }
        let mut remaining = pool.to_vec();
        let mut picked = Vec::with_capacity(count);
        for _ in 0..count {
            let idx = self.index_below(remaining.len());
            picked.push(remaining.remove(idx));
        }
        picked
    }

    /// Mean of three draws. Concentrates mass near 0.5 versus a single
    /// uniform draw (Irwin–Hall smoothing).
    pub fn mid_biased_f64(&mut self) -> f64 {
        (self.next_f64() + self.next_f64() + self.next_f64()) / 3.0
    }

    /// Mid-biased integer in [min, max], bounds swapped if inverted.
    pub fn mid_biased_int(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = if max < min { (max, min) } else { (min, max) };
        let f = self.mid_biased_f64();
        (lo as f64 + f * (hi - lo) as f64).round() as i64
    }

    /// Fisher–Yates shuffle on a copy. The input slice is untouched.
    pub fn shuffle<T: Clone>(&mut self, pool: &[T]) -> Vec<T> {
        let mut out = pool.to_vec();
        for i in (1..out.len()).rev() {
            let j = self.index_below(i + 1);
            out.swap(i, j);
        }
        out
    }

    /// Index in [0, len). The clamp guards the edge where rounding in
    /// `draw * len` lands exactly on `len`.
    fn index_below(&mut self, len: usize) -> usize {
        ((self.next_f64() * len as f64).floor() as usize).min(len - 1)
    }
}

/// Render an integer with a space as thousands separator, sign kept.
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

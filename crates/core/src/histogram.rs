//! Frequency counting over page coordinates and labels.
//!
//! A [`Histogram`] is a multiset: each key maps to how many times it was
//! seen. Coordinate histograms (keyed by [`KeyF64`]) can be re-bucketed onto
//! a tolerance grid with [`Histogram::rounded`], which is how slightly
//! different edge positions from the same ruling are brought together.

use std::hash::Hash;

use indexmap::IndexMap;
use itertools::Itertools;

use crate::error::{GeometryError, Result};
use crate::utils::{KeyF64, key_f64, round_to};

/// A frequency counter. Keys keep the order they were first seen in.
///
/// Zero counts are never stored, so two histograms compare equal exactly when
/// they hold the same keys with the same counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram<K: Hash + Eq = KeyF64> {
    counts: IndexMap<K, usize>,
}

impl<K: Hash + Eq> Default for Histogram<K> {
    fn default() -> Self {
        Self {
            counts: IndexMap::new(),
        }
    }
}

impl<K: Hash + Eq> Histogram<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` occurrences of `key`.
    pub fn add(&mut self, key: K, count: usize) {
        if count == 0 {
            return;
        }
        *self.counts.entry(key).or_insert(0) += count;
    }

    /// Number of occurrences of `key` (0 if never seen).
    pub fn get(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(k, &v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.counts.keys()
    }

    /// Entries ordered by descending count; ties keep first-seen order.
    pub fn most_common(&self) -> Vec<(&K, usize)> {
        self.iter().sorted_by(|a, b| b.1.cmp(&a.1)).collect()
    }

    /// Multiset union: counts for shared keys are summed.
    pub fn merge(&mut self, other: Histogram<K>) {
        for (key, count) in other.counts {
            self.add(key, count);
        }
    }
}

impl Histogram<KeyF64> {
    /// Counts one occurrence of a coordinate.
    pub fn add_value(&mut self, value: f64) {
        self.add(key_f64(value), 1);
    }

    /// Occurrences of a coordinate.
    pub fn get_value(&self, value: f64) -> usize {
        self.get(&key_f64(value))
    }

    /// Distinct coordinates in ascending order.
    pub fn sorted_values(&self) -> Vec<f64> {
        self.counts.keys().sorted().map(|k| k.0).collect()
    }

    /// Returns a new histogram with every key snapped to the nearest
    /// multiple of `tolerance`, summing counts that land in the same bucket.
    ///
    /// # Errors
    /// [`GeometryError::InvalidTolerance`] unless `tolerance` is positive and
    /// finite.
    pub fn rounded(&self, tolerance: f64) -> Result<Self> {
        if !(tolerance > 0.0 && tolerance.is_finite()) {
            return Err(GeometryError::InvalidTolerance(tolerance));
        }
        let mut out = Self::new();
        for (key, &count) in &self.counts {
            out.add(key_f64(round_to(key.0, tolerance)), count);
        }
        Ok(out)
    }
}

impl<K: Hash + Eq> std::ops::Add for Histogram<K> {
    type Output = Histogram<K>;

    fn add(mut self, other: Histogram<K>) -> Histogram<K> {
        self.merge(other);
        self
    }
}

impl<K: Hash + Eq> std::ops::AddAssign for Histogram<K> {
    fn add_assign(&mut self, other: Histogram<K>) {
        self.merge(other);
    }
}

impl<K: Hash + Eq> FromIterator<K> for Histogram<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut hist = Self::new();
        hist.extend(iter);
        hist
    }
}

impl<K: Hash + Eq> Extend<K> for Histogram<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(key, 1);
        }
    }
}

impl<K: Hash + Eq> IntoIterator for Histogram<K> {
    type Item = (K, usize);
    type IntoIter = indexmap::map::IntoIter<K, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

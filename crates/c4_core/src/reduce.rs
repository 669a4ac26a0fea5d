//! Hash-of-hashes reduction (SMPTE ST 2114:2017).
//!
//! The input set is deduplicated and sorted by text once. Each round then
//! pairs identifiers by position, hashes every pair into a new identifier and
//! carries an odd trailing element over to the end of the next round.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::codec::encode;
use crate::config::ReduceConfig;
use crate::digest::{hash_pair, Digest};
use crate::errors::{C4Error, Result};
use crate::id::C4Id;

#[derive(Debug, Clone, Default)]
pub struct Reducer {
    pub config: ReduceConfig,
}

impl Reducer {
    pub fn new(config: ReduceConfig) -> Self {
        Self { config }
    }

    /// Folds a set of identifiers into one.
    ///
    /// Every input is validated before any hashing happens; an invalid
    /// identifier fails the whole call.
    pub fn reduce<I, S>(&self, identifiers: I) -> Result<C4Id>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut inputs = 0usize;
        let mut set = BTreeSet::new();
        for s in identifiers {
            inputs += 1;
            set.insert(C4Id::parse(s.as_ref())?);
        }
        trace!(inputs, distinct = set.len(), "reduce");
        self.reduce_sorted(set.into_iter().collect())
    }

    /// Same as [`Reducer::reduce`] for callers holding raw digests.
    pub fn reduce_digests(&self, digests: &[Digest]) -> Result<C4Id> {
        let set: BTreeSet<C4Id> = digests.iter().map(encode).collect();
        trace!(inputs = digests.len(), distinct = set.len(), "reduce digests");
        self.reduce_sorted(set.into_iter().collect())
    }

    fn reduce_sorted(&self, mut round: Vec<C4Id>) -> Result<C4Id> {
        let mut depth = 0usize;
        while round.len() > 1 {
            let holding = if round.len() % 2 == 1 { round.pop() } else { None };
            let mut next = self.combine_round(&round);
            debug!(
                round = depth,
                pairs = next.len(),
                carried = holding.is_some(),
                "reduction round"
            );
            // the carried element goes after every combined id, unsorted
            next.extend(holding);
            round = next;
            depth += 1;
        }
        round.pop().ok_or(C4Error::EmptyInput)
    }

    fn combine_round(&self, ids: &[C4Id]) -> Vec<C4Id> {
        #[cfg(feature = "parallel")]
        {
            if ids.len() / 2 >= self.config.parallel_threshold {
                use rayon::prelude::*;
                return ids
                    .par_chunks_exact(2)
                    .map(|pair| combine_pair(&pair[0], &pair[1]))
                    .collect();
            }
        }
        ids.chunks_exact(2)
            .map(|pair| combine_pair(&pair[0], &pair[1]))
            .collect()
    }
}

/// One reduction step: hash two identifiers' digests in canonical order.
pub fn combine_pair(a: &C4Id, b: &C4Id) -> C4Id {
    encode(&hash_pair(&a.digest(), &b.digest()))
}

/// [`Reducer::reduce`] with the default configuration.
pub fn reduce<I, S>(identifiers: I) -> Result<C4Id>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Reducer::default().reduce(identifiers)
}

/// [`Reducer::reduce_digests`] with the default configuration.
pub fn reduce_digests(digests: &[Digest]) -> Result<C4Id> {
    Reducer::default().reduce_digests(digests)
}

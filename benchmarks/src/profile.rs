//! Profiling of `SortedArray` operations on a key workload.
//!
//! A profile run adds every key, looks every key up again, searches for keys that are
//! known to be absent, and finally removes all keys in random order. For each phase it
//! counts comparator calls, and for the add phase it records where each key landed
//! within its run of equal keys.

use serde_json::json;
use sorted_array::SortedArray;

use super::helpers::{self, CmpCounter};

/// Upper bound on comparator calls of a single search in an array of length `len`.
pub fn max_probes(len: usize) -> u64 {
    (64 - (len as u64).leading_zeros()) as u64
}

/// Comparator call statistics of one kind of operation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OpStats {
    pub ops: u64,
    pub cmp_calls: u64,
    pub max_cmp_calls: u64,
}

impl OpStats {
    fn record(&mut self, calls: u64) {
        self.ops += 1;
        self.cmp_calls += calls;
        self.max_cmp_calls = self.max_cmp_calls.max(calls);
    }

    pub fn mean(&self) -> f64 {
        if self.ops == 0 {
            0.0
        } else {
            self.cmp_calls as f64 / self.ops as f64
        }
    }

    fn to_json(&self) -> serde_json::Value {
        json!({
            "ops": self.ops,
            "cmp_calls": self.cmp_calls,
            "max_cmp_calls": self.max_cmp_calls,
            "mean_cmp_calls": self.mean(),
        })
    }
}

/// Where an added key ended up relative to the keys equal to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    /// No equal key existed before.
    NewKey,
    /// Behind all equal keys.
    RunEnd,
    /// Between two equal keys.
    RunInterior,
}

/// Classifies the key at `idx` of the sorted `values` by the run of equal keys around it.
pub fn classify_landing(values: &[i64], idx: usize) -> Landing {
    let key = values[idx];
    let run_start = values.partition_point(|x| *x < key);
    let run_end = values.partition_point(|x| *x <= key);
    if run_end - run_start == 1 {
        Landing::NewKey
    } else if idx + 1 == run_end {
        Landing::RunEnd
    } else {
        Landing::RunInterior
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Placement {
    pub new_key: u64,
    pub run_end: u64,
    pub run_interior: u64,
}

impl Placement {
    fn record(&mut self, landing: Landing) {
        match landing {
            Landing::NewKey => self.new_key += 1,
            Landing::RunEnd => self.run_end += 1,
            Landing::RunInterior => self.run_interior += 1,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Profile {
    pub adds: OpStats,
    pub hits: OpStats,
    pub misses: OpStats,
    pub removes: OpStats,
    pub placement: Placement,
    /// Array length and mean comparator calls per add over the preceding window.
    pub checkpoints: Vec<(usize, f64)>,
}

impl Profile {
    pub fn to_json(&self) -> serde_json::Value {
        let lens: Vec<_> = self.checkpoints.iter().map(|c| c.0).collect();
        let window_means: Vec<_> = self.checkpoints.iter().map(|c| c.1).collect();
        json!({
            "adds": self.adds.to_json(),
            "hits": self.hits.to_json(),
            "misses": self.misses.to_json(),
            "removes": self.removes.to_json(),
            "placement": {
                "new_key": self.placement.new_key,
                "run_end": self.placement.run_end,
                "run_interior": self.placement.run_interior,
            },
            "checkpoints": {
                "lens": lens,
                "mean_cmp_calls_per_add": window_means,
            },
        })
    }
}

/// Runs all profile phases over `keys`, taking a checkpoint every `measure_every` adds.
///
/// Fails if the array ever violates its search bound, loses a key, or ends up unsorted.
pub fn run_profile(keys: &[i64], measure_every: usize) -> anyhow::Result<Profile> {
    anyhow::ensure!(measure_every > 0, "measure_every must be positive");

    let counter = CmpCounter::new();
    let mut array = SortedArray::with_capacity(counter.comparator(), keys.len());
    let mut profile = Profile::default();

    log::info!("Adding {} keys...", keys.len());
    let mut window_calls = 0;
    for key in keys {
        let len = array.len();
        let idx = array.add(*key);
        let calls = counter.take();
        anyhow::ensure!(
            calls <= max_probes(len),
            "add of {} took {} comparisons at length {}",
            key, calls, len
        );
        profile.adds.record(calls);
        profile.placement.record(classify_landing(array.values(), idx));

        window_calls += calls;
        if array.len() % measure_every == 0 {
            profile.checkpoints.push((array.len(), window_calls as f64 / measure_every as f64));
            window_calls = 0;
        }
    }
    array.check_sorted()?;

    log::info!("Searching...");
    let len = array.len();
    for key in helpers::shuffle_clone(keys) {
        let found = array.index_of(&key);
        profile.hits.record(counter.take());
        anyhow::ensure!(found.map(|idx| array.values()[idx]) == Some(key), "key {} not found", key);

        let missing = key + 1;
        let found = array.index_of(&missing);
        let calls = counter.take();
        anyhow::ensure!(found.is_none(), "absent key {} found", missing);
        anyhow::ensure!(calls <= max_probes(len), "miss took {} comparisons", calls);
        profile.misses.record(calls);
    }

    log::info!("Removing...");
    for key in helpers::shuffle_clone(keys) {
        let removed = array.remove(&key);
        profile.removes.record(counter.take());
        anyhow::ensure!(removed == Some(key), "key {} could not be removed", key);
    }
    anyhow::ensure!(array.is_empty(), "{} keys left after removal", array.len());

    Ok(profile)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::helpers::{gen_keys, KeyDistribution};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_max_probes() {
        assert_eq!(max_probes(0), 0);
        assert_eq!(max_probes(1), 1);
        assert_eq!(max_probes(2), 2);
        assert_eq!(max_probes(3), 2);
        assert_eq!(max_probes(4), 3);
        assert_eq!(max_probes(1023), 10);
        assert_eq!(max_probes(1024), 11);
    }

    #[test]
    fn test_classify_landing() {
        let values = [1, 2, 2, 2, 3];
        assert_eq!(classify_landing(&values, 0), Landing::NewKey);
        assert_eq!(classify_landing(&values, 1), Landing::RunInterior);
        assert_eq!(classify_landing(&values, 2), Landing::RunInterior);
        assert_eq!(classify_landing(&values, 3), Landing::RunEnd);
        assert_eq!(classify_landing(&values, 4), Landing::NewKey);
    }

    #[test]
    fn test_single_key_lands_inside_run() {
        // For runs of length 1, 2, 3 the first probe is index 0, 1, 1.
        let profile = run_profile(&[4, 4, 4, 4], 1).unwrap();
        assert_eq!(
            profile.placement,
            Placement {
                new_key: 1,
                run_end: 2,
                run_interior: 1
            }
        );
        assert_eq!(profile.adds.cmp_calls, 3);
        assert_eq!(profile.hits.ops, 4);
        assert_eq!(profile.removes.ops, 4);
    }

    #[test]
    fn test_unique_keys_are_all_new() {
        for distribution in [KeyDistribution::Random, KeyDistribution::Asc, KeyDistribution::Dsc].iter() {
            let keys = gen_keys(*distribution, 500);
            let profile = run_profile(&keys, 50).unwrap();
            assert_eq!(profile.adds.ops, 500);
            if *distribution != KeyDistribution::Random {
                assert_eq!(profile.placement.new_key, 500);
            }
            assert_eq!(profile.checkpoints.len(), 10);
            assert_eq!(profile.checkpoints.last().map(|c| c.0), Some(500));
            assert!(profile.adds.max_cmp_calls <= max_probes(499));
        }
    }

    #[test]
    fn test_duplicate_heavy_keys() {
        let keys = gen_keys(KeyDistribution::Duplicates(8), 1000);
        let profile = run_profile(&keys, 100).unwrap();
        let placement = profile.placement;
        assert_eq!(placement.new_key + placement.run_end + placement.run_interior, 1000);
        assert!(placement.new_key <= 8);
        assert_eq!(profile.hits.ops, 1000);
        assert_eq!(profile.misses.ops, 1000);
        assert_eq!(profile.removes.ops, 1000);
    }

    #[test]
    fn test_to_json() {
        let profile = run_profile(&[0, 2, 2], 1).unwrap();
        let json = profile.to_json();
        assert_eq!(json["adds"]["ops"], 3);
        assert_eq!(json["placement"]["new_key"], 2);
        assert_eq!(json["placement"]["run_end"], 1);
        assert_eq!(json["checkpoints"]["lens"], json!([1, 2, 3]));
    }

    #[test]
    fn test_rejects_zero_measure_every() {
        assert!(run_profile(&[1], 0).is_err());
    }
}

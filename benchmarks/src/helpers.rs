use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::fs::{create_dir_all, File};
use std::path::Path;
use std::rc::Rc;
use std::str::FromStr;

use anyhow::Context;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

/// Shared call counter for comparators handed to a `SortedArray`.
#[derive(Clone, Default)]
pub struct CmpCounter(Rc<Cell<u64>>);

impl CmpCounter {
    pub fn new() -> Self {
        CmpCounter::default()
    }

    /// Returns an `i64` comparator which increments this counter on every call.
    pub fn comparator(&self) -> impl Fn(&i64, &i64) -> Ordering {
        let calls = self.0.clone();
        move |a, b| {
            calls.set(calls.get() + 1);
            a.cmp(b)
        }
    }

    pub fn calls(&self) -> u64 {
        self.0.get()
    }

    /// Returns the calls counted so far and resets the counter.
    pub fn take(&self) -> u64 {
        self.0.replace(0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyDistribution {
    Random,
    /// Uniform over this many distinct keys.
    Duplicates(i64),
    Asc,
    Dsc,
}

impl fmt::Display for KeyDistribution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KeyDistribution::Random => write!(f, "random"),
            KeyDistribution::Duplicates(distinct) => write!(f, "dups{}", distinct),
            KeyDistribution::Asc => write!(f, "asc"),
            KeyDistribution::Dsc => write!(f, "dsc"),
        }
    }
}

impl FromStr for KeyDistribution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(KeyDistribution::Random),
            "asc" => Ok(KeyDistribution::Asc),
            "dsc" => Ok(KeyDistribution::Dsc),
            _ => match s.strip_prefix("dups").map(str::parse::<i64>) {
                Some(Ok(distinct)) if distinct > 0 => Ok(KeyDistribution::Duplicates(distinct)),
                _ => Err(format!("Illegal key distribution: {}", s)),
            },
        }
    }
}

/// Generates `n` keys. All keys are even, so any odd value is a guaranteed miss.
pub fn gen_keys(distribution: KeyDistribution, n: usize) -> Vec<i64> {
    let mut rng = thread_rng();
    let keys: Vec<i64> = match distribution {
        KeyDistribution::Random => (0 .. n).map(|_| rng.gen_range(-(1 << 40), 1 << 40)).collect(),
        KeyDistribution::Duplicates(distinct) => (0 .. n).map(|_| rng.gen_range(0, distinct)).collect(),
        KeyDistribution::Asc => (0 .. n as i64).collect(),
        KeyDistribution::Dsc => (0 .. n as i64).rev().collect(),
    };
    keys.into_iter().map(|k| k * 2).collect()
}

pub fn shuffle_clone<T>(v: &[T]) -> Vec<T>
where
    T: Clone,
{
    let mut v_cloned = v.to_vec();
    v_cloned.shuffle(&mut thread_rng());
    v_cloned
}

pub fn export_json(filename: &str, json_data: &serde_json::Value) -> anyhow::Result<()> {
    let path = Path::new(filename);
    if let Some(parent) = path.parent() {
        create_dir_all(parent)
            .with_context(|| format!("Unable to create directory {}", parent.display()))?;
    }

    let f = File::create(path).with_context(|| format!("Unable to create json file {}", filename))?;
    serde_json::to_writer_pretty(f, json_data)
        .with_context(|| format!("Unable to write json file {}", filename))?;
    log::debug!("Exported {}", filename);
    Ok(())
}

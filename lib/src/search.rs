use std::cmp::Ordering;

/// Outcome of a probe search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Probe {
    /// The first probed index that compared equal.
    Found(usize),
    /// No equal element; the value belongs at this index.
    Vacant(usize),
}

impl Probe {
    /// Index where a new value should be placed. Values equal to an existing
    /// element go directly behind the element the search hit.
    #[inline]
    pub fn insertion_index(self) -> usize {
        match self {
            Probe::Found(idx) => idx + 1,
            Probe::Vacant(idx) => idx,
        }
    }

    #[inline]
    pub fn found(self) -> Option<usize> {
        match self {
            Probe::Found(idx) => Some(idx),
            Probe::Vacant(_) => None,
        }
    }
}

// Note: We are using our own binary search instead of `slice::binary_search_by`. The probe
// is the rounded-up midpoint of the inclusive range, and the search stops at the first equal
// element. Both determine where duplicates end up, so the probe sequence must not change.
//
// `f` compares the searched value against the candidate, i.e., `Greater` means the value
// belongs right of the candidate.
pub(crate) fn probe_search<T, F>(data: &[T], mut f: F) -> Probe
where
    F: FnMut(&T) -> Ordering,
{
    if data.is_empty() {
        return Probe::Vacant(0);
    }
    let mut l: usize = 0;
    let mut r: usize = data.len() - 1;

    loop {
        let probe = l + (r - l + 1) / 2;

        match f(&data[probe]) {
            Ordering::Greater => {
                l = probe + 1;
                if l > r {
                    return Probe::Vacant(probe + 1);
                }
            }
            Ordering::Less => {
                // probe >= l, so this is the point where r would drop below l
                if probe == l {
                    return Probe::Vacant(probe);
                }
                r = probe - 1;
            }
            Ordering::Equal => {
                return Probe::Found(probe);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn search(data: &[i32], value: i32) -> Probe {
        probe_search(data, |x| value.cmp(x))
    }

    fn generate_random_array(rng: &mut StdRng, len: usize) -> (Vec<i32>, Vec<i32>) {
        let mut data = Vec::new();

        let mut last = 0;
        for _ in 0 .. len {
            data.push(last);
            if rng.gen::<bool>() {
                last += 1;
            }
        }

        let mut test_values = Vec::with_capacity(data.len() * 3 + 1);
        test_values.push(0);
        for x in &data {
            test_values.push(*x - 1);
            test_values.push(*x);
            test_values.push(*x + 1);
        }
        (data, test_values)
    }

    #[test]
    fn test_probe_search_empty() {
        let data: Vec<i32> = vec![];
        assert_eq!(search(&data, 0), Probe::Vacant(0));
    }

    #[test]
    fn test_probe_search_basic() {
        let data = [1, 3, 5];
        assert_eq!(search(&data, 0), Probe::Vacant(0));
        assert_eq!(search(&data, 1), Probe::Found(0));
        assert_eq!(search(&data, 2), Probe::Vacant(1));
        assert_eq!(search(&data, 3), Probe::Found(1));
        assert_eq!(search(&data, 4), Probe::Vacant(2));
        assert_eq!(search(&data, 5), Probe::Found(2));
        assert_eq!(search(&data, 6), Probe::Vacant(3));
    }

    #[test]
    fn test_probe_search_single() {
        let data = [7];
        assert_eq!(search(&data, 6), Probe::Vacant(0));
        assert_eq!(search(&data, 7), Probe::Found(0));
        assert_eq!(search(&data, 8), Probe::Vacant(1));
    }

    #[test]
    fn test_probe_search_rounds_midpoint_up() {
        // The first probe of a two element range is index 1, not index 0.
        let data = [2, 2];
        assert_eq!(search(&data, 2), Probe::Found(1));

        let data = [1, 2, 2, 2];
        assert_eq!(search(&data, 2), Probe::Found(2));

        let data = [2, 2, 2, 2, 3];
        assert_eq!(search(&data, 2), Probe::Found(2));
    }

    #[test]
    fn test_insertion_index() {
        assert_eq!(Probe::Found(3).insertion_index(), 4);
        assert_eq!(Probe::Vacant(3).insertion_index(), 3);
        assert_eq!(Probe::Found(3).found(), Some(3));
        assert_eq!(Probe::Vacant(3).found(), None);
    }

    #[test]
    fn test_probe_search_brute_force() {
        let num_random_variations = 100;
        let mut rng: StdRng = SeedableRng::seed_from_u64(0);
        for array_len in 0 ..= 32 {
            for _ in 0 .. num_random_variations {
                let (data, test_values) = generate_random_array(&mut rng, array_len);
                assert_eq!(data.len(), array_len);
                for value in &test_values {
                    let contained = data.contains(value);
                    match search(&data, *value) {
                        Probe::Found(idx) => {
                            assert!(contained);
                            assert_eq!(data[idx], *value);
                        }
                        Probe::Vacant(idx) => {
                            assert!(!contained);
                            assert!(data[.. idx].iter().all(|x| x < value));
                            assert!(data[idx ..].iter().all(|x| x > value));
                        }
                    }
                }
            }
        }
    }
}

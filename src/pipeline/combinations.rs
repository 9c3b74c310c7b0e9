use tracing::warn;

use crate::error::{Result, StatsError};
use crate::pipeline::constants::DEFAULT_MIN_DEPTH;

/// Depth bounds for combination generation (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub min_depth: usize,
    pub max_depth: usize,
}

impl GeneratorConfig {
    /// Sizes `DEFAULT_MIN_DEPTH..=max_depth`.
    pub fn new(max_depth: usize) -> Self {
        Self {
            min_depth: DEFAULT_MIN_DEPTH,
            max_depth,
        }
    }

    pub fn with_min_depth(mut self, min_depth: usize) -> Self {
        self.min_depth = min_depth;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_depth < 1 {
            return Err(StatsError::InvalidConfig(
                "min depth must be at least 1".to_string(),
            ));
        }
        if self.max_depth < self.min_depth {
            return Err(StatsError::InvalidConfig(format!(
                "max depth ({}) must be >= min depth ({})",
                self.max_depth, self.min_depth
            )));
        }
        Ok(())
    }
}

/// Lazy k-combinations of a slice in lexicographic index order.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    pool: &'a [T],
    indices: Vec<usize>,
    first: bool,
    done: bool,
}

impl<'a, T> Combinations<'a, T> {
    pub fn new(pool: &'a [T], k: usize) -> Self {
        Self {
            pool,
            indices: (0..k).collect(),
            first: true,
            done: k > pool.len(),
        }
    }

    fn current(&self) -> Vec<&'a T> {
        self.indices.iter().map(|&i| &self.pool[i]).collect()
    }
}

impl<'a, T> Iterator for Combinations<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.first {
            self.first = false;
            return Some(self.current());
        }

        let n = self.pool.len();
        let k = self.indices.len();

        // Rightmost index that can still move right
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] != i + n - k {
                break;
            }
        }

        self.indices[i] += 1;
        for j in (i + 1)..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }

        Some(self.current())
    }
}

/// Every combination of ingredient names with size in the configured range,
/// smallest sizes first.
#[derive(Debug, Clone)]
pub struct MealInputs<'a> {
    names: &'a [String],
    next_size: usize,
    max_size: usize,
    current: Option<Combinations<'a, String>>,
}

impl<'a> Iterator for MealInputs<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(combo) = self.current.as_mut().and_then(|c| c.next()) {
                return Some(combo.into_iter().map(String::as_str).collect());
            }
            if self.next_size > self.max_size {
                self.current = None;
                return None;
            }
            self.current = Some(Combinations::new(self.names, self.next_size));
            self.next_size += 1;
        }
    }
}

/// Generate meal inputs over `names` for every size in `config`.
///
/// A `max_depth` larger than the number of names is clamped, not rejected.
pub fn generate_meal_inputs<'a>(
    names: &'a [String],
    config: &GeneratorConfig,
) -> Result<MealInputs<'a>> {
    config.validate()?;

    let max_size = config.max_depth.min(names.len());
    if config.max_depth > names.len() {
        warn!(
            requested = config.max_depth,
            available = names.len(),
            "max depth exceeds catalog size; clamping"
        );
    }

    Ok(MealInputs {
        names,
        next_size: config.min_depth,
        max_size,
        current: None,
    })
}

/// Binomial coefficient C(n, k); `None` when it does not fit in a `u128`.
pub fn binomial(n: usize, k: usize) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    (0..k).try_fold(1u128, |acc, i| {
        // acc * (n - i) is divisible by i + 1; cancel the common factor first
        let divisor = (i + 1) as u128;
        let g = gcd(acc, divisor);
        (acc / g).checked_mul((n - i) as u128 / (divisor / g))
    })
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Number of meal inputs `generate_meal_inputs` yields for `n` names, or
/// `None` if the count overflows a `u128`.
pub fn combination_count(n: usize, config: &GeneratorConfig) -> Option<u128> {
    let max_size = config.max_depth.min(n);
    (config.min_depth..=max_size).try_fold(0u128, |acc, k| acc.checked_add(binomial(n, k)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("i{}", i)).collect()
    }

    #[test]
    fn test_combinations_lexicographic() {
        let pool = ["a", "b", "c", "d"];
        let combos: Vec<Vec<&&str>> = Combinations::new(&pool, 2).collect();
        let flat: Vec<String> = combos
            .iter()
            .map(|c| c.iter().map(|s| **s).collect::<String>())
            .collect();
        assert_eq!(flat, vec!["ab", "ac", "ad", "bc", "bd", "cd"]);
    }

    #[test]
    fn test_combinations_k_larger_than_pool() {
        let pool = [1, 2];
        assert_eq!(Combinations::new(&pool, 3).count(), 0);
    }

    #[test]
    fn test_combinations_full_pool() {
        let pool = [1, 2, 3];
        let combos: Vec<Vec<&i32>> = Combinations::new(&pool, 3).collect();
        assert_eq!(combos, vec![vec![&1, &2, &3]]);
    }

    #[test]
    fn test_sizes_ascend() {
        let names = names(4);
        let config = GeneratorConfig::new(3);
        let sizes: Vec<usize> = generate_meal_inputs(&names, &config)
            .unwrap()
            .map(|m| m.len())
            .collect();

        let mut sorted = sizes.clone();
        sorted.sort();
        assert_eq!(sizes, sorted);
        assert_eq!(sizes.len(), 4 + 6 + 4);
    }

    #[test]
    fn test_min_depth_skips_smaller_sizes() {
        let names = names(5);
        let config = GeneratorConfig::new(3).with_min_depth(2);
        let inputs: Vec<Vec<&str>> = generate_meal_inputs(&names, &config).unwrap().collect();

        assert!(inputs.iter().all(|m| (2..=3).contains(&m.len())));
        assert_eq!(inputs.len(), 10 + 10);
        assert_eq!(inputs[0], vec!["i0", "i1"]);
    }

    #[test]
    fn test_validate_rejects_bad_depths() {
        let names = names(3);

        let zero_min = GeneratorConfig::new(2).with_min_depth(0);
        assert!(matches!(
            generate_meal_inputs(&names, &zero_min),
            Err(StatsError::InvalidConfig(_))
        ));

        let inverted = GeneratorConfig::new(1).with_min_depth(2);
        assert!(matches!(
            generate_meal_inputs(&names, &inverted),
            Err(StatsError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_min_depth_above_catalog_size_yields_nothing() {
        let names = names(2);
        let config = GeneratorConfig::new(5).with_min_depth(4);
        assert_eq!(generate_meal_inputs(&names, &config).unwrap().count(), 0);
    }

    #[test]
    fn test_empty_catalog_yields_nothing() {
        let names: Vec<String> = Vec::new();
        let config = GeneratorConfig::new(2);
        assert_eq!(generate_meal_inputs(&names, &config).unwrap().count(), 0);
    }

    #[test]
    fn test_bounded_consumption() {
        let names = names(30);
        let config = GeneratorConfig::new(15);
        let first: Vec<Vec<&str>> = generate_meal_inputs(&names, &config)
            .unwrap()
            .take(3)
            .collect();
        assert_eq!(first, vec![vec!["i0"], vec!["i1"], vec!["i2"]]);
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(5, 0), Some(1));
        assert_eq!(binomial(5, 2), Some(10));
        assert_eq!(binomial(5, 5), Some(1));
        assert_eq!(binomial(3, 4), Some(0));
        assert_eq!(binomial(40, 20), Some(137_846_528_820));
    }

    #[test]
    fn test_binomial_large_catalog() {
        // Intermediate products exceed u128 here even though the result fits
        let middle = binomial(130, 65).unwrap();
        let pascal = binomial(129, 64).unwrap() + binomial(129, 65).unwrap();
        assert_eq!(middle, pascal);

        assert_eq!(binomial(200, 100), None);
    }

    #[test]
    fn test_combination_count_overflow_is_none() {
        let config = GeneratorConfig::new(200);
        assert_eq!(combination_count(200, &config), None);
        assert_eq!(combination_count(130, &GeneratorConfig::new(1)), Some(130));
    }

    #[test]
    fn test_combination_count_matches_generator() {
        let names = names(6);
        for max in 1..=8 {
            for min in 1..=max {
                let config = GeneratorConfig::new(max).with_min_depth(min);
                let generated = generate_meal_inputs(&names, &config).unwrap().count() as u128;
                assert_eq!(Some(generated), combination_count(names.len(), &config));
            }
        }
    }
}

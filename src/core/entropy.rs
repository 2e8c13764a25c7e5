use rand::{Rng, RngCore};
use std::collections::VecDeque;

/// Source of the random draws behind word selection and composition.
pub trait Entropy {
    /// A digit in `0..=9`.
    fn digit(&mut self) -> u8;

    /// An index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: RngCore> Entropy for R {
    fn digit(&mut self) -> u8 {
        self.gen_range(0..=9)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Replays fixed draws, for reproducible passwords.
///
/// Each queue repeats from the start once exhausted; an empty queue always
/// yields zero. Picks are reduced modulo `len`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEntropy {
    digits: VecDeque<u8>,
    picks: VecDeque<usize>,
}

impl ScriptedEntropy {
    pub fn new(digits: Vec<u8>, picks: Vec<usize>) -> Self {
        Self {
            digits: digits.into(),
            picks: picks.into(),
        }
    }
}

impl Entropy for ScriptedEntropy {
    fn digit(&mut self) -> u8 {
        match self.digits.pop_front() {
            Some(d) => {
                self.digits.push_back(d);
                d % 10
            }
            None => 0,
        }
    }

    fn pick(&mut self, len: usize) -> usize {
        match self.picks.pop_front() {
            Some(p) => {
                self.picks.push_back(p);
                p % len
            }
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rng_entropy_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(rng.digit() <= 9);
            assert!(rng.pick(3) < 3);
        }
    }

    #[test]
    fn test_scripted_entropy_cycles() {
        let mut entropy = ScriptedEntropy::new(vec![4, 2], vec![5]);
        assert_eq!(entropy.digit(), 4);
        assert_eq!(entropy.digit(), 2);
        assert_eq!(entropy.digit(), 4);
        assert_eq!(entropy.pick(3), 2);
        assert_eq!(entropy.pick(10), 5);
    }

    #[test]
    fn test_empty_script_yields_zero() {
        let mut entropy = ScriptedEntropy::default();
        assert_eq!(entropy.digit(), 0);
        assert_eq!(entropy.pick(4), 0);
    }
}

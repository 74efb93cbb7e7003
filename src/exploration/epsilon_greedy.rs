use log::debug;
use rand::Rng;

use crate::assert_interval;

use super::Choice;

/// Epsilon greedy exploration policy whose threshold is divided down at every episode boundary
///
/// After `n` completed episodes, ε<sub>n</sub> = ε<sub>0</sub> / d<sup>n</sup>
#[derive(Debug, Clone, PartialEq)]
pub struct EpsilonGreedy {
    epsilon: f64,
    divisor: f64,
}

impl EpsilonGreedy {
    /// Initialize epsilon greedy policy from a starting epsilon and a decay divisor
    ///
    /// **Panics** if `epsilon` is not in the interval `[0,1]`, or if `divisor` is not positive
    pub fn new(epsilon: f64, divisor: f64) -> Self {
        assert_interval!(epsilon, 0.0, 1.0);
        assert!(
            divisor > 0.0,
            "Invalid value for `divisor`. Must be greater than 0."
        );
        Self { epsilon, divisor }
    }

    /// Current exploration probability
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn divisor(&self) -> f64 {
        self.divisor
    }

    /// Invoke epsilon greedy policy with a uniform draw from `rng`
    ///
    /// Exploits only when the draw strictly exceeds epsilon, so ε = 0 always exploits
    /// and ε = 1 always explores.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Choice {
        if rng.gen::<f64>() > self.epsilon {
            Choice::Exploit
        } else {
            Choice::Explore
        }
    }

    /// Signal the end of an episode
    pub fn decay(&mut self) {
        self.epsilon /= self.divisor;
        debug!("epsilon decayed to {}", self.epsilon);
    }

    /// Probability of each action under this policy given the index of the greedy action
    pub fn action_probabilities(&self, greedy: usize, n_actions: usize) -> Vec<f64> {
        let mut probs = vec![self.epsilon / n_actions as f64; n_actions];
        probs[greedy] += 1.0 - self.epsilon;
        probs
    }
}

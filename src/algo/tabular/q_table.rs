use std::collections::HashMap;

use log::trace;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    assert_interval,
    exploration::{Choice, EpsilonGreedy},
    util::{argmax, max},
};

use super::{update_rule::UpdateRule, ActionValues, Hashable};

/// Configuration for the [`QTableAgent`]
#[derive(Debug, Clone, PartialEq)]
pub struct QTableAgentConfig {
    /// Initial exploration probability
    ///
    /// **Default**: `0.1`
    pub epsilon: f64,
    /// Epsilon is divided by this value every time an episode ends
    ///
    /// **Default**: `2.0`
    pub epsilon_divisor: f64,
    /// Learning rate
    ///
    /// **Default**: `0.1`
    pub alpha: f64,
    /// Discount factor
    ///
    /// **Default**: `0.9`
    pub gamma: f64,
    /// Size of the action space, actions are the indices `0..n_actions`
    ///
    /// **Default**: `6`
    pub n_actions: usize,
    /// How the next-state value is estimated
    ///
    /// **Default**: [`UpdateRule::Sarsamax`]
    pub update_rule: UpdateRule,
}

impl Default for QTableAgentConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.1,
            epsilon_divisor: 2.0,
            alpha: 0.1,
            gamma: 0.9,
            n_actions: 6,
            update_rule: UpdateRule::default(),
        }
    }
}

/// A tabular temporal-difference agent that learns action values one transition at a time
///
/// The agent keeps a vector of `n_actions` values per state. Rows are created on first access,
/// zero-initialized, and never removed: reading a state in [`select_action`](Self::select_action)
/// allocates its row just like training on it does.
///
/// The caller drives the loop, calling [`select_action`](Self::select_action) and then
/// [`step`](Self::step) for every transition of every episode.
///
/// ### Generics
/// - `S` - The state type, used as a key in a [`HashMap`]
/// - `R` - The random number generator owned by the agent
pub struct QTableAgent<S: Hashable, R: Rng = StdRng> {
    q_table: HashMap<S, ActionValues>,
    exploration: EpsilonGreedy,
    alpha: f64, // learning rate
    gamma: f64, // discount factor
    n_actions: usize,
    update_rule: UpdateRule,
    rng: R,
}

impl<S: Hashable> QTableAgent<S, StdRng> {
    /// Initialize a new `QTableAgent` with a generator seeded from the operating system
    ///
    /// **Panics** on an invalid configuration, see [`with_rng`](Self::with_rng)
    pub fn new(config: QTableAgentConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Initialize a new `QTableAgent` whose random choices are reproducible from `seed`
    pub fn with_seed(config: QTableAgentConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<S: Hashable, R: Rng> QTableAgent<S, R> {
    /// Initialize a new `QTableAgent` that draws its random numbers from `rng`
    ///
    /// **Panics** if `alpha`, `gamma` or `epsilon` is not in the interval `[0,1]`,
    /// if `epsilon_divisor` is not positive, or if `n_actions` is zero
    pub fn with_rng(config: QTableAgentConfig, rng: R) -> Self {
        assert_interval!(config.alpha, 0.0, 1.0);
        assert_interval!(config.gamma, 0.0, 1.0);
        assert!(
            config.n_actions > 0,
            "Invalid value for `n_actions`. The action space must not be empty."
        );
        Self {
            q_table: HashMap::new(),
            exploration: EpsilonGreedy::new(config.epsilon, config.epsilon_divisor),
            alpha: config.alpha,
            gamma: config.gamma,
            n_actions: config.n_actions,
            update_rule: config.update_rule,
            rng,
        }
    }

    /// Choose an action for `state` with the epsilon greedy policy
    ///
    /// Returns an index in `0..n_actions`. The exploit branch picks the highest valued action,
    /// preferring the lowest index on ties. `episode` is accepted for the caller's convenience
    /// and does not affect the choice.
    pub fn select_action(&mut self, state: &S, _episode: u32) -> usize {
        let choice = self.exploration.choose(&mut self.rng);
        let greedy = argmax(self.values(state));
        match choice {
            Choice::Exploit => greedy,
            Choice::Explore => self.rng.gen_range(0..self.n_actions),
        }
    }

    /// Learn from a single transition
    ///
    /// Applies Q(s,a) ← Q(s,a) + α[r + γ v(s') - Q(s,a)] where v(s') depends on the
    /// [`UpdateRule`] and is zero when `done`. Ending an episode also decays epsilon.
    ///
    /// **Panics** if `action` is not in `0..n_actions`
    pub fn step(
        &mut self,
        state: &S,
        action: usize,
        reward: f64,
        next_state: &S,
        done: bool,
        episode: u32,
    ) {
        assert!(
            action < self.n_actions,
            "Invalid action: {} (action space has {} actions)",
            action,
            self.n_actions
        );

        let current = self.values(state)[action];
        let next_value = if done {
            0.0
        } else {
            self.next_state_value(next_state, episode)
        };
        let target = reward + self.gamma * next_value;
        let updated = current + self.alpha * (target - current);
        self.values(state)[action] = updated;
        trace!("action {action}, reward {reward}, target {target}: {current} -> {updated}");

        if done {
            self.exploration.decay();
        }
    }

    /// Estimate of the value of a non-terminal next state under the configured rule
    fn next_state_value(&mut self, next_state: &S, episode: u32) -> f64 {
        match self.update_rule {
            UpdateRule::Sarsamax => max(self.values(next_state)),
            UpdateRule::Sarsa => {
                let next_action = self.select_action(next_state, episode);
                self.values(next_state)[next_action]
            }
            UpdateRule::ExpectedSarsa => {
                let greedy = argmax(self.values(next_state));
                let probs = self
                    .exploration
                    .action_probabilities(greedy, self.n_actions);
                self.values(next_state)
                    .iter()
                    .zip(probs)
                    .map(|(q, p)| q * p)
                    .sum()
            }
        }
    }

    /// Row for `state`, inserted as zeros if it has never been seen
    fn values(&mut self, state: &S) -> &mut ActionValues {
        let n_actions = self.n_actions;
        self.q_table
            .entry(state.clone())
            .or_insert_with(|| vec![0.0; n_actions])
    }

    pub fn get_q_table(&self) -> &HashMap<S, ActionValues> {
        &self.q_table
    }

    /// Action values of `state` without creating a row for it
    pub fn action_values(&self, state: &S) -> Option<&[f64]> {
        self.q_table.get(state).map(Vec::as_slice)
    }

    /// Highest valued action of a visited state
    pub fn greedy_action(&self, state: &S) -> Option<usize> {
        self.q_table.get(state).map(|values| argmax(values))
    }

    /// Greedy action of every state in the table
    pub fn greedy_policy(&self) -> HashMap<S, usize> {
        self.q_table
            .iter()
            .map(|(state, values)| (state.clone(), argmax(values)))
            .collect()
    }

    /// Number of states in the table
    pub fn len(&self) -> usize {
        self.q_table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q_table.is_empty()
    }

    /// Current exploration probability
    pub fn epsilon(&self) -> f64 {
        self.exploration.epsilon()
    }

    pub fn epsilon_divisor(&self) -> f64 {
        self.exploration.divisor()
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn n_actions(&self) -> usize {
        self.n_actions
    }

    pub fn update_rule(&self) -> UpdateRule {
        self.update_rule
    }
}

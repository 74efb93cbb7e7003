use sarsamax::{QTableAgent, QTableAgentConfig, UpdateRule};

const NUM_EPISODES: u32 = 1000;
const NUM_SEEDS: u64 = 20;

/// Deterministic two state, two action chain
///
/// - state 0, action 0: episode ends with reward 0
/// - state 0, action 1: move to state 1 with reward 0
/// - state 1, action 0: episode ends with reward 0
/// - state 1, action 1: episode ends with reward 1
///
/// The optimal action is 1 in both states, with Q*(0,1) = γ and Q*(1,1) = 1.
struct Chain {
    state: u8,
}

impl Chain {
    fn reset(&mut self) -> u8 {
        self.state = 0;
        self.state
    }

    /// **Returns** `(next_state, reward, done)`
    fn step(&mut self, action: usize) -> (u8, f64, bool) {
        match (self.state, action) {
            (0, 1) => {
                self.state = 1;
                (1, 0.0, false)
            }
            (1, 1) => (1, 1.0, true),
            (state, _) => (state, 0.0, true),
        }
    }
}

fn train(update_rule: UpdateRule, seed: u64) -> QTableAgent<u8> {
    let config = QTableAgentConfig {
        epsilon: 1.0,
        epsilon_divisor: 1.01,
        alpha: 0.1,
        gamma: 0.9,
        n_actions: 2,
        update_rule,
    };
    let mut agent = QTableAgent::with_seed(config, seed);
    let mut env = Chain { state: 0 };

    for episode in 1..=NUM_EPISODES {
        let mut state = env.reset();
        loop {
            let action = agent.select_action(&state, episode);
            let (next_state, reward, done) = env.step(action);
            agent.step(&state, action, reward, &next_state, done, episode);
            if done {
                break;
            }
            state = next_state;
        }
    }

    agent
}

fn assert_converges(update_rule: UpdateRule) {
    let solved = (0..NUM_SEEDS)
        .filter(|&seed| train(update_rule, seed).greedy_action(&0) == Some(1))
        .count();
    assert!(
        solved as u64 >= NUM_SEEDS - 1,
        "{update_rule:?} found the optimal start action in only {solved}/{NUM_SEEDS} runs"
    );
}

#[test]
fn sarsamax_learns_optimal_start_action() {
    assert_converges(UpdateRule::Sarsamax);
}

#[test]
fn sarsa_learns_optimal_start_action() {
    assert_converges(UpdateRule::Sarsa);
}

#[test]
fn expected_sarsa_learns_optimal_start_action() {
    assert_converges(UpdateRule::ExpectedSarsa);
}

#[test]
fn sarsamax_values_approach_optimum() {
    let agent = train(UpdateRule::Sarsamax, 3);
    let start = agent.action_values(&0).expect("start state visited");
    let next = agent.action_values(&1).expect("second state visited");

    assert!((next[1] - 1.0).abs() < 0.05, "Q(1,1) ≈ 1, got {}", next[1]);
    assert!((start[1] - 0.9).abs() < 0.05, "Q(0,1) ≈ γ, got {}", start[1]);
    assert_eq!(agent.len(), 2, "Only the two reachable states are stored");

    let expected_epsilon = 1.0 / 1.01_f64.powi(NUM_EPISODES as i32);
    assert!((agent.epsilon() - expected_epsilon).abs() < 1e-12);
}

/// Temporal-difference target used by the [`QTableAgent`](super::q_table::QTableAgent)
///
/// All three rules share the update
///
/// Q(s,a) ← Q(s,a) + α[r + γ v(s') - Q(s,a)]
///
/// and differ only in how the next-state value v(s') is estimated. Terminal
/// transitions always use v(s') = 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UpdateRule {
    /// Off-policy Q-learning: v(s') = max<sub>a'</sub> Q(s',a')
    #[default]
    Sarsamax,
    /// On-policy: v(s') = Q(s',a') where a' is sampled from the agent's own epsilon greedy policy
    Sarsa,
    /// v(s') = Σ<sub>a'</sub> π(a'|s') Q(s',a') under the current epsilon greedy policy
    ExpectedSarsa,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sarsamax() {
        assert_eq!(UpdateRule::default(), UpdateRule::Sarsamax);
    }
}

/// Implemented RL algorithms
pub mod algo;

/// Exploration policies
pub mod exploration;

mod util;

pub use algo::tabular::{
    q_table::{QTableAgent, QTableAgentConfig},
    update_rule::UpdateRule,
};

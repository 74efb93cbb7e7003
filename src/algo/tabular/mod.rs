pub mod q_table;
pub mod update_rule;

/// A trait for state types that can be used as keys in a [`HashMap`](std::collections::HashMap)
pub trait Hashable: Clone + Eq + std::hash::Hash {}

impl<T> Hashable for T where T: Clone + Eq + std::hash::Hash {}

/// The value of every action in a single state, indexed by action
pub type ActionValues = Vec<f64>;

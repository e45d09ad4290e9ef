//! The solver core: puzzle model, domain store, propagation, and search.

pub mod domain;
pub mod engine;
pub(crate) mod propagate;
pub mod puzzle;
pub mod solution;
pub mod stats;
pub(crate) mod work_list;

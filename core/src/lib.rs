//! friend-rank-core: social graph friend recommendation engine.
//!
//! A pure Rust library that maintains an undirected adjacency structure
//! and ranks friend candidates three ways: by shared friends, by bounded
//! BFS network distance, and by a combined weighted score.
//! No I/O dependencies — this crate compiles standalone.
//!
//! Designed as the engine behind the friend-rank driver, but usable
//! independently for benchmarking and testing.

mod graph;
mod recommend;

pub use graph::{SocialGraph, UserId};
pub use recommend::{
    advanced_recommendation, most_connected, network_distance, recommend_by_common_friends,
    recommend_by_network_distance, DegreeRank, Recommendation, UNREACHABLE,
};

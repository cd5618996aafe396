use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::{SocialGraph, UserId};

/// Sentinel distance for unreachable or unknown users.
pub const UNREACHABLE: u32 = u32::MAX;

/// A ranked friend candidate.
///
/// Score semantics depend on the producing query: shared-friend count for
/// [`recommend_by_common_friends`], hop distance for
/// [`recommend_by_network_distance`], truncated weighted score for
/// [`advanced_recommendation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub user_id: UserId,
    pub score: u32,
}

/// A user ranked by direct connection count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeRank {
    pub user_id: UserId,
    pub degree: u32,
}

/// Rank friend-of-friend candidates by how many of `user`'s friends they
/// share.
///
/// Every two-hop path `user–f–g` counts once toward candidate `g`; the user
/// and existing direct friends are never candidates, and candidates with no
/// qualifying path never appear. Sorted by descending count, ties by
/// ascending identifier. Unknown users get an empty result.
pub fn recommend_by_common_friends(graph: &SocialGraph, user: UserId) -> Vec<Recommendation> {
    let friends = match graph.neighbor_set(user) {
        Some(friends) => friends,
        None => return Vec::new(),
    };

    let mut shared_paths: HashMap<UserId, u32> = HashMap::new();
    for &current_friend in friends {
        for candidate in graph.neighbors(current_friend) {
            if candidate == user || friends.contains(&candidate) {
                continue;
            }
            *shared_paths.entry(candidate).or_insert(0) += 1;
        }
    }

    let mut recommendations: Vec<Recommendation> = shared_paths
        .into_iter()
        .map(|(user_id, score)| Recommendation { user_id, score })
        .collect();
    recommendations.sort_by(|a, b| b.score.cmp(&a.score).then(a.user_id.cmp(&b.user_id)));
    recommendations
}

/// Rank candidates by BFS hop distance from `user`, closest first.
///
/// Level-bounded BFS with a visited-set guard; the first-discovered distance
/// is authoritative. Everything at distance ≤ `max_distance` is explored and
/// nothing beyond it is ever reported. Direct friends and the user itself
/// are not candidates. Ties are broken by ascending identifier. Unknown
/// users get an empty result.
pub fn recommend_by_network_distance(
    graph: &SocialGraph,
    user: UserId,
    max_distance: u32,
) -> Vec<Recommendation> {
    let friends = match graph.neighbor_set(user) {
        Some(friends) => friends,
        None => return Vec::new(),
    };

    let mut distances: HashMap<UserId, u32> = HashMap::new();
    let mut visited: HashSet<UserId> = HashSet::new();
    let mut queue: VecDeque<(UserId, u32)> = VecDeque::new();

    visited.insert(user);
    queue.push_back((user, 0));

    while let Some((current, depth)) = queue.pop_front() {
        // Frontier stops expanding at the bound: nodes at exactly
        // `max_distance` are discovered, nothing past it is enqueued.
        if depth >= max_distance {
            continue;
        }

        for neighbor in graph.neighbors(current) {
            if visited.insert(neighbor) {
                queue.push_back((neighbor, depth + 1));
                if !friends.contains(&neighbor) {
                    distances.insert(neighbor, depth + 1);
                }
            }
        }
    }

    let mut recommendations: Vec<Recommendation> = distances
        .into_iter()
        .map(|(user_id, score)| Recommendation { user_id, score })
        .collect();
    recommendations.sort_by(|a, b| a.score.cmp(&b.score).then(a.user_id.cmp(&b.user_id)));
    recommendations
}

/// Rank friend-of-friend candidates by a combined weighted score.
///
/// Candidates are discovered as in [`recommend_by_common_friends`]. Each
/// encounter of a candidate through an intermediate friend contributes
/// `common_friends * 2 + 1 / (distance + 1)`, where `common_friends` is the
/// number of `user`'s direct friends also connected to the candidate and
/// `distance` is the BFS shortest-path hop count. The factor is recomputed
/// per encounter, so a candidate reachable through k intermediate friends
/// accrues it k times. Contributions are summed per candidate and the final
/// score is truncated toward zero.
///
/// `_max_distance` is accepted for signature symmetry with
/// [`recommend_by_network_distance`] but does not bound the proximity
/// search; see DESIGN.md.
pub fn advanced_recommendation(
    graph: &SocialGraph,
    user: UserId,
    _max_distance: u32,
) -> Vec<Recommendation> {
    let friends = match graph.neighbor_set(user) {
        Some(friends) => friends,
        None => return Vec::new(),
    };

    let mut scores: HashMap<UserId, f64> = HashMap::new();
    for &current_friend in friends {
        for candidate in graph.neighbors(current_friend) {
            if candidate == user || friends.contains(&candidate) {
                continue;
            }

            let common_friends = friends
                .iter()
                .filter(|&&f| graph.are_connected(candidate, f))
                .count();

            let distance = network_distance(graph, user, candidate);
            let proximity = 1.0 / (f64::from(distance) + 1.0);

            *scores.entry(candidate).or_insert(0.0) += common_friends as f64 * 2.0 + proximity;
        }
    }

    let mut recommendations: Vec<Recommendation> = scores
        .into_iter()
        .map(|(user_id, score)| Recommendation {
            user_id,
            // Non-negative by construction, so `as` truncates toward zero.
            score: score as u32,
        })
        .collect();
    recommendations.sort_by(|a, b| b.score.cmp(&a.score).then(a.user_id.cmp(&b.user_id)));
    recommendations
}

/// BFS shortest-path hop count between two users.
///
/// Returns [`UNREACHABLE`] when no path exists, including when either user
/// is unknown to the graph. Distance from a user to itself is 0.
pub fn network_distance(graph: &SocialGraph, from: UserId, to: UserId) -> u32 {
    if !graph.contains(from) || !graph.contains(to) {
        return UNREACHABLE;
    }

    let mut visited: HashSet<UserId> = HashSet::new();
    let mut queue: VecDeque<(UserId, u32)> = VecDeque::new();

    visited.insert(from);
    queue.push_back((from, 0));

    while let Some((current, distance)) = queue.pop_front() {
        if current == to {
            return distance;
        }
        for neighbor in graph.neighbors(current) {
            if visited.insert(neighbor) {
                queue.push_back((neighbor, distance + 1));
            }
        }
    }

    UNREACHABLE
}

/// Return users ranked by direct connection count.
///
/// If `top_n` is 0, returns all users. Sorted by descending degree,
/// ties by ascending identifier.
pub fn most_connected(graph: &SocialGraph, top_n: usize) -> Vec<DegreeRank> {
    let mut ranks: Vec<DegreeRank> = graph
        .users()
        .map(|user_id| DegreeRank {
            user_id,
            degree: graph.degree(user_id) as u32,
        })
        .collect();

    ranks.sort_by(|a, b| b.degree.cmp(&a.degree).then(a.user_id.cmp(&b.user_id)));

    if top_n > 0 && top_n < ranks.len() {
        ranks.truncate(top_n);
    }

    ranks
}

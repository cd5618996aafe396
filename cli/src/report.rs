//! Report assembly and rendering.
//!
//! The engine's result types stay serde-free; this module owns the
//! serializable mirror structs and the text layout.

use std::fmt;

use serde::Serialize;

use friend_rank_core::{
    advanced_recommendation, most_connected, recommend_by_common_friends,
    recommend_by_network_distance, Recommendation, SocialGraph, UserId,
};

/// One ranked candidate in a report.
#[derive(Debug, Serialize)]
pub struct RankedUser {
    pub user: UserId,
    pub score: u32,
}

/// Recommendation lists for a single user.
#[derive(Debug, Serialize)]
pub struct UserReport {
    pub user: UserId,
    pub friends: Vec<UserId>,
    pub by_common_friends: Vec<RankedUser>,
    pub by_network_distance: Vec<RankedUser>,
    pub advanced: Vec<RankedUser>,
}

/// Whole-network report.
#[derive(Debug, Serialize)]
pub struct NetworkReport {
    pub user_count: usize,
    pub connection_count: usize,
    pub max_distance: u32,
    pub most_connected: Vec<RankedUser>,
    pub users: Vec<UserReport>,
}

/// Run every query against the graph and assemble the report.
///
/// Covers all known users in ascending identifier order, or just
/// `user_filter` when set.
pub fn build(
    graph: &SocialGraph,
    max_distance: u32,
    user_filter: Option<UserId>,
    top: usize,
) -> NetworkReport {
    let mut user_ids: Vec<UserId> = match user_filter {
        Some(user) => vec![user],
        None => graph.users().collect(),
    };
    user_ids.sort_unstable();

    let users = user_ids
        .into_iter()
        .map(|user| {
            let mut friends: Vec<UserId> = graph.friends(user).into_iter().collect();
            friends.sort_unstable();
            UserReport {
                user,
                friends,
                by_common_friends: ranked(recommend_by_common_friends(graph, user)),
                by_network_distance: ranked(recommend_by_network_distance(
                    graph,
                    user,
                    max_distance,
                )),
                advanced: ranked(advanced_recommendation(graph, user, max_distance)),
            }
        })
        .collect();

    NetworkReport {
        user_count: graph.user_count(),
        connection_count: graph.connection_count(),
        max_distance,
        most_connected: most_connected(graph, top)
            .into_iter()
            .map(|r| RankedUser {
                user: r.user_id,
                score: r.degree,
            })
            .collect(),
        users,
    }
}

fn ranked(recommendations: Vec<Recommendation>) -> Vec<RankedUser> {
    recommendations
        .into_iter()
        .map(|r| RankedUser {
            user: r.user_id,
            score: r.score,
        })
        .collect()
}

impl fmt::Display for NetworkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Social network: {} users, {} connections (max distance {})",
            self.user_count, self.connection_count, self.max_distance
        )?;

        if !self.most_connected.is_empty() {
            writeln!(f)?;
            writeln!(f, "Most connected users:")?;
            for entry in &self.most_connected {
                writeln!(f, "  user {} (friends: {})", entry.user, entry.score)?;
            }
        }

        for report in &self.users {
            writeln!(f)?;
            if report.friends.is_empty() {
                writeln!(f, "User {} is connected to: (nobody)", report.user)?;
            } else {
                let friends: Vec<String> =
                    report.friends.iter().map(|id| id.to_string()).collect();
                writeln!(
                    f,
                    "User {} is connected to: {}",
                    report.user,
                    friends.join(" ")
                )?;
            }

            writeln!(f, "Recommendations for user {}:", report.user)?;
            write_ranking(f, "by common friends", "common friends", &report.by_common_friends)?;
            write_ranking(f, "by network distance", "distance", &report.by_network_distance)?;
            write_ranking(f, "advanced", "score", &report.advanced)?;
        }

        Ok(())
    }
}

fn write_ranking(
    f: &mut fmt::Formatter<'_>,
    heading: &str,
    label: &str,
    entries: &[RankedUser],
) -> fmt::Result {
    writeln!(f, "  {heading}:")?;
    if entries.is_empty() {
        return writeln!(f, "    (none)");
    }
    for entry in entries {
        writeln!(f, "    user {} ({}: {})", entry.user, label, entry.score)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Six-user network: 1-2, 1-3, 2-4, 3-4, 3-5, 4-5, 4-6.
    fn make_sample() -> SocialGraph {
        let mut g = SocialGraph::new();
        g.load_connections([(1, 2), (1, 3), (2, 4), (3, 4), (3, 5), (4, 5), (4, 6)]);
        g
    }

    #[test]
    fn test_build_covers_all_users_sorted() {
        let graph = make_sample();
        let report = build(&graph, 2, None, 3);
        let ids: Vec<UserId> = report.users.iter().map(|u| u.user).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(report.user_count, 6);
        assert_eq!(report.connection_count, 7);
        assert_eq!(report.most_connected.len(), 3);
        assert_eq!(report.most_connected[0].user, 4);
    }

    #[test]
    fn test_build_single_user() {
        let graph = make_sample();
        let report = build(&graph, 2, Some(1), 0);
        assert_eq!(report.users.len(), 1);

        let user = &report.users[0];
        assert_eq!(user.friends, vec![2, 3]);

        let common: Vec<(UserId, u32)> = user
            .by_common_friends
            .iter()
            .map(|r| (r.user, r.score))
            .collect();
        assert_eq!(common, vec![(4, 2), (5, 1)]);

        let advanced: Vec<(UserId, u32)> =
            user.advanced.iter().map(|r| (r.user, r.score)).collect();
        assert_eq!(advanced, vec![(4, 8), (5, 2)]);
    }

    #[test]
    fn test_build_unknown_user_is_empty() {
        let graph = make_sample();
        let report = build(&graph, 2, Some(99), 0);
        let user = &report.users[0];
        assert!(user.friends.is_empty());
        assert!(user.by_common_friends.is_empty());
        assert!(user.by_network_distance.is_empty());
        assert!(user.advanced.is_empty());
    }

    #[test]
    fn test_text_layout() {
        let graph = make_sample();
        let text = build(&graph, 2, Some(1), 2).to_string();
        assert!(text.contains("Social network: 6 users, 7 connections (max distance 2)"));
        assert!(text.contains("User 1 is connected to: 2 3"));
        assert!(text.contains("    user 4 (common friends: 2)"));
        assert!(text.contains("    user 4 (score: 8)"));
    }

    #[test]
    fn test_text_marks_empty_rankings() {
        let mut graph = SocialGraph::new();
        graph.add_user(0);
        let text = build(&graph, 2, None, 0).to_string();
        assert!(text.contains("User 0 is connected to: (nobody)"));
        assert!(text.contains("    (none)"));
    }

    #[test]
    fn test_json_shape() {
        let graph = make_sample();
        let report = build(&graph, 2, Some(1), 1);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["user_count"], 6);
        assert_eq!(value["most_connected"][0]["user"], 4);
        assert_eq!(value["users"][0]["user"], 1);
        assert_eq!(value["users"][0]["by_common_friends"][0]["user"], 4);
        assert_eq!(value["users"][0]["by_common_friends"][0]["score"], 2);
    }
}

use std::collections::{HashMap, HashSet};

/// User identifier in the social graph.
pub type UserId = u64;

/// In-memory social graph: each user maps to its set of direct friends.
///
/// Connections are undirected and stored symmetrically: if `a` lists `b`
/// as a friend, `b` lists `a`. Every mutation preserves this.
pub struct SocialGraph {
    adjacency: HashMap<UserId, HashSet<UserId>>,
}

impl SocialGraph {
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Pre-allocate for a known user count.
    pub fn with_capacity(user_count: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(user_count),
        }
    }

    /// Register a user with no connections. Idempotent.
    pub fn add_user(&mut self, user: UserId) {
        self.adjacency.entry(user).or_default();
    }

    /// Connect two users, creating either endpoint if it does not exist yet.
    /// Idempotent if the connection is already present.
    ///
    /// A user cannot friend themselves: `a == b` still creates the user
    /// but adds no edge.
    pub fn add_connection(&mut self, a: UserId, b: UserId) {
        if a == b {
            self.add_user(a);
            return;
        }
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
    }

    /// Disconnect two users. Silent no-op when either user is unknown or
    /// the connection does not exist.
    pub fn remove_connection(&mut self, a: UserId, b: UserId) {
        if !self.adjacency.contains_key(&a) || !self.adjacency.contains_key(&b) {
            return;
        }
        if let Some(friends) = self.adjacency.get_mut(&a) {
            friends.remove(&b);
        }
        if let Some(friends) = self.adjacency.get_mut(&b) {
            friends.remove(&a);
        }
    }

    /// Owned copy of a user's direct friends; empty if the user is unknown.
    ///
    /// The copy stays valid across later mutations of the graph.
    pub fn friends(&self, user: UserId) -> HashSet<UserId> {
        self.adjacency.get(&user).cloned().unwrap_or_default()
    }

    /// Borrowing view of a user's direct friends, for traversal loops.
    /// Empty if the user is unknown.
    pub fn neighbors(&self, user: UserId) -> impl Iterator<Item = UserId> + '_ {
        self.adjacency.get(&user).into_iter().flatten().copied()
    }

    /// Direct-friend check without copying the neighbor set.
    pub fn are_connected(&self, a: UserId, b: UserId) -> bool {
        self.adjacency.get(&a).map_or(false, |friends| friends.contains(&b))
    }

    pub fn contains(&self, user: UserId) -> bool {
        self.adjacency.contains_key(&user)
    }

    /// Number of distinct known users.
    pub fn user_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected connections.
    pub fn connection_count(&self) -> usize {
        self.adjacency.values().map(|friends| friends.len()).sum::<usize>() / 2
    }

    /// Direct friend count of a user; 0 if unknown.
    pub fn degree(&self, user: UserId) -> usize {
        self.adjacency.get(&user).map_or(0, |friends| friends.len())
    }

    /// Iterate all known user identifiers, in no particular order.
    pub fn users(&self) -> impl Iterator<Item = UserId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Bulk load from an iterator of connection pairs.
    pub fn load_connections<I>(&mut self, connections: I)
    where
        I: IntoIterator<Item = (UserId, UserId)>,
    {
        for (a, b) in connections {
            self.add_connection(a, b);
        }
    }

    pub(crate) fn neighbor_set(&self, user: UserId) -> Option<&HashSet<UserId>> {
        self.adjacency.get(&user)
    }
}

impl Default for SocialGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_connection_symmetric() {
        let mut g = SocialGraph::new();
        g.add_connection(1, 2);
        assert!(g.friends(1).contains(&2));
        assert!(g.friends(2).contains(&1));
    }

    #[test]
    fn test_symmetry_after_mutation_sequence() {
        let mut g = SocialGraph::new();
        g.add_connection(1, 2);
        g.add_connection(2, 3);
        g.remove_connection(1, 2);
        g.add_connection(1, 3);
        g.remove_connection(3, 2);

        for a in g.users().collect::<Vec<_>>() {
            for b in g.friends(a) {
                assert!(
                    g.friends(b).contains(&a),
                    "connection {}-{} is not mutual",
                    a,
                    b
                );
            }
        }
        assert!(g.are_connected(1, 3));
        assert!(!g.are_connected(1, 2));
        assert!(!g.are_connected(2, 3));
    }

    #[test]
    fn test_add_connection_idempotent() {
        let mut g = SocialGraph::new();
        g.add_connection(1, 2);
        g.add_connection(1, 2);
        g.add_connection(2, 1);
        assert_eq!(g.friends(1).len(), 1);
        assert_eq!(g.friends(2).len(), 1);
        assert_eq!(g.connection_count(), 1);
    }

    #[test]
    fn test_add_connection_creates_users() {
        let mut g = SocialGraph::new();
        g.add_connection(10, 20);
        assert!(g.contains(10));
        assert!(g.contains(20));
        assert_eq!(g.user_count(), 2);
    }

    #[test]
    fn test_add_user_idempotent() {
        let mut g = SocialGraph::new();
        g.add_user(5);
        g.add_user(5);
        assert_eq!(g.user_count(), 1);
        assert!(g.friends(5).is_empty());
    }

    #[test]
    fn test_add_user_keeps_existing_connections() {
        let mut g = SocialGraph::new();
        g.add_connection(1, 2);
        g.add_user(1);
        assert!(g.are_connected(1, 2));
    }

    #[test]
    fn test_self_connection_creates_user_without_edge() {
        let mut g = SocialGraph::new();
        g.add_connection(7, 7);
        assert!(g.contains(7));
        assert_eq!(g.degree(7), 0);
        assert_eq!(g.connection_count(), 0);
    }

    #[test]
    fn test_remove_connection() {
        let mut g = SocialGraph::new();
        g.add_connection(1, 2);
        g.remove_connection(1, 2);
        assert!(g.friends(1).is_empty());
        assert!(g.friends(2).is_empty());
        // Users survive the removal, only the edge goes away
        assert_eq!(g.user_count(), 2);
    }

    #[test]
    fn test_remove_connection_unknown_users_is_noop() {
        let mut g = SocialGraph::new();
        g.add_connection(1, 2);

        g.remove_connection(1, 99);
        g.remove_connection(99, 2);
        g.remove_connection(98, 99);

        assert_eq!(g.user_count(), 2);
        assert!(g.are_connected(1, 2));
    }

    #[test]
    fn test_remove_missing_connection_is_noop() {
        let mut g = SocialGraph::new();
        g.add_user(1);
        g.add_user(2);
        g.remove_connection(1, 2);
        assert_eq!(g.user_count(), 2);
    }

    #[test]
    fn test_friends_unknown_user_empty() {
        let g = SocialGraph::new();
        assert!(g.friends(42).is_empty());
    }

    #[test]
    fn test_friends_copy_survives_mutation() {
        let mut g = SocialGraph::new();
        g.add_connection(1, 2);
        let snapshot = g.friends(1);
        g.remove_connection(1, 2);
        assert!(snapshot.contains(&2));
        assert!(g.friends(1).is_empty());
    }

    #[test]
    fn test_counts() {
        let mut g = SocialGraph::new();
        assert_eq!(g.user_count(), 0);
        assert_eq!(g.connection_count(), 0);

        g.load_connections([(1, 2), (1, 3), (2, 3)]);
        assert_eq!(g.user_count(), 3);
        assert_eq!(g.connection_count(), 3);
        assert_eq!(g.degree(1), 2);
        assert_eq!(g.degree(99), 0);
    }

    #[test]
    fn test_neighbors_matches_friends() {
        let mut g = SocialGraph::new();
        g.load_connections([(1, 2), (1, 3)]);
        let via_iter: HashSet<UserId> = g.neighbors(1).collect();
        assert_eq!(via_iter, g.friends(1));
        assert_eq!(g.neighbors(42).count(), 0);
    }
}

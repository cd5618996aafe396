//! Network description parsing.
//!
//! The engine itself raises no errors; malformed input is rejected here,
//! before any graph mutation happens.

use friend_rank_core::{SocialGraph, UserId};
use thiserror::Error;

/// Rejection categories for malformed network descriptions.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("unexpected end of input while reading {0}")]
    UnexpectedEnd(&'static str),
    #[error("invalid {what} {token:?}: {source}")]
    InvalidToken {
        what: &'static str,
        token: String,
        source: std::num::ParseIntError,
    },
    #[error("trailing input after the last connection: {0:?}")]
    TrailingInput(String),
}

/// A parsed network description: graph size, distance bound, connections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkDescription {
    pub user_count: u64,
    pub max_distance: u32,
    pub connections: Vec<(UserId, UserId)>,
}

impl NetworkDescription {
    /// Build the social graph: users `0..user_count` are created explicitly,
    /// then every connection. Endpoints outside that range are created
    /// implicitly by the engine.
    pub fn build_graph(&self) -> SocialGraph {
        let mut graph = SocialGraph::with_capacity(self.user_count as usize);
        for user in 0..self.user_count {
            graph.add_user(user);
        }
        graph.load_connections(self.connections.iter().copied());
        graph
    }
}

/// Parse a whitespace-separated network description: user count, maximum
/// distance, connection count, then that many identifier pairs.
pub fn parse(text: &str) -> Result<NetworkDescription, InputError> {
    let mut tokens = text.split_whitespace();

    let user_count: u64 = next_number(&mut tokens, "user count")?;
    let max_distance: u32 = next_number(&mut tokens, "maximum distance")?;
    let connection_count: u64 = next_number(&mut tokens, "connection count")?;

    let mut connections = Vec::new();
    for _ in 0..connection_count {
        let a = next_number(&mut tokens, "connection endpoint")?;
        let b = next_number(&mut tokens, "connection endpoint")?;
        connections.push((a, b));
    }

    if let Some(extra) = tokens.next() {
        return Err(InputError::TrailingInput(extra.to_string()));
    }

    Ok(NetworkDescription {
        user_count,
        max_distance,
        connections,
    })
}

fn next_number<'a, T, I>(tokens: &mut I, what: &'static str) -> Result<T, InputError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
    I: Iterator<Item = &'a str>,
{
    let token = tokens.next().ok_or(InputError::UnexpectedEnd(what))?;
    token.parse().map_err(|source| InputError::InvalidToken {
        what,
        token: token.to_string(),
        source,
    })
}

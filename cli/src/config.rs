use std::path::PathBuf;

use clap::Parser;

use friend_rank_core::UserId;

/// Friend recommendation reports over a social network description.
#[derive(Parser, Debug)]
#[command(name = "friend-rank", author, version, about)]
pub struct Config {
    /// Path to a network description file. Reads stdin when omitted.
    ///
    /// The description is whitespace separated: a user count, a maximum
    /// network distance, a connection count, then one pair of user
    /// identifiers per connection.
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Report on a single user instead of every known user.
    #[arg(short, long)]
    pub user: Option<UserId>,

    /// Override the maximum network distance from the description.
    #[arg(short, long)]
    pub max_distance: Option<u32>,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// How many users to list in the most-connected summary.
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

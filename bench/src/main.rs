use friend_rank_core::{
    advanced_recommendation, most_connected, network_distance, recommend_by_common_friends,
    recommend_by_network_distance, SocialGraph, UNREACHABLE,
};
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let user_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: friend-rank-bench [mode] [user_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  random      Erdos-Renyi uniform friendships");
        println!("  smallworld  Watts-Strogatz ring lattice + shortcuts");
        println!("  scalefree   Preferential attachment via edge sampling");
        println!("  clusters    Dense friend groups joined by thin bridges");
        println!();
        println!("Default user_count: 100000");
        return;
    }

    println!("friend-rank-bench");
    println!("=================");
    println!();

    let generators: Vec<(&str, fn(u64) -> SocialGraph)> = match mode {
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "smallworld" => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        "scalefree" => vec![("Scale-free (edge sampling)", gen_scale_free)],
        "clusters" => vec![("Clustered friend groups", gen_clusters)],
        "all" => vec![
            ("Erdos-Renyi random", gen_random as fn(u64) -> SocialGraph),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Scale-free (edge sampling)", gen_scale_free),
            ("Clustered friend groups", gen_clusters),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, user_count);
    }
}

fn run_benchmark(name: &str, generator: fn(u64) -> SocialGraph, user_count: u64) {
    println!("--- {} ---", name);
    println!("Target: {} users", user_count);

    let t = Instant::now();
    let graph = generator(user_count);
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s — {} users, {} connections",
        gen_time.as_secs_f64(),
        graph.user_count(),
        graph.connection_count()
    );

    let hub = most_connected(&graph, 1)
        .first()
        .map(|r| r.user_id)
        .unwrap_or(0);
    let typical = user_count / 2;

    println!();
    for user in [hub, typical] {
        let t = Instant::now();
        let recs = recommend_by_common_friends(&graph, user);
        println!(
            "common friends, user {}: {} candidates in {:.1}ms",
            user,
            recs.len(),
            t.elapsed().as_secs_f64() * 1000.0
        );
    }

    // Level-bounded BFS from the hub
    println!();
    println!("{:>10} {:>12} {:>10}", "distance", "candidates", "time");
    println!("{:->10} {:->12} {:->10}", "", "", "");
    for max_distance in [1, 2, 3] {
        let t = Instant::now();
        let recs = recommend_by_network_distance(&graph, hub, max_distance);
        println!(
            "{:>10} {:>12} {:>8.1}ms",
            max_distance,
            recs.len(),
            t.elapsed().as_secs_f64() * 1000.0
        );
    }

    // The per-encounter BFS makes this the most expensive query
    println!();
    let t = Instant::now();
    let recs = advanced_recommendation(&graph, typical, 2);
    println!(
        "advanced, user {}: {} candidates in {:.1}ms",
        typical,
        recs.len(),
        t.elapsed().as_secs_f64() * 1000.0
    );

    let far = user_count.saturating_sub(1);
    let t = Instant::now();
    let distance = network_distance(&graph, typical, far);
    let elapsed = t.elapsed();
    if distance == UNREACHABLE {
        println!(
            "network distance {} → {}: unreachable ({:.1}ms)",
            typical,
            far,
            elapsed.as_secs_f64() * 1000.0
        );
    } else {
        println!(
            "network distance {} → {}: {} hops in {:.1}ms",
            typical,
            far,
            distance,
            elapsed.as_secs_f64() * 1000.0
        );
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators — all O(users + connections), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Erdos-Renyi: uniform random friendships, ~8 per user on average.
/// Baseline topology with no community structure.
fn gen_random(user_count: u64) -> SocialGraph {
    let target = user_count * 4;
    let mut graph = SocialGraph::with_capacity(user_count as usize);
    let mut rng = FastRng::new(54321);

    for user in 0..user_count {
        graph.add_user(user);
    }
    for _ in 0..target {
        // Self-pairs are dropped by the graph itself
        graph.add_connection(rng.next(user_count), rng.next(user_count));
    }

    graph
}

/// Small-world (Watts-Strogatz): ring lattice + random rewiring.
///
/// Every user friends K nearest neighbors on a ring, each connection
/// rewired with probability p. High clustering with short paths, the
/// canonical social network shape.
fn gen_small_world(user_count: u64) -> SocialGraph {
    let k = 5u64; // neighbors on each side
    let p = 0.05f64;
    let mut graph = SocialGraph::with_capacity(user_count as usize);
    let mut rng = FastRng::new(67890);

    for user in 0..user_count {
        graph.add_user(user);
    }
    for user in 0..user_count {
        for j in 1..=k {
            if rng.next_f64() < p {
                graph.add_connection(user, rng.next(user_count));
            } else {
                graph.add_connection(user, (user + j) % user_count);
            }
        }
    }

    graph
}

/// Scale-free via edge-endpoint sampling (O(connections), not O(n²)).
///
/// New users attach preferentially: picking a random endpoint from the
/// connection list means well-connected users gain friends faster.
fn gen_scale_free(user_count: u64) -> SocialGraph {
    let links_per_user = 4u64;
    let mut graph = SocialGraph::with_capacity(user_count as usize);
    let mut rng = FastRng::new(12345);

    // Endpoint list for O(1) preferential attachment sampling
    let mut endpoints: Vec<u64> = Vec::with_capacity((user_count * links_per_user * 2) as usize);

    // Seed: small clique
    let seed = 5u64.min(user_count);
    for a in 0..seed {
        for b in (a + 1)..seed {
            graph.add_connection(a, b);
            endpoints.push(a);
            endpoints.push(b);
        }
    }

    for new_user in seed..user_count {
        graph.add_user(new_user);
        for _ in 0..links_per_user.min(new_user) {
            let target = endpoints[rng.next(endpoints.len() as u64) as usize];
            if target != new_user {
                graph.add_connection(new_user, target);
                endpoints.push(new_user);
                endpoints.push(target);
            }
        }
    }

    graph
}

/// Clustered friend groups: dense groups of ~50 joined by single bridges.
///
/// Most candidates share many friends inside the group, while cross-group
/// reach goes through one bridge member.
fn gen_clusters(user_count: u64) -> SocialGraph {
    let group = 50u64;
    let links_inside = 6u64;
    let mut graph = SocialGraph::with_capacity(user_count as usize);
    let mut rng = FastRng::new(99999);

    for user in 0..user_count {
        graph.add_user(user);
    }

    let mut start = 0u64;
    while start < user_count {
        let end = (start + group).min(user_count);
        let size = end - start;
        for user in start..end {
            for _ in 0..links_inside.min(size.saturating_sub(1)) {
                graph.add_connection(user, start + rng.next(size));
            }
        }
        // Bridge to the next group
        if end < user_count {
            graph.add_connection(end - 1, end);
        }
        start = end;
    }

    graph
}

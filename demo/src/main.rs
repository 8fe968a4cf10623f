//! Airport routing demo.
//!
//! Run: cargo run --bin skyroute [-- <from> <to>]
//!
//! Without arguments, prints the routes a->f and b->g over the built-in
//! network. Set `RUST_LOG=debug` to see search statistics.

use skyroute_demo::{DEFAULT_QUERIES, airports, query, report};
use skyroute_paths::Router;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let queries: Vec<(&str, &str)> = match args.as_slice() {
        [] => DEFAULT_QUERIES.to_vec(),
        [from, to] => vec![(from.as_str(), to.as_str())],
        _ => return Err("usage: skyroute [<from> <to>]".into()),
    };

    let graph = airports()?;
    log::debug!(
        "demo network: {} airports, {} flights",
        graph.node_count(),
        graph.edge_count()
    );

    let mut router = Router::with_capacity(graph.node_count());
    let mut failed = false;
    for (from, to) in queries {
        match query(&graph, &mut router, from, to) {
            Ok(route) => print!("{}", report(&graph, from, to, &route)),
            Err(e) => {
                eprintln!("Error: {e}");
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

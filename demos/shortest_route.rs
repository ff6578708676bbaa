use cfg_lab::paths::{self, Graph};
use std::error::Error;

/// Shortest-path demonstration on the textbook four-node graph.
fn main() -> Result<(), Box<dyn Error>> {
    let mut graph = Graph::new();
    graph
        .add_edge("A", "B", 1)
        .add_edge("A", "C", 4)
        .add_edge("B", "A", 1)
        .add_edge("B", "C", 2)
        .add_edge("B", "D", 5)
        .add_edge("C", "A", 4)
        .add_edge("C", "B", 2)
        .add_edge("C", "D", 1)
        .add_edge("D", "B", 5)
        .add_edge("D", "C", 1);

    let (distance, path) = paths::shortest_path(&graph, "A", "D");
    println!("The shortest distance from A to D is {}.", distance);
    println!("The shortest path is: {}.", path.join(" -> "));

    // Unreachable destinations keep the infinity sentinel and a
    // single-node path.
    let (distance, path) = paths::shortest_path(&graph, "A", "Z");
    assert_eq!(distance, paths::INFINITY);
    println!("Z from A: unreachable, degenerate path {:?}", path);

    Ok(())
}

//! Relatable demo: the four classic "path with maximum probability" graphs.
//!
//! Each case prints the expected value next to the computed one, plus the
//! optimal route the operator reconstructs.

use probop::max_probability_path::{max_probability_with_path, Edge};

fn edges(pairs: &[[usize; 2]], probs: &[f64]) -> Vec<Edge> {
    pairs
        .iter()
        .zip(probs)
        .map(|(&[a, b], &prob)| Edge { a, b, prob })
        .collect()
}

fn show(label: &str, n: usize, edges: &[Edge], start: usize, end: usize, expected: f64) {
    let (p, path) = max_probability_with_path(n, edges, start, end).unwrap();
    let route: Vec<String> = path.iter().map(ToString::to_string).collect();
    println!(
        "{label}: expected {expected:.5}, got {p:.5}  (route {})",
        if route.is_empty() {
            "-".to_string()
        } else {
            route.join("->")
        }
    );
}

fn main() {
    let triangle = edges(&[[0, 1], [1, 2], [0, 2]], &[0.5, 0.5, 0.2]);
    show("triangle", 3, &triangle, 0, 2, 0.25);

    let with_detour = edges(
        &[[0, 1], [1, 2], [0, 2], [3, 2], [0, 3]],
        &[0.5, 0.5, 0.2, 1.0, 0.75],
    );
    show("detour", 4, &with_detour, 0, 2, 0.75);

    let disconnected = edges(&[[0, 1]], &[0.5]);
    show("disconnected", 3, &disconnected, 0, 2, 0.0);

    let dense = edges(
        &[
            [2, 3],
            [1, 2],
            [3, 4],
            [1, 3],
            [1, 4],
            [0, 1],
            [2, 4],
            [0, 4],
            [0, 2],
        ],
        &[0.06, 0.26, 0.49, 0.25, 0.2, 0.64, 0.23, 0.21, 0.77],
    );
    show("dense", 5, &dense, 0, 3, 0.16);

    let sparse = edges(
        &[[1, 4], [2, 4], [0, 4], [0, 3], [0, 2], [2, 3]],
        &[0.37, 0.17, 0.93, 0.23, 0.39, 0.04],
    );
    show("sparse", 5, &sparse, 3, 4, 0.21390);
}

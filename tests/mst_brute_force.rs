use wgraph::{DisjointSet, Graph};

/// Minimum total weight over every spanning forest, by exhaustive search.
///
/// A spanning forest keeps the component count of the input, so it has
/// exactly `n - components` edges and no cycle.
fn brute_force_minimum(n: usize, edges: &[(usize, usize, f64)]) -> f64 {
    let mut components = DisjointSet::new(n);
    for &(u, v, _) in edges {
        components.union(u, v);
    }
    let wanted = n - components.set_count();

    let mut best = f64::INFINITY;
    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != wanted {
            continue;
        }
        let mut ds = DisjointSet::new(n);
        let mut total = 0.0;
        let mut acyclic = true;
        for (i, &(u, v, w)) in edges.iter().enumerate() {
            if mask & (1 << i) != 0 {
                if !ds.union(u, v) {
                    acyclic = false;
                    break;
                }
                total += w;
            }
        }
        if acyclic && total < best {
            best = total;
        }
    }
    if wanted == 0 {
        0.0
    } else {
        best
    }
}

fn assert_matches_brute_force(n: usize, edges: &[(usize, usize, f64)]) {
    let graph = Graph::from_edges(n, edges.iter().copied()).unwrap();
    let forest = graph.kruskal().unwrap();

    // Replaying the forest never closes a cycle.
    let mut ds = DisjointSet::new(n);
    for e in forest.edges() {
        assert!(ds.union(e.u, e.v), "cycle through {}-{}", e.u, e.v);
    }
    assert!(forest.edge_count() <= n.saturating_sub(1));

    // Every chosen edge exists in the input with the same weight.
    for e in forest.edges() {
        assert!(edges
            .iter()
            .any(|&(u, v, w)| ((u, v) == (e.u, e.v) || (v, u) == (e.u, e.v)) && w == e.weight));
    }

    assert_eq!(forest.total_weight(), brute_force_minimum(n, edges));
}

#[test]
fn complete_graph_on_five_vertices() {
    let mut edges = Vec::new();
    let mut w = 1.0;
    for u in 0..5 {
        for v in (u + 1)..5 {
            edges.push((u, v, (w * 7.0) % 11.0 + 1.0));
            w += 1.0;
        }
    }
    assert_matches_brute_force(5, &edges);
}

#[test]
fn cycle_with_chords() {
    let edges = [
        (0, 1, 3.0),
        (1, 2, 1.0),
        (2, 3, 4.0),
        (3, 4, 1.0),
        (4, 5, 5.0),
        (5, 0, 9.0),
        (0, 3, 2.0),
        (1, 4, 6.0),
        (2, 5, 5.0),
    ];
    assert_matches_brute_force(6, &edges);
}

#[test]
fn equal_weights_everywhere() {
    let edges = [
        (0, 1, 1.0),
        (1, 2, 1.0),
        (2, 0, 1.0),
        (2, 3, 1.0),
        (3, 4, 1.0),
        (4, 2, 1.0),
    ];
    assert_matches_brute_force(5, &edges);
}

#[test]
fn disconnected_eight_vertices() {
    let edges = [
        (0, 1, 2.5),
        (1, 2, 0.5),
        (0, 2, 1.0),
        (3, 4, 7.0),
        (4, 5, -1.0),
        (3, 5, 2.0),
        (6, 7, 3.0),
        (6, 7, 1.0),
    ];
    assert_matches_brute_force(8, &edges);
}

#[test]
fn no_edges_at_all() {
    assert_matches_brute_force(4, &[]);
}

#[test]
fn connected_input_gives_tree() {
    let edges = [
        (0, 1, 4.0),
        (1, 2, 8.0),
        (2, 3, 7.0),
        (3, 4, 9.0),
        (4, 5, 10.0),
        (5, 6, 2.0),
        (6, 7, 1.0),
        (7, 0, 8.0),
        (1, 7, 11.0),
        (2, 5, 4.0),
        (2, 7, 2.0),
        (6, 3, 14.0),
    ];
    let graph = Graph::from_edges(8, edges).unwrap();
    let forest = graph.kruskal().unwrap();
    assert_eq!(forest.edge_count(), 7);
    assert_matches_brute_force(8, &edges);
}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::DepGraph;

pub const DEFAULT_ITERATIONS: usize = 80;
pub const DEFAULT_SEED: u64 = 42;

/// Fruchterman-Reingold spring embedding over the unit square. Positions are
/// indexed by `NodeIndex::index()`. The fixed seed keeps repeated runs over
/// the same graph stable; coordinates themselves carry no meaning beyond
/// visual separation.
pub fn spring_layout(graph: &DepGraph, iterations: usize, seed: u64) -> Vec<(f64, f64)> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos: Vec<(f64, f64)> = (0..n).map(|_| (rng.gen::<f64>(), rng.gen::<f64>())).collect();
    if n == 1 {
        return pos;
    }

    let k = (1.0 / n as f64).sqrt();
    let mut temperature = 0.1;
    let cooling = temperature / iterations.max(1) as f64;

    for _ in 0..iterations {
        let mut disp = vec![(0.0f64, 0.0f64); n];

        for i in 0..n {
            for j in (i + 1)..n {
                let dx = pos[i].0 - pos[j].0;
                let dy = pos[i].1 - pos[j].1;
                let dist = (dx * dx + dy * dy).sqrt().max(1e-9);
                let repulse = k * k / dist;
                let (ux, uy) = (dx / dist, dy / dist);
                disp[i].0 += ux * repulse;
                disp[i].1 += uy * repulse;
                disp[j].0 -= ux * repulse;
                disp[j].1 -= uy * repulse;
            }
        }

        for (from, to) in graph.edges() {
            let (i, j) = (from.index(), to.index());
            if i == j {
                continue;
            }
            let dx = pos[i].0 - pos[j].0;
            let dy = pos[i].1 - pos[j].1;
            let dist = (dx * dx + dy * dy).sqrt().max(1e-9);
            let attract = dist * dist / k;
            let (ux, uy) = (dx / dist, dy / dist);
            disp[i].0 -= ux * attract;
            disp[i].1 -= uy * attract;
            disp[j].0 += ux * attract;
            disp[j].1 += uy * attract;
        }

        for i in 0..n {
            let (dx, dy) = disp[i];
            let len = (dx * dx + dy * dy).sqrt();
            if len > 0.0 {
                let step = len.min(temperature);
                pos[i].0 = (pos[i].0 + dx / len * step).clamp(0.0, 1.0);
                pos[i].1 = (pos[i].1 + dy / len * step).clamp(0.0, 1.0);
            }
        }
        temperature = (temperature - cooling).max(1e-4);
    }

    pos
}

#[cfg(test)]
mod tests {
    use crate::graph::layout::{spring_layout, DEFAULT_ITERATIONS, DEFAULT_SEED};
    use crate::graph::DepGraph;
    use crate::manifest::Gav;

    fn sample_graph() -> DepGraph {
        let mut graph = DepGraph::new();
        let core = Gav::new("org.mule.runtime", "mule-core", "4.4.0");
        let api = Gav::new("org.mule.runtime", "mule-api", "1.4.0");
        let http = Gav::new("com.mulesoft.anypoint", "mule-http-connector", "1.7.0");
        graph.add_edge(http.clone(), core.clone());
        graph.add_edge(core, api.clone());
        graph.add_node(api);
        graph
    }

    #[test]
    fn empty_graph_has_empty_layout() {
        let graph = DepGraph::new();
        assert!(spring_layout(&graph, DEFAULT_ITERATIONS, DEFAULT_SEED).is_empty());
    }

    #[test]
    fn layout_is_deterministic_for_a_fixed_seed() {
        let graph = sample_graph();
        let a = spring_layout(&graph, DEFAULT_ITERATIONS, DEFAULT_SEED);
        let b = spring_layout(&graph, DEFAULT_ITERATIONS, DEFAULT_SEED);
        assert_eq!(a, b);
    }

    #[test]
    fn nodes_stay_in_the_unit_square_and_apart() {
        let graph = sample_graph();
        let pos = spring_layout(&graph, DEFAULT_ITERATIONS, DEFAULT_SEED);
        assert_eq!(pos.len(), graph.node_count());
        for &(x, y) in &pos {
            assert!((0.0..=1.0).contains(&x));
            assert!((0.0..=1.0).contains(&y));
        }
        for i in 0..pos.len() {
            for j in (i + 1)..pos.len() {
                let dx = pos[i].0 - pos[j].0;
                let dy = pos[i].1 - pos[j].1;
                assert!(dx * dx + dy * dy > 0.0, "nodes {i} and {j} collapsed");
            }
        }
    }
}

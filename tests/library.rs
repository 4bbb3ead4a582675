use anyhow::Result;
use oxroute::{Graph, all_simple_paths, analyze_routes, path_weight, shortest_path};

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// The reference scenario: A-B(5), B-C(8), C-D(3), A-D(20), undirected.
fn reference_matrix() -> (Vec<String>, Vec<Vec<u64>>) {
    let grid = vec![
        vec![0, 5, 0, 20],
        vec![5, 0, 8, 0],
        vec![0, 8, 0, 3],
        vec![20, 0, 3, 0],
    ];
    (labels(&["A", "B", "C", "D"]), grid)
}

#[test]
fn reference_scenario_selects_both_routes() -> Result<()> {
    let (names, grid) = reference_matrix();
    let graph = Graph::from_matrix(&names, &grid, false)?;

    let analysis = analyze_routes(&graph, "A", "D", None)?;
    assert_eq!(analysis.routes.len(), 2);

    let shortest = analysis.shortest.expect("a shortest route should exist");
    assert_eq!(shortest.path, labels(&["A", "B", "C", "D"]));
    assert_eq!(shortest.cost, 16);

    let longest = analysis
        .longest_simple
        .expect("a longest simple route should exist");
    assert_eq!(longest.path, labels(&["A", "D"]));
    assert_eq!(longest.cost, 20);

    Ok(())
}

#[test]
fn shortest_is_minimal_and_longest_is_maximal_among_enumerated() -> Result<()> {
    let (names, grid) = reference_matrix();
    let graph = Graph::from_matrix(&names, &grid, false)?;
    let analysis = analyze_routes(&graph, "A", "D", None)?;

    let shortest = analysis.shortest.as_ref().unwrap();
    let longest = analysis.longest_simple.as_ref().unwrap();
    for route in &analysis.routes {
        assert!(route.cost >= shortest.cost);
        assert!(route.cost <= longest.cost);
    }

    Ok(())
}

#[test]
fn enumeration_is_symmetric_on_undirected_graphs() -> Result<()> {
    let (names, grid) = reference_matrix();
    let graph = Graph::from_matrix(&names, &grid, false)?;

    let forward = all_simple_paths(&graph, "A", "D", None);
    let backward = all_simple_paths(&graph, "D", "A", None);
    assert_eq!(forward.len(), backward.len());

    let mut reversed: Vec<Vec<String>> = backward
        .into_iter()
        .map(|mut path| {
            path.reverse();
            path
        })
        .collect();
    reversed.sort();
    let mut forward = forward;
    forward.sort();
    assert_eq!(forward, reversed);

    Ok(())
}

#[test]
fn every_enumerated_cost_matches_path_weight() -> Result<()> {
    let (names, grid) = reference_matrix();
    let graph = Graph::from_matrix(&names, &grid, false)?;
    let analysis = analyze_routes(&graph, "A", "D", None)?;

    for route in &analysis.routes {
        assert_eq!(path_weight(&graph, &route.path)?, route.cost);
    }

    Ok(())
}

#[test]
fn disconnected_target_yields_an_empty_result() -> Result<()> {
    // nodes A, B, C with a single A-B edge
    let grid = vec![vec![0, 1, 0], vec![1, 0, 0], vec![0, 0, 0]];
    let graph = Graph::from_matrix(&labels(&["A", "B", "C"]), &grid, false)?;

    assert!(all_simple_paths(&graph, "A", "C", None).is_empty());

    let analysis = analyze_routes(&graph, "A", "C", None)?;
    assert!(analysis.routes.is_empty());
    assert!(analysis.shortest.is_none());
    assert!(analysis.longest_simple.is_none());
    assert!(shortest_path(&graph, "A", "C").is_none());

    Ok(())
}

#[test]
fn unknown_destination_is_an_error_on_the_query_but_not_the_enumerator() -> Result<()> {
    let (names, grid) = reference_matrix();
    let graph = Graph::from_matrix(&names, &grid, false)?;

    assert!(all_simple_paths(&graph, "A", "Z", None).is_empty());
    assert!(analyze_routes(&graph, "A", "Z", None).is_err());

    Ok(())
}

#[test]
fn directed_reciprocal_pair_keeps_one_route_per_direction() -> Result<()> {
    let graph = Graph::parse("graph directed\nA-B:4\nB-A:6\n")?;

    let analysis = analyze_routes(&graph, "A", "B", None)?;
    assert_eq!(analysis.routes.len(), 1);
    assert_eq!(analysis.routes[0].path, labels(&["A", "B"]));
    assert_eq!(analysis.routes[0].cost, 4);

    let back = analyze_routes(&graph, "B", "A", None)?;
    assert_eq!(back.routes[0].cost, 6);

    Ok(())
}

#[test]
fn edge_list_and_matrix_definitions_agree() -> Result<()> {
    let from_edges = Graph::parse("graph\nA-B:5, B-C:8, C-D:3\nA-D:20\n")?;
    let (names, grid) = reference_matrix();
    let from_matrix = Graph::from_matrix(&names, &grid, false)?;

    let edges_analysis = analyze_routes(&from_edges, "A", "D", None)?;
    let matrix_analysis = analyze_routes(&from_matrix, "A", "D", None)?;

    assert_eq!(
        edges_analysis.shortest.as_ref().unwrap().cost,
        matrix_analysis.shortest.as_ref().unwrap().cost
    );
    assert_eq!(
        edges_analysis.longest_simple.as_ref().unwrap().cost,
        matrix_analysis.longest_simple.as_ref().unwrap().cost
    );

    let mut a: Vec<_> = edges_analysis.routes.iter().map(|r| r.path.clone()).collect();
    let mut b: Vec<_> = matrix_analysis.routes.iter().map(|r| r.path.clone()).collect();
    a.sort();
    b.sort();
    assert_eq!(a, b);

    Ok(())
}

#[test]
fn dijkstra_agrees_with_the_derived_shortest_route() -> Result<()> {
    let (names, grid) = reference_matrix();
    let graph = Graph::from_matrix(&names, &grid, false)?;

    let direct = shortest_path(&graph, "A", "D").expect("route should exist");
    let derived = analyze_routes(&graph, "A", "D", None)?
        .shortest
        .expect("route should exist");

    assert_eq!(direct.cost, derived.cost);
    assert_eq!(direct.hops(), derived.hops());

    Ok(())
}

#[test]
fn max_length_bounds_the_enumerated_routes() -> Result<()> {
    let (names, grid) = reference_matrix();
    let graph = Graph::from_matrix(&names, &grid, false)?;

    let bounded = analyze_routes(&graph, "A", "D", Some(1))?;
    assert_eq!(bounded.routes.len(), 1);
    assert_eq!(bounded.shortest.as_ref().unwrap().cost, 20);
    assert_eq!(bounded.longest_simple.as_ref().unwrap().cost, 20);

    Ok(())
}

#[test]
fn matrix_round_trip_preserves_the_graph() -> Result<()> {
    let graph = Graph::parse("graph\nA-B:5, B-C:8, C-D:3\nA-D:20\n")?;
    let (names, grid) = graph.to_matrix();

    let rebuilt = Graph::from_matrix(&names, &grid, false)?;
    assert_eq!(rebuilt.node_count(), graph.node_count());
    assert_eq!(rebuilt.edge_count(), graph.edge_count());
    assert_eq!(rebuilt.weight("A", "D"), Some(20));
    assert_eq!(rebuilt.weight("C", "B"), Some(8));

    Ok(())
}

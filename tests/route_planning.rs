use route_planner::{dijkstra, Graph, PathFinder, PathPlannerError, Route, RouteModel, SearchConfig};

use rand::{Rng, SeedableRng, rngs::StdRng};

const EPSILON: f64 = 1e-9;

/// Random geometric graph, every node joined to its `k` closest nodes
fn random_model(seed: u64, count: usize, k: usize, metric_scale: f64) -> RouteModel {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut model = RouteModel::new(metric_scale).unwrap();

    for _ in 0..count {
        model.add_node(rng.random::<f64>(), rng.random::<f64>()).unwrap();
    }

    for node in 0..count {
        let mut by_distance: Vec<usize> = (0..count).filter(|&other| other != node).collect();
        by_distance.sort_by(|&a, &b| model.distance(node, a).total_cmp(&model.distance(node, b)));
        for &other in by_distance.iter().take(k) {
            model.add_edge(node, other).unwrap();
        }
    }

    model
}

/// Random pair of endpoints given as node positions
fn endpoints(model: &RouteModel, rng: &mut StdRng) -> ((f64, f64), (f64, f64)) {
    let start = model.nodes()[rng.random_range(0..model.len())].point;
    let end = model.nodes()[rng.random_range(0..model.len())].point;
    ((start.x, start.y), (end.x, end.y))
}

/// Consecutive nodes are neighbors, endpoints match and the length adds up
fn assert_valid_route(model: &RouteModel, finder: &PathFinder<'_, RouteModel>, route: &Route<usize, f64>) {
    assert_eq!(route.start(), Some(&finder.start_node()));
    assert_eq!(route.end(), Some(&finder.end_node()));

    let mut length = 0.0;
    for pair in route.nodes().windows(2) {
        assert!(model.neighbors(pair[0]).contains(&pair[1]), "{} -> {} is not an edge", pair[0], pair[1]);
        length += model.distance(pair[0], pair[1]);
    }
    assert!((route.distance() - length * model.metric_scale()).abs() < EPSILON * model.metric_scale());
}

#[test]
fn relaxed_search_matches_dijkstra() {
    let mut rng = StdRng::seed_from_u64(11);

    for seed in 0..20 {
        let model = random_model(seed, 60, 3, 1.0);
        let (start, end) = endpoints(&model, &mut rng);
        let finder = PathFinder::new(&model, start, end).unwrap().with_config(SearchConfig::relaxed());

        let route = finder.search();
        let reference = dijkstra(&model, finder.start_node(), finder.end_node());

        assert_eq!(route.is_empty(), reference.is_empty());
        assert!((route.distance() - reference.distance()).abs() < EPSILON, "seed {seed}");
        if !route.is_empty() {
            assert_valid_route(&model, &finder, &route);
        }
    }
}

#[test]
fn first_discovery_never_beats_dijkstra() {
    let mut rng = StdRng::seed_from_u64(23);

    for seed in 100..120 {
        let model = random_model(seed, 60, 3, 1.0);
        let (start, end) = endpoints(&model, &mut rng);
        let finder = PathFinder::new(&model, start, end).unwrap();

        let route = finder.search();
        let reference = dijkstra(&model, finder.start_node(), finder.end_node());

        assert_eq!(route.is_empty(), reference.is_empty());
        assert!(route.distance() >= reference.distance() - EPSILON, "seed {seed}");
        if !route.is_empty() {
            assert_valid_route(&model, &finder, &route);
        }
    }
}

#[test]
fn repeated_searches_are_identical() {
    let model = random_model(7, 80, 4, 1.0);
    let mut rng = StdRng::seed_from_u64(7);

    for config in [SearchConfig::default(), SearchConfig::relaxed()] {
        let (start, end) = endpoints(&model, &mut rng);
        let finder = PathFinder::new(&model, start, end).unwrap().with_config(config);

        let first = finder.search();
        let second = finder.search();
        let rebuilt = PathFinder::new(&model, start, end).unwrap().with_config(config).search();

        assert_eq!(first, second);
        assert_eq!(first, rebuilt);
    }
}

#[test]
fn distance_is_scaled_by_metric_scale() {
    let unit = random_model(3, 40, 3, 1.0);
    let scaled = random_model(3, 40, 3, 1250.0);

    let unit_route = PathFinder::new(&unit, (0.1, 0.1), (0.9, 0.9)).unwrap().search();
    let scaled_route = PathFinder::new(&scaled, (0.1, 0.1), (0.9, 0.9)).unwrap().search();

    assert_eq!(unit_route.nodes(), scaled_route.nodes());
    assert!((scaled_route.distance() - unit_route.distance() * 1250.0).abs() < 1e-6);
}

#[test]
fn disconnected_components_have_no_route() {
    // Two separate triangles, one on each side of the map
    let mut model = RouteModel::new(1.0).unwrap();
    let left: Vec<usize> = [(0.0, 0.0), (0.2, 0.1), (0.1, 0.3)]
        .iter()
        .map(|&(x, y)| model.add_node(x, y).unwrap())
        .collect();
    let right: Vec<usize> = [(1.0, 1.0), (0.8, 0.9), (0.9, 0.7)]
        .iter()
        .map(|&(x, y)| model.add_node(x, y).unwrap())
        .collect();
    model.add_way(&[left[0], left[1], left[2], left[0]]).unwrap();
    model.add_way(&[right[0], right[1], right[2], right[0]]).unwrap();

    for config in [SearchConfig::default(), SearchConfig::relaxed()] {
        let route = PathFinder::new(&model, (0.0, 0.0), (1.0, 1.0)).unwrap().with_config(config).search();
        assert!(route.is_empty());
        assert_eq!(route.distance(), 0.0);
        assert_eq!(route.into_result(), Err(PathPlannerError::NoPathFound));
    }

    // within a component the search still works
    let route = PathFinder::new(&model, (1.0, 1.0), (0.9, 0.7)).unwrap().search();
    assert_eq!(route.nodes(), &[right[0], right[2]]);
}

#[test]
fn concurrent_searches_share_one_model() {
    let model = random_model(42, 100, 4, 10.0);
    let queries = [
        ((0.05, 0.05), (0.95, 0.95)),
        ((0.95, 0.05), (0.05, 0.95)),
        ((0.5, 0.0), (0.5, 1.0)),
        ((0.0, 0.5), (1.0, 0.5)),
    ];

    let sequential: Vec<Route<usize, f64>> = queries
        .iter()
        .map(|&(start, end)| PathFinder::new(&model, start, end).unwrap().search())
        .collect();

    let concurrent: Vec<Route<usize, f64>> = std::thread::scope(|scope| {
        let handles: Vec<_> = queries
            .iter()
            .map(|&(start, end)| {
                let model = &model;
                scope.spawn(move || PathFinder::new(model, start, end).unwrap().search())
            })
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });

    assert_eq!(sequential, concurrent);
}

#[test]
fn invalid_endpoints_are_rejected() {
    let model = random_model(5, 10, 2, 1.0);

    assert!(matches!(
        PathFinder::new(&model, (0.5, 0.5), (0.5, f64::NAN)),
        Err(PathPlannerError::InvalidEndpoint { .. })
    ));
    assert!(matches!(
        PathFinder::from_percent(&model, (150.0, 20.0), (50.0, 50.0)),
        Err(PathPlannerError::InvalidEndpoint { .. })
    ));

    let empty = RouteModel::new(1.0).unwrap();
    assert!(matches!(
        PathFinder::new(&empty, (0.5, 0.5), (0.5, 0.5)),
        Err(PathPlannerError::NoValidPointFound)
    ));
}

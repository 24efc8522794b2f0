use seagrass_graph::Graph;
use seagrass_organic::{OrganicLayout, OrganicOptions};

#[test]
fn defaults_match_the_documented_values() {
    let opts = OrganicOptions::default();
    assert_eq!(opts.iterations, 300);
    assert_eq!(opts.repulsion, 2000.0);
    assert_eq!(opts.attraction, 0.1);
    assert_eq!(opts.gravity, 0.1);
    assert_eq!(opts.initial_temperature, 100.0);
    assert_eq!(opts.cooling, 0.95);
    assert_eq!(opts.threshold, 0.5);
    assert_eq!(opts.theta, 0.5);
    assert_eq!(opts.edge_length, 100.0);
    assert_eq!(opts.random_seed, None);
    assert!(opts.prevent_overlap);
    assert_eq!(opts.node_radius, 20.0);
}

#[test]
fn options_deserialize_from_camel_case_json() {
    let opts: OrganicOptions = serde_json::from_value(serde_json::json!({
        "iterations": 50,
        "initialTemperature": 10,
        "edgeLength": 60.5,
        "randomSeed": 1234,
        "preventOverlap": false,
        "nodeRadius": 5,
        "unknown": [1, 2, 3]
    }))
    .unwrap();
    assert_eq!(
        opts,
        OrganicOptions {
            iterations: 50,
            initial_temperature: 10.0,
            edge_length: 60.5,
            random_seed: Some(1234),
            prevent_overlap: false,
            node_radius: 5.0,
            ..Default::default()
        }
    );
}

#[test]
fn null_seed_means_unseeded() {
    let opts: OrganicOptions =
        serde_json::from_value(serde_json::json!({ "randomSeed": null })).unwrap();
    assert_eq!(opts.random_seed, None);
}

#[test]
fn null_options_take_their_defaults() {
    let opts: OrganicOptions = serde_json::from_value(serde_json::json!({
        "iterations": null,
        "repulsion": null,
        "theta": null,
        "preventOverlap": null,
        "gravity": 0.5
    }))
    .unwrap();
    assert_eq!(
        opts,
        OrganicOptions {
            gravity: 0.5,
            ..Default::default()
        }
    );
}

#[test]
fn any_numeric_seed_is_accepted_and_wrapped() {
    let seed_of = |v: serde_json::Value| {
        serde_json::from_value::<OrganicOptions>(serde_json::json!({ "randomSeed": v }))
            .unwrap()
            .random_seed
    };
    assert_eq!(seed_of(serde_json::json!(-1)), Some(u32::MAX));
    assert_eq!(seed_of(serde_json::json!(1_700_000_000_000u64)), Some(3_487_918_080));
    assert_eq!(seed_of(serde_json::json!(42.5)), Some(42));
    assert_eq!(seed_of(serde_json::json!(42)), Some(42));
}

#[test]
fn wrapped_seeds_give_reproducible_runs() {
    let g = Graph::new()
        .with_nodes(["a", "b", "c"])
        .with_path(&["a", "b", "c"]);
    for seed in [
        serde_json::json!(-1),
        serde_json::json!(1_700_000_000_000u64),
        serde_json::json!(42.5),
    ] {
        let opts: OrganicOptions = serde_json::from_value(serde_json::json!({
            "randomSeed": seed,
            "iterations": 25
        }))
        .unwrap();
        let layout = OrganicLayout::new(opts);
        let first = layout.compute(&g);
        assert_eq!(first, layout.compute(&g));
        assert!(first.values().all(|p| p.is_finite()));
    }
}

#[test]
fn wrongly_typed_options_are_rejected() {
    let parse = |v| serde_json::from_value::<OrganicOptions>(v);
    assert!(parse(serde_json::json!({ "theta": "tight" })).is_err());
    assert!(parse(serde_json::json!({ "randomSeed": "seven" })).is_err());
    assert!(parse(serde_json::json!({ "iterations": "many" })).is_err());
}

#[test]
fn out_of_range_values_are_clamped() {
    let opts: OrganicOptions = serde_json::from_value(serde_json::json!({
        "iterations": -10,
        "initialTemperature": -1,
        "cooling": 1.5,
        "threshold": -0.1,
        "theta": -2,
        "edgeLength": -100,
        "nodeRadius": -3
    }))
    .unwrap();
    let opts = OrganicLayout::new(opts).options().clone();
    assert_eq!(opts.iterations, 0);
    assert_eq!(opts.initial_temperature, 0.0);
    assert_eq!(opts.cooling, 1.0);
    assert_eq!(opts.threshold, 0.0);
    assert_eq!(opts.theta, 0.0);
    assert_eq!(opts.edge_length, 0.0);
    assert_eq!(opts.node_radius, 0.0);
}

#[test]
fn non_finite_values_fall_back_to_defaults_except_infinite_threshold() {
    let opts = OrganicOptions {
        repulsion: f64::NAN,
        gravity: f64::INFINITY,
        cooling: f64::NEG_INFINITY,
        threshold: f64::INFINITY,
        ..Default::default()
    }
    .clamped();
    assert_eq!(opts.repulsion, 2000.0);
    assert_eq!(opts.gravity, 0.1);
    assert_eq!(opts.cooling, 0.95);
    assert_eq!(opts.threshold, f64::INFINITY);

    let nan_threshold = OrganicOptions {
        threshold: f64::NAN,
        ..Default::default()
    }
    .clamped();
    assert_eq!(nan_threshold.threshold, 0.5);
}

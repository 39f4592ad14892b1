//! Layout serialization round-trips.

use schelling_graph::{ChipInit, GraphLayout};

mod common;

#[test]
fn layout_survives_a_json_round_trip() {
    let mut layout = common::demo_layout(&[([1, 1], 1), ([0, 0], 1)]);
    layout.init = Some(ChipInit::Uniform { min: 0, max: 2 });

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("demo_layout.json");
    layout.save(&path).unwrap();

    let loaded = GraphLayout::load(&path).unwrap();
    assert_eq!(loaded, layout);

    let graph = loaded.build().unwrap();
    assert!(graph.is_coherent());
    assert_eq!(graph.get(1, 1).unwrap().chips(), 1);
    assert_eq!(graph.total_chips(), 2);
}

#[test]
fn missing_layout_file_surfaces_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GraphLayout::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, schelling_graph::Error::Io { .. }));
}

#[test]
fn strategy_embedded_in_json_deserializes() {
    let json = r#"{
        "nodes": [
            {"x": 0, "y": 0, "color": "orange"},
            {"x": 0, "y": 1, "color": "blue"}
        ],
        "arrows": [{"from": [0, 0], "to": [0, 1], "color": "blue"}],
        "init": {"strategy": "multinomial", "pvals": [0.5, 0.5]}
    }"#;
    let layout: GraphLayout = serde_json::from_str(json).unwrap();
    assert_eq!(
        layout.init,
        Some(ChipInit::Multinomial {
            pvals: vec![0.5, 0.5],
        })
    );
    let graph = layout.build().unwrap();
    assert_eq!(graph.len(), 2);
}

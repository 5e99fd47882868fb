//! Cross-crate tests through the `lineage` facade

use lineage::{
    construct_network, construct_network_from_config_file, Config, LineageError, NetworkSnapshot,
    NodeId, NodeKind, RootPolicy,
};
use lineage_test::{cluster, init_test_logging, mutation_groups, nested_example_clusters};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::io::Write;

fn two_path_family() -> Vec<lineage::BitsetCluster> {
    vec![
        cluster(0, &[0, 1, 2], 1.0),
        cluster(1, &[0, 1], 0.75),
        cluster(2, &[1, 2], 0.25),
        cluster(3, &[1], 0.5),
    ]
}

#[test]
fn test_network_rendering() {
    init_test_logging();
    let built = construct_network(&Config::default(), &mutation_groups(3), two_path_family())
        .unwrap();

    let expected = concat!(
        "0 (1): \n",
        "1 (0.75): GL\n",
        "2 (0.25): 10 (30)\n",
        "3 (0.5): 01 (20)\n",
        "4 (1): \n",
        "0 to 1 (0.75, false)\n",
        "0 to 2 (0.25, false)\n",
        "1 to 4 (0.375, true)\n",
        "2 to 4 (0.125, true)\n",
        "4 to 3 (0.5, false)\n",
    );
    assert_eq!(built.network.to_string(), expected);
}

#[test]
fn test_snapshot_survives_json() -> anyhow::Result<()> {
    let built = construct_network(&Config::default(), &mutation_groups(3), two_path_family())?;
    let snapshot = built.snapshot();

    let json = serde_json::to_string(&snapshot)?;
    let back: NetworkSnapshot = serde_json::from_str(&json)?;
    assert_eq!(back, snapshot);

    assert_eq!(back.nodes[4].kind, NodeKind::Hub);
    assert_eq!(back.nodes[2].label[0].tag, "10");
    assert_eq!(back.reticulate_edges().count(), 2);
    Ok(())
}

#[test]
fn test_config_file_drives_root_policy() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("lineage.toml");
    let mut file = std::fs::File::create(&path)?;
    writeln!(file, "[network]\nroot_policy = \"synthesize\"\n\n[logging]\nlevel = \"warn\"")?;

    // no cluster spans all four groups
    let clusters = vec![cluster(5, &[0, 1], 0.9), cluster(6, &[2, 3], 0.9)];
    let built = construct_network_from_config_file(&path, &mutation_groups(4), clusters)?;

    assert!(built.synthetic_root);
    assert_eq!(built.clusters[0].id.value(), 7);
    assert_eq!(built.network.children(NodeId(0)).count(), 2);
    Ok(())
}

#[test]
fn test_missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = construct_network_from_config_file(
        &dir.path().join("missing.toml"),
        &mutation_groups(4),
        nested_example_clusters(),
    );
    assert!(matches!(result, Err(LineageError::Io(_))));
}

#[rstest]
#[case::reject(RootPolicy::Reject)]
#[case::synthesize(RootPolicy::Synthesize)]
fn test_complete_family_ignores_root_policy(#[case] root_policy: RootPolicy) {
    let mut config = Config::default();
    config.network.root_policy = root_policy;

    let built = construct_network(&config, &mutation_groups(4), nested_example_clusters())
        .unwrap();
    assert!(!built.synthetic_root);
    assert_eq!(built.network.node_count(), 5);
}

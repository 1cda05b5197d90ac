use std::time::Duration;

use openlane_run_model::{discover_runs, select_latest, RunSelection};

#[test]
fn latest_run_follows_creation_time_not_name() {
    let root = tempfile::tempdir().expect("failed to create temp dir");

    // The newer name is created first, so name order and creation order disagree
    std::fs::create_dir(root.path().join("RUN_2024.06.01_12.00.00")).unwrap();
    std::thread::sleep(Duration::from_millis(50));
    std::fs::create_dir(root.path().join("RUN_2021.01.01_12.00.00")).unwrap();

    let runs = discover_runs(root.path()).expect("failed to discover runs");
    assert_eq!(runs.last().unwrap().name(), "RUN_2024.06.01_12.00.00");

    let latest = select_latest(&runs).expect("failed to select latest run");
    assert_eq!(latest.name(), "RUN_2021.01.01_12.00.00");
}

#[test]
fn index_selection_uses_name_order() {
    let root = tempfile::tempdir().expect("failed to create temp dir");
    for name in ["RUN_2024.06.01_12.00.00", "RUN_2021.01.01_12.00.00", "scratch"] {
        std::fs::create_dir(root.path().join(name)).unwrap();
    }

    let runs = discover_runs(root.path()).expect("failed to discover runs");
    let mut output = Vec::new();
    let selected = RunSelection::Index(1)
        .select(&runs, std::io::empty(), &mut output)
        .expect("failed to select run");

    assert_eq!(selected.name(), "RUN_2021.01.01_12.00.00");
    assert!(String::from_utf8(output).unwrap().starts_with("using run 1:\n"));
}

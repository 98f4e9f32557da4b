use flower_log::bridge;
use flower_log::init;

#[test]
fn facade_records_flow_into_the_dispatcher() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bridge.log");

    init::configure("node-3", Some(&path), None).unwrap();
    bridge::install().unwrap();

    log::warn!("disk almost full");

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(
        lines[0].starts_with("node-3 | WARNING flower "),
        "unexpected line: {}",
        lines[0]
    );
    assert!(lines[0].contains("| bridge.rs:"));
    assert!(lines[0].ends_with("| disk almost full"));

    // Only one facade logger can exist per process.
    assert!(bridge::install().is_err());
}

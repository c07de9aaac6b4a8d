use screenview_core::{RecordingSink, ScreenEvent, ScreenTracker, TrackerCommand};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    #[allow(dead_code)]
    description: String,
    steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
struct Step {
    command: TrackerCommand,
    expected_events: Vec<ScreenEvent>,
}

fn scenarios_dir() -> PathBuf {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest.join("../../fixtures/scenarios")
}

fn load_scenarios() -> Vec<Scenario> {
    let dir = scenarios_dir();
    let mut scenarios = Vec::new();
    if !dir.exists() {
        return scenarios;
    }
    for entry in fs::read_dir(&dir).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some("json") {
            let content = fs::read_to_string(&path).unwrap_or_else(|e| {
                panic!("failed to read scenario {:?}: {}", path, e);
            });
            let scenario: Scenario = serde_json::from_str(&content).unwrap_or_else(|e| {
                panic!("failed to parse scenario {:?}: {}", path, e);
            });
            scenarios.push(scenario);
        }
    }
    scenarios.sort_by(|a, b| a.name.cmp(&b.name));
    scenarios
}

#[test]
fn test_all_scenarios() {
    let scenarios = load_scenarios();
    assert!(
        !scenarios.is_empty(),
        "no scenarios found in {:?}",
        scenarios_dir()
    );

    let mut total_steps = 0;
    let mut passed_steps = 0;
    let mut failed_scenarios = Vec::new();

    for scenario in &scenarios {
        // Fresh tracker per scenario; the sink is drained after every step so
        // each step is checked against exactly the events it produced.
        let mut tracker = ScreenTracker::with_default_tables(RecordingSink::new());
        let mut scenario_ok = true;

        for (i, step) in scenario.steps.iter().enumerate() {
            step.command.apply(&mut tracker);
            let emitted = tracker.sink_mut().take();
            total_steps += 1;

            if emitted != step.expected_events {
                scenario_ok = false;
                eprintln!(
                    "FAIL: scenario '{}' step {}: expected {:?} got {:?}",
                    scenario.name, i, step.expected_events, emitted
                );
            } else {
                passed_steps += 1;
            }
        }

        if !scenario_ok {
            failed_scenarios.push(scenario.name.clone());
        }
    }

    eprintln!(
        "\nReplay results: {}/{} steps passed, {}/{} scenarios passed",
        passed_steps,
        total_steps,
        scenarios.len() - failed_scenarios.len(),
        scenarios.len()
    );

    assert!(
        failed_scenarios.is_empty(),
        "failed scenarios: {:?}",
        failed_scenarios
    );
}

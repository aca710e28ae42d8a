#![cfg(feature = "serde")]

use ai_goap::PlannerConfig;

#[test]
fn planner_config_roundtrip() {
    let config = PlannerConfig {
        max_expansions: Some(128),
        max_cost: Some(12.5),
    };
    let json = serde_json::to_string(&config).expect("serialize");
    let back: PlannerConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, config);
}

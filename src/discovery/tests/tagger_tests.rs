//! Tests for category tagging order.

use crate::artifact::domain::AdapterCategory;
use crate::discovery::services::{CATEGORY_RULES, tag};
use camino::Utf8Path;
use rstest::rstest;

#[rstest]
#[case("openai_adapter.py", AdapterCategory::AiModel)]
#[case("sandbox_runner.py", AdapterCategory::ToolEngine)]
#[case("vector_store.py", AdapterCategory::MemorySystem)]
#[case("browser_agent.py", AdapterCategory::WebAgent)]
#[case("pipeline_runner.py", AdapterCategory::Workflow)]
#[case("csv_loader.py", AdapterCategory::DataProcessing)]
#[case("ppo_trainer.py", AdapterCategory::ReinforcementLearning)]
#[case("dashboard.py", AdapterCategory::UserInterface)]
#[case("self_improving.py", AdapterCategory::AgentOptimization)]
#[case("slack_connector.py", AdapterCategory::Integration)]
#[case("misc.py", AdapterCategory::General)]
fn path_keywords_select_category(#[case] path: &str, #[case] expected: AdapterCategory) {
    assert_eq!(tag(Utf8Path::new(path), None), expected);
}

#[rstest]
fn earlier_groups_win_over_later_ones() {
    // "model" (ai-model) and "tool" (tool-engine) both match.
    assert_eq!(
        tag(Utf8Path::new("model_tool.py"), None),
        AdapterCategory::AiModel
    );
}

#[rstest]
fn path_match_takes_precedence_over_source_text() {
    assert_eq!(
        tag(Utf8Path::new("crawler.py"), Some("import openai")),
        AdapterCategory::WebAgent
    );
}

#[rstest]
fn source_text_is_consulted_when_path_is_silent() {
    assert_eq!(
        tag(Utf8Path::new("misc.py"), Some("class CacheAdapter:\n    pass\n")),
        AdapterCategory::MemorySystem
    );
}

#[rstest]
fn matching_ignores_case() {
    assert_eq!(
        tag(Utf8Path::new("GPTWrapper.py"), None),
        AdapterCategory::AiModel
    );
}

#[rstest]
fn rules_follow_category_priority_order() {
    let ordered: Vec<AdapterCategory> = CATEGORY_RULES
        .iter()
        .map(|(category, _)| *category)
        .collect();
    assert_eq!(AdapterCategory::ALL.get(..10), Some(ordered.as_slice()));
}

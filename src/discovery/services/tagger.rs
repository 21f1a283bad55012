//! Keyword-based category tagging.

use crate::artifact::domain::AdapterCategory;
use camino::Utf8Path;

/// Ordered keyword groups. The first group with a matching keyword wins;
/// files matching none are [`AdapterCategory::General`].
pub const CATEGORY_RULES: [(AdapterCategory, &[&str]); 10] = [
    (
        AdapterCategory::AiModel,
        &["llm", "gpt", "openai", "anthropic", "claude", "gemini", "ollama", "transformer", "model"],
    ),
    (AdapterCategory::ToolEngine, &["tool", "engine", "executor", "sandbox"]),
    (
        AdapterCategory::MemorySystem,
        &["memory", "cache", "vector", "embedding", "knowledge"],
    ),
    (AdapterCategory::WebAgent, &["web", "browser", "crawl", "scrape", "http"]),
    (
        AdapterCategory::Workflow,
        &["workflow", "pipeline", "orchestrat", "scheduler"],
    ),
    (
        AdapterCategory::DataProcessing,
        &["data", "etl", "csv", "parser", "transform"],
    ),
    (
        AdapterCategory::ReinforcementLearning,
        &["reinforcement", "reward", "policy", "q_learning", "ppo"],
    ),
    (
        AdapterCategory::UserInterface,
        &["ui_", "_ui", "gui", "dashboard", "frontend", "interface"],
    ),
    (
        AdapterCategory::AgentOptimization,
        &["optimiz", "tuning", "evolution", "self_improv"],
    ),
    (
        AdapterCategory::Integration,
        &["integration", "connector", "bridge", "webhook", "api"],
    ),
];

/// Assigns one category to a file.
///
/// The scan-relative path is matched first; the source text is consulted
/// only when the path matches no group. Matching is a case-insensitive
/// substring test.
#[must_use]
pub fn tag(path: &Utf8Path, source: Option<&str>) -> AdapterCategory {
    match_keywords(path.as_str())
        .or_else(|| source.and_then(match_keywords))
        .unwrap_or(AdapterCategory::General)
}

fn match_keywords(text: &str) -> Option<AdapterCategory> {
    let haystack = text.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| haystack.contains(keyword)))
        .map(|(category, _)| *category)
}

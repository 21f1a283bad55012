//! Coarse adapter category labels.

use super::ParseCategoryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of category labels assigned to discovered adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdapterCategory {
    /// Wrappers around language or vision models.
    AiModel,
    /// Tool runners and execution engines.
    ToolEngine,
    /// Memory, cache and knowledge stores.
    MemorySystem,
    /// Browser and web-facing agents.
    WebAgent,
    /// Workflow and pipeline orchestration.
    Workflow,
    /// Data loading and transformation.
    DataProcessing,
    /// Reinforcement-learning components.
    ReinforcementLearning,
    /// User-facing interfaces.
    UserInterface,
    /// Agent tuning and self-optimisation.
    AgentOptimization,
    /// Bridges to external services.
    Integration,
    /// Anything not matched by a more specific label.
    General,
}

impl AdapterCategory {
    /// Every category, in tagging priority order with the default last.
    pub const ALL: [Self; 11] = [
        Self::AiModel,
        Self::ToolEngine,
        Self::MemorySystem,
        Self::WebAgent,
        Self::Workflow,
        Self::DataProcessing,
        Self::ReinforcementLearning,
        Self::UserInterface,
        Self::AgentOptimization,
        Self::Integration,
        Self::General,
    ];

    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AiModel => "ai-model",
            Self::ToolEngine => "tool-engine",
            Self::MemorySystem => "memory-system",
            Self::WebAgent => "web-agent",
            Self::Workflow => "workflow",
            Self::DataProcessing => "data-processing",
            Self::ReinforcementLearning => "reinforcement-learning",
            Self::UserInterface => "user-interface",
            Self::AgentOptimization => "agent-optimization",
            Self::Integration => "integration",
            Self::General => "general",
        }
    }
}

impl fmt::Display for AdapterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for AdapterCategory {
    type Error = ParseCategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| ParseCategoryError(value.to_owned()))
    }
}

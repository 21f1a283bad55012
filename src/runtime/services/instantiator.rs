//! Ordered construction with panic containment.

use crate::runtime::domain::ConstructionStrategy;
use crate::runtime::ports::{Adapter, AdapterClass, ConstructionError};
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// A constructed adapter and the strategy that produced it.
#[derive(Clone)]
pub struct Instantiation {
    instance: Arc<dyn Adapter>,
    strategy: ConstructionStrategy,
    attempts: usize,
}

impl Instantiation {
    /// Returns the constructed instance.
    #[must_use]
    pub fn instance(&self) -> Arc<dyn Adapter> {
        Arc::clone(&self.instance)
    }

    /// Returns the strategy that succeeded.
    #[must_use]
    pub const fn strategy(&self) -> ConstructionStrategy {
        self.strategy
    }

    /// Returns how many strategies were tried, including the successful one.
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }
}

impl fmt::Debug for Instantiation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instantiation")
            .field("strategy", &self.strategy)
            .field("attempts", &self.attempts)
            .finish_non_exhaustive()
    }
}

/// Every construction strategy failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("all {} construction strategies failed for {class}; last: {}", .attempts.len(), last_failure(.attempts))]
pub struct StrategiesExhausted {
    class: String,
    attempts: Vec<(ConstructionStrategy, ConstructionError)>,
}

impl StrategiesExhausted {
    /// Returns the class that could not be constructed.
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Returns each strategy with the error it produced, in attempt order.
    #[must_use]
    pub fn attempts(&self) -> &[(ConstructionStrategy, ConstructionError)] {
        &self.attempts
    }
}

fn last_failure(attempts: &[(ConstructionStrategy, ConstructionError)]) -> String {
    attempts
        .last()
        .map_or_else(String::new, |(strategy, error)| format!("{strategy}: {error}"))
}

/// Tries [`ConstructionStrategy::ORDER`] against a class until one succeeds.
///
/// Panics are contained, but the process panic hook still runs for each
/// one. Callers that want contained panics in their logs only should
/// install their own hook with [`std::panic::set_hook`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SafeInstantiator;

impl SafeInstantiator {
    /// Creates an instantiator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Constructs `class` for the adapter registered as `adapter`.
    ///
    /// A panicking constructor counts as a failed attempt.
    ///
    /// # Errors
    ///
    /// Returns [`StrategiesExhausted`] when no strategy constructs the class.
    pub fn instantiate(
        &self,
        adapter: &str,
        class: &dyn AdapterClass,
    ) -> Result<Instantiation, StrategiesExhausted> {
        let mut attempts = Vec::with_capacity(ConstructionStrategy::ORDER.len());

        for strategy in ConstructionStrategy::ORDER {
            let args = strategy.arguments();
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| class.construct(&args)))
                .unwrap_or_else(|payload| Err(ConstructionError::Panicked(panic_message(&*payload))));
            match outcome {
                Ok(instance) => {
                    return Ok(Instantiation {
                        instance,
                        strategy,
                        attempts: attempts.len() + 1,
                    });
                }
                Err(error) => {
                    debug!(
                        adapter,
                        class = class.class_name(),
                        strategy = strategy.as_str(),
                        %error,
                        "construction attempt failed"
                    );
                    attempts.push((strategy, error));
                }
            }
        }

        let exhausted = StrategiesExhausted {
            class: class.class_name().to_owned(),
            attempts,
        };
        warn!(
            adapter,
            stage = "construction",
            error = %exhausted,
            "construction strategies exhausted"
        );
        Err(exhausted)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_owned())
}

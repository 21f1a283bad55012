//! In-memory resolver over natively implemented adapter classes.

use crate::artifact::domain::ClassReference;
use crate::runtime::domain::ConstructorArgs;
use crate::runtime::ports::{
    Adapter, AdapterClass, ClassResolver, ConstructionError, ImportError,
};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

type Constructor =
    dyn Fn(&ConstructorArgs) -> Result<Arc<dyn Adapter>, ConstructionError> + Send + Sync;

/// Adapter class backed by a constructor closure.
pub struct FnAdapterClass {
    name: String,
    constructor: Box<Constructor>,
}

impl FnAdapterClass {
    /// Creates a class named `name` constructed by `constructor`.
    #[must_use]
    pub fn new<F>(name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn(&ConstructorArgs) -> Result<Arc<dyn Adapter>, ConstructionError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: name.into(),
            constructor: Box::new(constructor),
        }
    }
}

impl AdapterClass for FnAdapterClass {
    fn class_name(&self) -> &str {
        &self.name
    }

    fn construct(&self, args: &ConstructorArgs) -> Result<Arc<dyn Adapter>, ConstructionError> {
        (self.constructor)(args)
    }
}

impl fmt::Debug for FnAdapterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnAdapterClass")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

enum Module {
    Loaded(BTreeMap<String, Arc<dyn AdapterClass>>),
    Broken(String),
}

/// Resolver over a fixed table of modules and classes.
///
/// Modules can also be registered as broken to stand in for a module whose
/// import raises.
#[derive(Default)]
pub struct StaticClassResolver {
    modules: BTreeMap<String, Module>,
}

impl StaticClassResolver {
    /// Creates an empty resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            modules: BTreeMap::new(),
        }
    }

    /// Registers `class` under `module`. A module already registered as
    /// broken stays broken.
    #[must_use]
    pub fn with_class(mut self, module: impl Into<String>, class: Arc<dyn AdapterClass>) -> Self {
        let module_entry = self
            .modules
            .entry(module.into())
            .or_insert_with(|| Module::Loaded(BTreeMap::new()));
        if let Module::Loaded(classes) = module_entry {
            classes.insert(class.class_name().to_owned(), class);
        }
        self
    }

    /// Registers `module` as failing to load with `message`.
    #[must_use]
    pub fn with_broken_module(
        mut self,
        module: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.modules
            .insert(module.into(), Module::Broken(message.into()));
        self
    }
}

impl ClassResolver for StaticClassResolver {
    fn resolve(&self, reference: &ClassReference) -> Result<Arc<dyn AdapterClass>, ImportError> {
        match self.modules.get(reference.module()) {
            None => Err(ImportError::ModuleNotFound(reference.module().to_owned())),
            Some(Module::Broken(message)) => Err(ImportError::ModuleFailed {
                module: reference.module().to_owned(),
                message: message.clone(),
            }),
            Some(Module::Loaded(classes)) => classes
                .get(reference.class())
                .cloned()
                .ok_or_else(|| ImportError::ClassNotFound {
                    module: reference.module().to_owned(),
                    class: reference.class().to_owned(),
                }),
        }
    }
}

impl fmt::Debug for StaticClassResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticClassResolver")
            .field("modules", &self.modules.keys().collect::<Vec<_>>())
            .finish()
    }
}

//! Classes and instances reconstructed from declarations alone.

use crate::discovery::domain::{ClassInfo, Parameter, ParameterKind};
use crate::runtime::domain::ConstructorArgs;
use crate::runtime::ports::{Adapter, AdapterClass, AdapterError, ConstructionError};
use serde_json::{Value, json};
use std::sync::Arc;

/// An adapter class known only from its source declaration.
///
/// Construction checks keyword arguments against the declared `__init__`
/// signature. The receiver is the first declared parameter and is never
/// matched. A class without its own `__init__` accepts no arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredClass {
    module: String,
    name: String,
    parameters: Vec<Parameter>,
    methods: Vec<String>,
}

impl DeclaredClass {
    /// Creates a declared class from analysed source.
    #[must_use]
    pub fn from_info(module: impl Into<String>, info: &ClassInfo) -> Self {
        let parameters = info
            .init_parameters()
            .and_then(|declared| declared.get(1..))
            .map(<[Parameter]>::to_vec)
            .unwrap_or_default();
        Self {
            module: module.into(),
            name: info.name().to_owned(),
            parameters,
            methods: info.methods().to_vec(),
        }
    }

    /// Returns the constructor parameters after the receiver.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    fn accepts_keyword(&self, keyword: &str) -> bool {
        self.parameters.iter().any(|parameter| match parameter.kind() {
            ParameterKind::PositionalOrKeyword | ParameterKind::KeywordOnly => {
                parameter.name() == keyword
            }
            ParameterKind::VarKeyword => true,
            ParameterKind::PositionalOnly | ParameterKind::VarPositional => false,
        })
    }

    fn public_methods(&self) -> Vec<String> {
        self.methods
            .iter()
            .filter(|method| !method.starts_with('_'))
            .cloned()
            .collect()
    }
}

impl AdapterClass for DeclaredClass {
    fn class_name(&self) -> &str {
        &self.name
    }

    fn construct(&self, args: &ConstructorArgs) -> Result<Arc<dyn Adapter>, ConstructionError> {
        if let Some(unexpected) = args.names().find(|keyword| !self.accepts_keyword(keyword)) {
            return Err(ConstructionError::UnexpectedArgument(unexpected.to_owned()));
        }
        let missing = self.parameters.iter().find(|parameter| {
            !parameter.is_optional()
                && (parameter.kind() == ParameterKind::PositionalOnly
                    || !args.contains(parameter.name()))
        });
        if let Some(parameter) = missing {
            return Err(ConstructionError::MissingArgument(parameter.name().to_owned()));
        }

        Ok(Arc::new(DeclaredAdapter {
            module: self.module.clone(),
            class: self.name.clone(),
            constructed_with: args.names().map(str::to_owned).collect(),
            capabilities: self.public_methods(),
            declares_process: self.methods.iter().any(|method| method == "process"),
        }))
    }
}

/// Instance standing in for a constructed declared class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredAdapter {
    module: String,
    class: String,
    constructed_with: Vec<String>,
    capabilities: Vec<String>,
    declares_process: bool,
}

impl Adapter for DeclaredAdapter {
    fn process(&self, input: Value) -> Result<Value, AdapterError> {
        Ok(json!({
            "module": self.module,
            "class": self.class,
            "constructed_with": self.constructed_with,
            "declares_process": self.declares_process,
            "input": input,
        }))
    }

    fn capabilities(&self) -> Vec<String> {
        self.capabilities.clone()
    }
}

//! Symbols extracted from a source file by static analysis.

use serde::Serialize;

/// How a constructor parameter may be bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    /// Declared before a `/` marker.
    PositionalOnly,
    /// Ordinary named parameter.
    PositionalOrKeyword,
    /// `*args`.
    VarPositional,
    /// Declared after `*` or `*args`.
    KeywordOnly,
    /// `**kwargs`.
    VarKeyword,
}

/// One declared parameter of a function signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    name: String,
    kind: ParameterKind,
    has_default: bool,
}

impl Parameter {
    /// Creates a parameter description.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ParameterKind, has_default: bool) -> Self {
        Self {
            name: name.into(),
            kind,
            has_default,
        }
    }

    /// Returns the parameter name without any `*` prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the binding kind.
    #[must_use]
    pub const fn kind(&self) -> ParameterKind {
        self.kind
    }

    /// Reports whether the parameter may be omitted by the caller.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.has_default
            || matches!(
                self.kind,
                ParameterKind::VarPositional | ParameterKind::VarKeyword
            )
    }
}

/// A class declaration with the detail needed to reason about construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassInfo {
    name: String,
    bases: Vec<String>,
    methods: Vec<String>,
    init_parameters: Option<Vec<Parameter>>,
}

impl ClassInfo {
    /// Creates a class description with no bases, methods or constructor.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bases: Vec::new(),
            methods: Vec::new(),
            init_parameters: None,
        }
    }

    /// Sets the base-class expressions as written in the source.
    #[must_use]
    pub fn with_bases(mut self, bases: impl IntoIterator<Item = String>) -> Self {
        self.bases = bases.into_iter().collect();
        self
    }

    /// Sets the methods declared directly in the class body.
    #[must_use]
    pub fn with_methods(mut self, methods: impl IntoIterator<Item = String>) -> Self {
        self.methods = methods.into_iter().collect();
        self
    }

    /// Sets the `__init__` parameters, including the receiver.
    #[must_use]
    pub fn with_init_parameters(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        self.init_parameters = Some(parameters.into_iter().collect());
        self
    }

    /// Returns the class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the base-class expressions.
    #[must_use]
    pub fn bases(&self) -> &[String] {
        &self.bases
    }

    /// Returns the methods declared directly in the class body.
    #[must_use]
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// Returns the `__init__` parameters, or `None` when the class does not
    /// declare its own constructor.
    #[must_use]
    pub fn init_parameters(&self) -> Option<&[Parameter]> {
        self.init_parameters.as_deref()
    }
}

/// Declared classes, functions and imports of one file, in document order.
///
/// Function names are flattened: methods and free functions are listed
/// together regardless of where they are declared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceAnalysis {
    classes: Vec<ClassInfo>,
    functions: Vec<String>,
    imports: Vec<String>,
}

impl SourceAnalysis {
    /// Creates an analysis result.
    #[must_use]
    pub const fn new(classes: Vec<ClassInfo>, functions: Vec<String>, imports: Vec<String>) -> Self {
        Self {
            classes,
            functions,
            imports,
        }
    }

    /// Returns the declared classes.
    #[must_use]
    pub fn classes(&self) -> &[ClassInfo] {
        &self.classes
    }

    /// Returns the declared class names in document order.
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(ClassInfo::name)
    }

    /// Returns the class declared under `name`, if any.
    #[must_use]
    pub fn class(&self, name: &str) -> Option<&ClassInfo> {
        self.classes.iter().find(|class| class.name() == name)
    }

    /// Returns every declared function and method name.
    #[must_use]
    pub fn functions(&self) -> &[String] {
        &self.functions
    }

    /// Returns the import targets.
    #[must_use]
    pub fn imports(&self) -> &[String] {
        &self.imports
    }
}

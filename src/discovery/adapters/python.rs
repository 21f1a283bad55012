//! Python source analysis backed by tree-sitter.
//!
//! Files are parsed into a concrete syntax tree and walked; nothing in the
//! file is ever imported or executed.

use crate::discovery::{
    domain::{ClassInfo, Parameter, ParameterKind, SourceAnalysis},
    ports::{ParseError, SourceAnalyzer},
};
use tree_sitter::{Language, Node, Parser};

/// Static analyser for Python modules.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonAnalyzer;

impl PythonAnalyzer {
    /// Creates an analyser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SourceAnalyzer for PythonAnalyzer {
    fn analyze(&self, source: &str) -> Result<SourceAnalysis, ParseError> {
        let language: Language = tree_sitter_python::LANGUAGE.into();
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|err| ParseError::Grammar(err.to_string()))?;
        let tree = parser.parse(source, None).ok_or(ParseError::Aborted)?;
        let root = tree.root_node();

        if root.has_error() {
            let position = first_error(root).unwrap_or(root).start_position();
            return Err(ParseError::Syntax {
                line: position.row + 1,
                column: position.column + 1,
            });
        }

        Ok(Collector::new(source.as_bytes()).collect(root))
    }
}

fn named_children<'tree>(node: Node<'tree>) -> impl DoubleEndedIterator<Item = Node<'tree>> {
    (0..node.named_child_count()).filter_map(move |index| node.named_child(index))
}

fn first_error(root: Node<'_>) -> Option<Node<'_>> {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if node.has_error() {
            stack.extend((0..node.child_count()).rev().filter_map(|index| node.child(index)));
        }
    }
    None
}

struct Collector<'src> {
    source: &'src [u8],
    classes: Vec<ClassInfo>,
    functions: Vec<String>,
    imports: Vec<String>,
}

impl<'src> Collector<'src> {
    const fn new(source: &'src [u8]) -> Self {
        Self {
            source,
            classes: Vec::new(),
            functions: Vec::new(),
            imports: Vec::new(),
        }
    }

    fn collect(mut self, root: Node<'_>) -> SourceAnalysis {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            match node.kind() {
                "class_definition" => self.record_class(node),
                "function_definition" => {
                    if let Some(name) = self.field_text(node, "name") {
                        self.functions.push(name);
                    }
                }
                "import_statement" => self.record_import(node),
                "import_from_statement" => self.record_from_import(node),
                "future_import_statement" => self.record_future_import(node),
                _ => {}
            }
            stack.extend(named_children(node).rev());
        }
        SourceAnalysis::new(self.classes, self.functions, self.imports)
    }

    fn text(&self, node: Node<'_>) -> String {
        node.utf8_text(self.source).unwrap_or_default().to_owned()
    }

    fn field_text(&self, node: Node<'_>, field: &str) -> Option<String> {
        node.child_by_field_name(field).map(|child| self.text(child))
    }

    /// Name bound by a `dotted_name` or `aliased_import` node.
    fn imported_name(&self, node: Node<'_>) -> Option<String> {
        match node.kind() {
            "dotted_name" => Some(self.text(node)),
            "aliased_import" => self.field_text(node, "name"),
            _ => None,
        }
    }

    fn record_import(&mut self, node: Node<'_>) {
        let targets: Vec<String> = named_children(node)
            .filter_map(|child| self.imported_name(child))
            .collect();
        self.imports.extend(targets);
    }

    fn record_from_import(&mut self, node: Node<'_>) {
        let Some(module_node) = node.child_by_field_name("module_name") else {
            return;
        };
        let module = self.text(module_node);
        let separator = if module.ends_with('.') { "" } else { "." };

        let mut targets = Vec::new();
        for child in named_children(node) {
            if child.id() == module_node.id() {
                continue;
            }
            let name = if child.kind() == "wildcard_import" {
                Some("*".to_owned())
            } else {
                self.imported_name(child)
            };
            if let Some(imported) = name {
                targets.push(format!("{module}{separator}{imported}"));
            }
        }
        self.imports.extend(targets);
    }

    fn record_future_import(&mut self, node: Node<'_>) {
        let targets: Vec<String> = named_children(node)
            .filter_map(|child| self.imported_name(child))
            .map(|name| format!("__future__.{name}"))
            .collect();
        self.imports.extend(targets);
    }

    fn record_class(&mut self, node: Node<'_>) {
        let Some(name) = self.field_text(node, "name") else {
            return;
        };

        let bases: Vec<String> = node
            .child_by_field_name("superclasses")
            .into_iter()
            .flat_map(named_children)
            .filter(|base| base.kind() != "keyword_argument")
            .map(|base| self.text(base))
            .collect();

        let mut methods = Vec::new();
        let mut init_parameters = None;
        for statement in node.child_by_field_name("body").into_iter().flat_map(named_children) {
            let definition = if statement.kind() == "decorated_definition" {
                statement.child_by_field_name("definition")
            } else {
                Some(statement)
            };
            let Some(function) = definition.filter(|def| def.kind() == "function_definition")
            else {
                continue;
            };
            let Some(method) = self.field_text(function, "name") else {
                continue;
            };
            if method == "__init__" {
                init_parameters = function
                    .child_by_field_name("parameters")
                    .map(|parameters| self.parameters(parameters));
            }
            methods.push(method);
        }

        let mut class = ClassInfo::new(name).with_bases(bases).with_methods(methods);
        if let Some(parameters) = init_parameters {
            class = class.with_init_parameters(parameters);
        }
        self.classes.push(class);
    }

    fn parameters(&self, node: Node<'_>) -> Vec<Parameter> {
        let mut parameters: Vec<Parameter> = Vec::new();
        let mut keyword_only = false;

        for child in named_children(node) {
            let positional = if keyword_only {
                ParameterKind::KeywordOnly
            } else {
                ParameterKind::PositionalOrKeyword
            };
            match child.kind() {
                "identifier" | "tuple_pattern" => {
                    parameters.push(Parameter::new(self.text(child), positional, false));
                }
                "default_parameter" | "typed_default_parameter" => {
                    let name = self.field_text(child, "name").unwrap_or_default();
                    parameters.push(Parameter::new(name, positional, true));
                }
                "typed_parameter" => {
                    let Some(inner) = child.named_child(0) else {
                        continue;
                    };
                    let parameter = self.splat_or_plain(inner, positional);
                    keyword_only |= parameter.kind() == ParameterKind::VarPositional;
                    parameters.push(parameter);
                }
                "list_splat_pattern" | "dictionary_splat_pattern" => {
                    let parameter = self.splat_or_plain(child, positional);
                    keyword_only |= parameter.kind() == ParameterKind::VarPositional;
                    parameters.push(parameter);
                }
                "keyword_separator" => keyword_only = true,
                "positional_separator" => {
                    parameters = parameters
                        .into_iter()
                        .map(|parameter| {
                            if parameter.kind() == ParameterKind::PositionalOrKeyword {
                                Parameter::new(
                                    parameter.name(),
                                    ParameterKind::PositionalOnly,
                                    parameter.is_optional(),
                                )
                            } else {
                                parameter
                            }
                        })
                        .collect();
                }
                _ => {}
            }
        }
        parameters
    }

    fn splat_or_plain(&self, node: Node<'_>, positional: ParameterKind) -> Parameter {
        let name_of = |splat: Node<'_>| {
            splat
                .named_child(0)
                .map_or_else(|| self.text(splat), |inner| self.text(inner))
        };
        match node.kind() {
            "list_splat_pattern" => {
                Parameter::new(name_of(node), ParameterKind::VarPositional, false)
            }
            "dictionary_splat_pattern" => {
                Parameter::new(name_of(node), ParameterKind::VarKeyword, false)
            }
            _ => Parameter::new(self.text(node), positional, false),
        }
    }
}

use crate::schema::TypeValidationError;
use crate::types::Directive;
use crate::types::DirectiveAnnotation;
use crate::types::GraphQLType;
use indexmap::IndexMap;
use std::collections::HashSet;

/// A directive definition must not (directly, or through the types of its
/// arguments) reference itself.
///
/// https://spec.graphql.org/October2021/#sel-HAHnBBNBCDABV6Y
pub(super) struct DirectiveCycleValidator<'a> {
    directive_defs: &'a IndexMap<String, Directive>,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> DirectiveCycleValidator<'a> {
    pub fn new(
        directive_defs: &'a IndexMap<String, Directive>,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            directive_defs,
            types_map,
        }
    }

    pub fn validate(self) -> Vec<TypeValidationError> {
        let mut errors = vec![];
        for directive in self.directive_defs.values() {
            if directive.is_builtin() {
                continue;
            }
            let mut path = vec![directive.name().to_string()];
            let mut visited = HashSet::new();
            if self.find_cycle(directive.name(), directive, &mut path, &mut visited) {
                errors.push(TypeValidationError::CircularDirectiveReference {
                    directive_name: directive.name().to_string(),
                    directive_path: path,
                    location: directive.def_location().to_owned(),
                });
            }
        }
        errors
    }

    /// Depth-first search from `directive` back to `root_name`. On success
    /// `path` holds the chain of directive names that closes the cycle.
    fn find_cycle(
        &self,
        root_name: &str,
        directive: &Directive,
        path: &mut Vec<String>,
        visited: &mut HashSet<String>,
    ) -> bool {
        for referenced_name in self.referenced_directives(directive) {
            if referenced_name == root_name {
                path.push(referenced_name);
                return true;
            }
            if !visited.insert(referenced_name.to_string()) {
                continue;
            }
            let Some(referenced) = self.directive_defs.get(&referenced_name) else {
                continue;
            };
            path.push(referenced_name);
            if self.find_cycle(root_name, referenced, path, visited) {
                return true;
            }
            path.pop();
        }
        false
    }

    /// Names of the directives applied to `directive`'s parameters, or
    /// anywhere within the (input) types of those parameters.
    fn referenced_directives(&self, directive: &Directive) -> Vec<String> {
        let mut names = vec![];
        let mut visited_types = HashSet::new();
        for param in directive.parameters().values() {
            Self::collect_names(param.directives(), &mut names);
            self.collect_type_references(
                param.type_ref().innermost_name(),
                &mut names,
                &mut visited_types,
            );
        }
        names
    }

    fn collect_type_references(
        &self,
        type_name: &str,
        names: &mut Vec<String>,
        visited_types: &mut HashSet<String>,
    ) {
        if !visited_types.insert(type_name.to_string()) {
            return;
        }
        let Some(type_) = self.types_map.get(type_name) else {
            return;
        };
        Self::collect_names(type_.directives(), names);
        match type_ {
            GraphQLType::Enum(enum_type) => {
                for value in enum_type.values().values() {
                    Self::collect_names(value.directives(), names);
                }
            },
            GraphQLType::InputObject(inputobj_type) => {
                for field in inputobj_type.fields().values() {
                    Self::collect_names(field.directives(), names);
                    self.collect_type_references(
                        field.type_ref().innermost_name(),
                        names,
                        visited_types,
                    );
                }
            },
            _ => (),
        }
    }

    fn collect_names(annotations: &[DirectiveAnnotation], names: &mut Vec<String>) {
        for annot in annotations {
            if !names.iter().any(|name| name == annot.name()) {
                names.push(annot.name().to_string());
            }
        }
    }
}

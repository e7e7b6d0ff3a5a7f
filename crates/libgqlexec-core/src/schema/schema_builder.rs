use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::operation::OperationKind;
use crate::schema::DefaultValueValidator;
use crate::schema::DirectiveAnnotationValidator;
use crate::schema::DirectiveCycleValidator;
use crate::schema::NamedTypeDefLocation;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::introspection_schema::INTROSPECTION_SDL;
use crate::schema::introspection_schema::INTROSPECTION_SDL_PATH;
use crate::types::Directive;
use crate::types::DirectiveLocation;
use crate::types::EnumTypeBuilder;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectTypeBuilder;
use crate::types::InputValue;
use crate::types::InterfaceTypeBuilder;
use crate::types::ObjectTypeBuilder;
use crate::types::ScalarTypeBuilder;
use crate::types::TypeBuilder;
use crate::types::TypeBuilderHelpers;
use crate::types::TypeRef;
use crate::types::TypesMapBuilder;
use crate::types::UnionTypeBuilder;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const BUILTIN_DIRECTIVE_NAMES: [&str; 4] = [
    "deprecated",
    "include",
    "skip",
    "specifiedBy",
];

/// Utility for building a [`Schema`].
///
/// Documents may be loaded in any order and split across any number of
/// files: names are collected from every loaded document before anything is
/// resolved, so forward references (and extensions that precede the type
/// they extend) work. Errors found while visiting definitions are
/// accumulated and reported together by [`SchemaBuilder::build`].
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_defs: IndexMap<String, Directive>,
    enum_builder: EnumTypeBuilder,
    errors: Vec<SchemaBuildError>,
    inputobject_builder: InputObjectTypeBuilder,
    interface_builder: InterfaceTypeBuilder,
    mutation_type: Option<NamedTypeDefLocation>,
    object_builder: ObjectTypeBuilder,
    query_type: Option<NamedTypeDefLocation>,
    scalar_builder: ScalarTypeBuilder,
    str_load_counter: u16,
    subscription_type: Option<NamedTypeDefLocation>,
    types_map_builder: TypesMapBuilder,
    union_builder: UnionTypeBuilder,
}
impl SchemaBuilder {
    pub fn build(mut self) -> std::result::Result<Schema, Vec<SchemaBuildError>> {
        tracing::debug!("building schema");

        self.load_introspection_types();
        self.inject_missing_builtin_directives();

        let mut errors = std::mem::take(&mut self.errors);
        let finalize_results = [
            self.enum_builder.finalize(&mut self.types_map_builder),
            self.inputobject_builder.finalize(&mut self.types_map_builder),
            self.interface_builder.finalize(&mut self.types_map_builder),
            self.object_builder.finalize(&mut self.types_map_builder),
            self.scalar_builder.finalize(&mut self.types_map_builder),
            self.union_builder.finalize(&mut self.types_map_builder),
        ];
        for result in finalize_results {
            if let Err(mut finalize_errors) = result {
                errors.append(&mut finalize_errors);
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let mut types = self.types_map_builder.into_types_map()?;

        let query_type = Self::resolve_root_type(
            &types,
            OperationKind::Query,
            self.query_type.take(),
            &mut errors,
        );
        let mutation_type = Self::resolve_root_type(
            &types,
            OperationKind::Mutation,
            self.mutation_type.take(),
            &mut errors,
        );
        let subscription_type = Self::resolve_root_type(
            &types,
            OperationKind::Subscription,
            self.subscription_type.take(),
            &mut errors,
        );
        let Some(query_type) = query_type else {
            if errors.is_empty() {
                errors.push(SchemaBuildError::NoQueryOperationTypeDefined);
            }
            return Err(errors);
        };

        if let Some(GraphQLType::Object(query_obj)) = types.get_mut(&query_type) {
            Self::add_introspection_root_fields(&mut query_obj.0.fields, &query_type);
        }

        errors.extend(
            DirectiveAnnotationValidator::new(&self.directive_defs, &types)
                .validate()
                .into_iter()
                .map(SchemaBuildError::from),
        );
        errors.extend(
            DirectiveCycleValidator::new(&self.directive_defs, &types)
                .validate()
                .into_iter()
                .map(SchemaBuildError::from),
        );
        errors.extend(
            DefaultValueValidator::new(&self.directive_defs, &types)
                .validate()
                .into_iter()
                .map(SchemaBuildError::from),
        );
        if !errors.is_empty() {
            return Err(errors);
        }

        let union_typename_fields: HashMap<String, Field> =
            types.values()
                .filter_map(GraphQLType::as_union)
                .map(|union_type| (
                    union_type.name().to_string(),
                    Field::typename(union_type.name()),
                ))
                .collect();

        tracing::debug!(
            types = types.len(),
            directives = self.directive_defs.len(),
            "schema built",
        );

        Ok(Schema {
            directive_defs: self.directive_defs,
            mutation_type,
            query_type,
            subscription_type,
            types,
            union_typename_fields,
        })
    }

    pub fn new() -> Self {
        Self {
            directive_defs: IndexMap::new(),
            enum_builder: EnumTypeBuilder::new(),
            errors: vec![],
            inputobject_builder: InputObjectTypeBuilder::new(),
            interface_builder: InterfaceTypeBuilder::new(),
            mutation_type: None,
            object_builder: ObjectTypeBuilder::new(),
            query_type: None,
            scalar_builder: ScalarTypeBuilder::new(),
            str_load_counter: 0,
            subscription_type: None,
            types_map_builder: TypesMapBuilder::new(),
            union_builder: UnionTypeBuilder::new(),
        }
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    /// Parses and visits one schema document. Content loaded without a
    /// file path is reported under a `str://N` pseudo-path.
    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc = ast::schema::parse(content)
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.to_owned(),
                err: err.to_string(),
            })?;

        tracing::debug!(
            file = %file_path.display(),
            definitions = ast_doc.definitions.len(),
            "loading schema document",
        );

        for def in ast_doc.definitions {
            if let Err(err) = self.visit_ast_def(file_path.as_path(), def) {
                self.errors.push(err);
            }
        }

        Ok(self)
    }

    fn add_introspection_root_fields(
        fields: &mut IndexMap<String, Field>,
        query_type_name: &str,
    ) {
        let builtin_field = |name: &str, type_ref: TypeRef, parameters| Field {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            description: None,
            directives: vec![],
            name: name.to_string(),
            parameters,
            parent_type_name: query_type_name.to_string(),
            type_ref,
        };

        fields.insert("__schema".to_string(), builtin_field(
            "__schema",
            TypeRef::non_null(TypeRef::named("__Schema")),
            IndexMap::new(),
        ));
        fields.insert("__type".to_string(), builtin_field(
            "__type",
            TypeRef::named("__Type"),
            IndexMap::from([(
                "name".to_string(),
                InputValue {
                    def_location: loc::SourceLocation::GraphQLBuiltIn,
                    default_value: None,
                    description: None,
                    directives: vec![],
                    name: "name".to_string(),
                    type_ref: TypeRef::non_null(TypeRef::named("String")),
                },
            )]),
        ));
    }

    fn inject_missing_builtin_directives(&mut self) {
        for directive in [
            Directive::builtin_deprecated(),
            Directive::builtin_include(),
            Directive::builtin_skip(),
            Directive::builtin_specified_by(),
        ] {
            if !self.directive_defs.contains_key(directive.name()) {
                self.directive_defs.insert(directive.name().to_string(), directive);
            }
        }
    }

    /// Grafts the introspection types into the types map. These are the only
    /// definitions allowed to use `__`-prefixed names.
    fn load_introspection_types(&mut self) {
        let ast_doc = match ast::schema::parse(INTROSPECTION_SDL) {
            Ok(ast_doc) => ast_doc,
            Err(err) => {
                self.errors.push(SchemaBuildError::ParseError {
                    file: PathBuf::from(INTROSPECTION_SDL_PATH),
                    err: err.to_string(),
                });
                return;
            },
        };

        self.types_map_builder.allow_dunder_names = true;
        for def in ast_doc.definitions {
            if let Err(err) = self.visit_ast_def(Path::new(INTROSPECTION_SDL_PATH), def) {
                self.errors.push(err);
            }
        }
        self.types_map_builder.allow_dunder_names = false;
    }

    /// Determines the root type for one operation kind: the type named in a
    /// `schema { }` block if there was one, else the conventionally-named
    /// object type (if defined).
    fn resolve_root_type(
        types: &IndexMap<String, GraphQLType>,
        operation: OperationKind,
        declared: Option<NamedTypeDefLocation>,
        errors: &mut Vec<SchemaBuildError>,
    ) -> Option<String> {
        let Some(declared) = declared else {
            let conventional_name = match operation {
                OperationKind::Mutation => "Mutation",
                OperationKind::Query => "Query",
                OperationKind::Subscription => "Subscription",
            };
            return match types.get(conventional_name) {
                Some(GraphQLType::Object(_)) => Some(conventional_name.to_string()),
                _ => None,
            };
        };

        match types.get(declared.type_name.as_str()) {
            Some(GraphQLType::Object(_)) => Some(declared.type_name),
            Some(_) => {
                errors.push(SchemaBuildError::InvalidOperationType {
                    location: declared.def_location,
                    operation,
                    type_name: declared.type_name,
                });
                None
            },
            None => {
                errors.push(SchemaBuildError::UndefinedOperationType {
                    location: declared.def_location,
                    operation,
                    type_name: declared.type_name,
                });
                None
            },
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use graphql_parser::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) =>
                self.visit_ast_type_extension(file_path, type_ext),
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_ast_directive_def(file_path, directive_def),
        }
    }

    fn visit_ast_directive_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let def_location: loc::SourceLocation =
            loc::FilePosition::from_pos(file_path, def.position).into();

        if BUILTIN_DIRECTIVE_NAMES.contains(&def.name.as_str()) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                directive_name: def.name,
                location: def_location,
            });
        }

        // https://spec.graphql.org/October2021/#sec-Type-System.Directives.Validation
        if def.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName {
                def_location,
                directive_name: def.name,
            });
        }

        if let Some(existing) = self.directive_defs.get(def.name.as_str()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name.to_string(),
                location1: existing.def_location.to_owned(),
                location2: def_location,
            });
        }

        let parameters = TypeBuilderHelpers::input_values_from_ast(
            &def_location,
            format!("@{}", def.name).as_str(),
            &def.arguments,
            false,
        )?;

        self.directive_defs.insert(def.name.to_string(), Directive {
            def_location,
            description: def.description.to_owned(),
            locations: def.locations.iter().map(DirectiveLocation::from_ast).collect(),
            name: def.name.to_string(),
            parameters,
            repeatable: def.repeatable,
        });

        Ok(())
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: &Path,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let def_location: loc::SourceLocation =
            loc::FilePosition::from_pos(file_path, schema_def.position).into();

        let declarations = [
            (OperationKind::Query, &schema_def.query),
            (OperationKind::Mutation, &schema_def.mutation),
            (OperationKind::Subscription, &schema_def.subscription),
        ];
        for (operation, type_name) in declarations {
            let Some(type_name) = type_name else {
                continue;
            };
            let typedef_loc = NamedTypeDefLocation {
                def_location: def_location.to_owned(),
                type_name: type_name.to_string(),
            };
            let slot = match operation {
                OperationKind::Mutation => &mut self.mutation_type,
                OperationKind::Query => &mut self.query_type,
                OperationKind::Subscription => &mut self.subscription_type,
            };
            if let Some(existing_typedef_loc) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    location1: existing_typedef_loc.to_owned(),
                    location2: typedef_loc,
                });
            }
            *slot = Some(typedef_loc);
        }

        // From the GraphQL type system rules:
        //
        // > The query, mutation, and subscription root types must all be
        // > different types if provided.
        //
        // https://spec.graphql.org/October2021/#sel-FAHTRLCAACG0B57a
        let roots = [
            (OperationKind::Query, &self.query_type),
            (OperationKind::Mutation, &self.mutation_type),
            (OperationKind::Subscription, &self.subscription_type),
        ];
        for (idx, (operation1, root1)) in roots.iter().enumerate() {
            for (operation2, root2) in &roots[idx + 1..] {
                if let (Some(root1), Some(root2)) = (root1, root2)
                    && root1.type_name == root2.type_name {
                    return Err(SchemaBuildError::NonUniqueOperationTypes {
                        reused_type_name: root1.type_name.to_owned(),
                        operation1: *operation1,
                        operation1_loc: root1.def_location.to_owned(),
                        operation2: *operation2,
                        operation2_loc: root2.def_location.to_owned(),
                    });
                }
            }
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: &Path,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use graphql_parser::schema::TypeDefinition;
        match type_def {
            TypeDefinition::Enum(enum_def) =>
                self.enum_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    enum_def,
                ),

            TypeDefinition::InputObject(inputobj_def) =>
                self.inputobject_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    inputobj_def,
                ),

            TypeDefinition::Interface(iface_def) =>
                self.interface_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    iface_def,
                ),

            TypeDefinition::Scalar(scalar_def) =>
                self.scalar_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    scalar_def,
                ),

            TypeDefinition::Object(obj_def) =>
                self.object_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    obj_def,
                ),

            TypeDefinition::Union(union_def) =>
                self.union_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    union_def,
                ),
        }
    }

    fn visit_ast_type_extension(
        &mut self,
        file_path: &Path,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use graphql_parser::schema::TypeExtension;
        match ext {
            TypeExtension::Enum(enum_ext) =>
                self.enum_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    enum_ext,
                ),

            TypeExtension::InputObject(inputobj_ext) =>
                self.inputobject_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    inputobj_ext,
                ),

            TypeExtension::Interface(iface_ext) =>
                self.interface_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    iface_ext,
                ),

            TypeExtension::Object(obj_ext) =>
                self.object_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    obj_ext,
                ),

            TypeExtension::Scalar(scalar_ext) =>
                self.scalar_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    scalar_ext,
                ),

            TypeExtension::Union(union_ext) =>
                self.union_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    union_ext,
                ),
        }
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

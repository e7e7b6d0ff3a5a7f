use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::DirectiveAnnotation;
use crate::types::Field;
use crate::types::InputValue;
use crate::types::TypeRef;
use crate::types::TypesMapBuilder;
use indexmap::IndexMap;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

pub(crate) trait TypeBuilder: Sized {
    type AstTypeDef;
    type AstTypeExtension;

    /// Merges any extensions that were visited before the type they extend
    /// was defined.
    fn finalize(
        self,
        types_map_builder: &mut TypesMapBuilder,
    ) -> std::result::Result<(), Vec<SchemaBuildError>>;

    fn visit_type_def(
        &mut self,
        types_map_builder: &mut TypesMapBuilder,
        file_path: &Path,
        def: Self::AstTypeDef,
    ) -> Result<()>;

    fn visit_type_extension(
        &mut self,
        types_map_builder: &mut TypesMapBuilder,
        file_path: &Path,
        ext: Self::AstTypeExtension,
    ) -> Result<()>;
}

pub(crate) struct TypeBuilderHelpers;
impl TypeBuilderHelpers {
    /// Builds parameter or input-field definitions, rejecting duplicated and
    /// `__`-prefixed names.
    pub fn input_values_from_ast(
        parent_location: &loc::SourceLocation,
        owner_name: &str,
        input_values: &[ast::schema::InputValue],
        allow_dunder_names: bool,
    ) -> Result<IndexMap<String, InputValue>> {
        let mut input_value_map: IndexMap<String, InputValue> = IndexMap::new();
        for input_value in input_values {
            let input_value_loc =
                parent_location.with_ast_position(&input_value.position);

            // https://spec.graphql.org/October2021/#sel-KAHZhCFDBHBBCAACCTlrG
            if !allow_dunder_names && input_value.name.starts_with("__") {
                return Err(SchemaBuildError::InvalidDunderPrefixedInputValueName {
                    location: input_value_loc,
                    input_value_name: input_value.name.to_string(),
                    owner_name: owner_name.to_string(),
                });
            }

            if let Some(existing) = input_value_map.get(input_value.name.as_str()) {
                return Err(SchemaBuildError::DuplicateInputValueDefinition {
                    owner_name: owner_name.to_string(),
                    input_value_name: input_value.name.to_string(),
                    def1: existing.def_location.to_owned(),
                    def2: input_value_loc,
                });
            }

            input_value_map.insert(
                input_value.name.to_string(),
                Self::input_value_from_ast(&input_value_loc, input_value),
            );
        }
        Ok(input_value_map)
    }

    fn input_value_from_ast(
        input_value_loc: &loc::SourceLocation,
        input_value: &ast::schema::InputValue,
    ) -> InputValue {
        InputValue {
            def_location: input_value_loc.to_owned(),
            default_value: input_value.default_value.to_owned(),
            description: input_value.description.to_owned(),
            directives: DirectiveAnnotation::from_ast(
                input_value_loc,
                &input_value.directives,
            ),
            name: input_value.name.to_string(),
            type_ref: TypeRef::from_ast(&input_value.value_type),
        }
    }

    /// Builds a single field definition (without inserting it anywhere).
    pub fn field_from_ast(
        parent_location: &loc::SourceLocation,
        type_name: &str,
        field: &ast::schema::Field,
        allow_dunder_names: bool,
    ) -> Result<Field> {
        let fielddef_srcloc = parent_location.with_ast_position(&field.position);

        // https://spec.graphql.org/October2021/#sel-IAHZhCFDBDCAACCTl4L
        if !allow_dunder_names && field.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                location: fielddef_srcloc,
                field_name: field.name.to_string(),
                type_name: type_name.to_string(),
            });
        }

        Ok(Field {
            description: field.description.to_owned(),
            directives: DirectiveAnnotation::from_ast(
                &fielddef_srcloc,
                &field.directives,
            ),
            name: field.name.to_string(),
            parameters: Self::input_values_from_ast(
                &fielddef_srcloc,
                format!("{type_name}.{}", field.name).as_str(),
                &field.arguments,
                allow_dunder_names,
            )?,
            parent_type_name: type_name.to_string(),
            type_ref: TypeRef::from_ast(&field.field_type),
            def_location: fielddef_srcloc,
        })
    }

    /// Builds the ordered field map of an object or interface type. Every
    /// such type implicitly has a `__typename: String!` field.
    pub fn object_fielddefs_from_ast(
        obj_def_location: &loc::SourceLocation,
        type_name: &str,
        fields: &[ast::schema::Field],
        allow_dunder_names: bool,
    ) -> Result<IndexMap<String, Field>> {
        let mut field_map = IndexMap::from([
            ("__typename".to_string(), Field::typename(type_name)),
        ]);
        Self::append_fields(
            &mut field_map,
            obj_def_location,
            type_name,
            fields,
            allow_dunder_names,
        )?;
        Ok(field_map)
    }

    /// Appends field definitions (from a definition or an extension) to an
    /// existing field map.
    pub fn append_fields(
        field_map: &mut IndexMap<String, Field>,
        parent_location: &loc::SourceLocation,
        type_name: &str,
        fields: &[ast::schema::Field],
        allow_dunder_names: bool,
    ) -> Result<()> {
        for field in fields {
            let field = Self::field_from_ast(
                parent_location,
                type_name,
                field,
                allow_dunder_names,
            )?;
            if let Some(existing_field) = field_map.get(field.name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: field.name,
                    field_def1: existing_field.def_location.to_owned(),
                    field_def2: field.def_location,
                });
            }
            field_map.insert(field.name.to_string(), field);
        }
        Ok(())
    }

    /// Object and interface declarations must list a unique set of
    /// implemented interfaces.
    ///
    /// https://spec.graphql.org/October2021/#sel-HAHZhCFFABABsCqgY
    pub fn append_interfaces(
        interfaces: &mut Vec<String>,
        def_location: &loc::SourceLocation,
        type_name: &str,
        implements_interfaces: &[String],
    ) -> Result<()> {
        for iface_name in implements_interfaces {
            if interfaces.contains(iface_name) {
                return Err(SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                    def_location: def_location.to_owned(),
                    duplicated_interface_name: iface_name.to_string(),
                    type_name: type_name.to_string(),
                });
            }
            interfaces.push(iface_name.to_string());
        }
        Ok(())
    }
}

use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::DirectiveAnnotation;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::TypeBuilder;
use crate::types::TypesMapBuilder;
use indexmap::IndexMap;
use inherent::inherent;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct EnumTypeBuilder {
    extensions: Vec<(PathBuf, ast::schema::EnumTypeExtension)>,
}

impl EnumTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }

    fn append_values(
        values: &mut IndexMap<String, EnumValue>,
        parent_location: &loc::SourceLocation,
        enum_name: &str,
        ast_values: &[ast::schema::EnumValue],
    ) -> Result<()> {
        for ast_value in ast_values {
            let value_loc = parent_location.with_ast_position(&ast_value.position);

            // https://spec.graphql.org/October2021/#EnumValue
            if matches!(ast_value.name.as_str(), "true" | "false" | "null") {
                return Err(SchemaBuildError::InvalidEnumValueName {
                    enum_name: enum_name.to_string(),
                    location: value_loc,
                    value_name: ast_value.name.to_string(),
                });
            }

            if let Some(existing_value) = values.get(ast_value.name.as_str()) {
                return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                    enum_name: enum_name.to_string(),
                    enum_value: ast_value.name.to_string(),
                    value_def1: existing_value.def_location.to_owned(),
                    value_def2: value_loc,
                });
            }

            values.insert(ast_value.name.to_string(), EnumValue {
                description: ast_value.description.to_owned(),
                directives: DirectiveAnnotation::from_ast(
                    &value_loc,
                    &ast_value.directives,
                ),
                name: ast_value.name.to_string(),
                def_location: value_loc,
            });
        }
        Ok(())
    }

    fn merge_into_types_map(
        types_builder: &mut TypesMapBuilder,
        file_path: &Path,
        ext: ast::schema::EnumTypeExtension,
    ) -> Result<()> {
        let ext_loc: loc::SourceLocation =
            loc::FilePosition::from_pos(file_path, ext.position).into();
        match types_builder.get_type_mut(ext.name.as_str()) {
            Some(GraphQLType::Enum(enum_type)) => {
                enum_type.directives.append(&mut DirectiveAnnotation::from_ast(
                    &ext_loc,
                    &ext.directives,
                ));
                Self::append_values(
                    &mut enum_type.values,
                    &ext_loc,
                    ext.name.as_str(),
                    &ext.values,
                )
            },

            Some(non_enum_type) => Err(SchemaBuildError::InvalidExtensionType {
                actual_kind: non_enum_type.kind(),
                expected_kind: GraphQLTypeKind::Enum,
                extension_location: ext_loc,
                type_name: ext.name.to_string(),
            }),

            None => Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name: ext.name.to_string(),
                extension_location: ext_loc,
            }),
        }
    }
}

#[inherent]
impl TypeBuilder for EnumTypeBuilder {
    type AstTypeDef = ast::schema::EnumType;
    type AstTypeExtension = ast::schema::EnumTypeExtension;

    pub(crate) fn finalize(
        self,
        types_builder: &mut TypesMapBuilder,
    ) -> std::result::Result<(), Vec<SchemaBuildError>> {
        let errors: Vec<SchemaBuildError> =
            self.extensions.into_iter()
                .filter_map(|(ext_path, ext)| Self::merge_into_types_map(
                    types_builder,
                    ext_path.as_path(),
                    ext,
                ).err())
                .collect();
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    pub(crate) fn visit_type_def(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: &Path,
        def: ast::schema::EnumType,
    ) -> Result<()> {
        let def_location: loc::SourceLocation =
            loc::FilePosition::from_pos(file_path, def.position).into();

        let mut values = IndexMap::new();
        Self::append_values(
            &mut values,
            &def_location,
            def.name.as_str(),
            &def.values,
        )?;

        types_builder.add_new_type(
            def.name.as_str(),
            &def_location,
            GraphQLType::Enum(Box::new(EnumType {
                description: def.description.to_owned(),
                directives: DirectiveAnnotation::from_ast(
                    &def_location,
                    &def.directives,
                ),
                name: def.name.to_string(),
                values,
                def_location: def_location.to_owned(),
            })),
        )
    }

    pub(crate) fn visit_type_extension(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: &Path,
        ext: ast::schema::EnumTypeExtension,
    ) -> Result<()> {
        if types_builder.get_type(ext.name.as_str()).is_none() {
            self.extensions.push((file_path.to_path_buf(), ext));
            return Ok(());
        }
        Self::merge_into_types_map(types_builder, file_path, ext)
    }
}

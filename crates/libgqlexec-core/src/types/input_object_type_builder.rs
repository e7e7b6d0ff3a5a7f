use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::DirectiveAnnotation;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::TypeBuilder;
use crate::types::TypeBuilderHelpers;
use crate::types::TypesMapBuilder;
use inherent::inherent;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct InputObjectTypeBuilder {
    extensions: Vec<(PathBuf, ast::schema::InputObjectTypeExtension)>,
}

impl InputObjectTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }

    fn merge_into_types_map(
        types_builder: &mut TypesMapBuilder,
        file_path: &Path,
        ext: ast::schema::InputObjectTypeExtension,
    ) -> Result<()> {
        let allow_dunder_names = types_builder.allow_dunder_names;
        let ext_loc: loc::SourceLocation =
            loc::FilePosition::from_pos(file_path, ext.position).into();
        match types_builder.get_type_mut(ext.name.as_str()) {
            Some(GraphQLType::InputObject(inputobj_type)) => {
                inputobj_type.directives.append(&mut DirectiveAnnotation::from_ast(
                    &ext_loc,
                    &ext.directives,
                ));
                let ext_fields = TypeBuilderHelpers::input_values_from_ast(
                    &ext_loc,
                    ext.name.as_str(),
                    &ext.fields,
                    allow_dunder_names,
                )?;
                for (field_name, field) in ext_fields {
                    if let Some(existing_field) = inputobj_type.fields.get(&field_name) {
                        return Err(SchemaBuildError::DuplicateInputValueDefinition {
                            owner_name: ext.name.to_string(),
                            input_value_name: field_name,
                            def1: existing_field.def_location.to_owned(),
                            def2: field.def_location,
                        });
                    }
                    inputobj_type.fields.insert(field_name, field);
                }
                Ok(())
            },

            Some(non_inputobj_type) => Err(SchemaBuildError::InvalidExtensionType {
                actual_kind: non_inputobj_type.kind(),
                expected_kind: GraphQLTypeKind::InputObject,
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
impl TypeBuilder for InputObjectTypeBuilder {
    type AstTypeDef = ast::schema::InputObjectType;
    type AstTypeExtension = ast::schema::InputObjectTypeExtension;

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
        def: ast::schema::InputObjectType,
    ) -> Result<()> {
        let def_location: loc::SourceLocation =
            loc::FilePosition::from_pos(file_path, def.position).into();

        let fields = TypeBuilderHelpers::input_values_from_ast(
            &def_location,
            def.name.as_str(),
            &def.fields,
            types_builder.allow_dunder_names,
        )?;

        types_builder.add_new_type(
            def.name.as_str(),
            &def_location,
            GraphQLType::InputObject(Box::new(InputObjectType {
                description: def.description.to_owned(),
                directives: DirectiveAnnotation::from_ast(
                    &def_location,
                    &def.directives,
                ),
                fields,
                name: def.name.to_string(),
                def_location: def_location.to_owned(),
            })),
        )
    }

    pub(crate) fn visit_type_extension(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: &Path,
        ext: ast::schema::InputObjectTypeExtension,
    ) -> Result<()> {
        if types_builder.get_type(ext.name.as_str()).is_none() {
            self.extensions.push((file_path.to_path_buf(), ext));
            return Ok(());
        }
        Self::merge_into_types_map(types_builder, file_path, ext)
    }
}

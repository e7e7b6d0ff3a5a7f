use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::DirectiveAnnotation;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::ScalarType;
use crate::types::TypeBuilder;
use crate::types::TypesMapBuilder;
use inherent::inherent;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct ScalarTypeBuilder {
    extensions: Vec<(PathBuf, ast::schema::ScalarTypeExtension)>,
}

impl ScalarTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }

    fn merge_into_types_map(
        types_builder: &mut TypesMapBuilder,
        file_path: &Path,
        ext: ast::schema::ScalarTypeExtension,
    ) -> Result<()> {
        let ext_loc: loc::SourceLocation =
            loc::FilePosition::from_pos(file_path, ext.position).into();
        match types_builder.get_type_mut(ext.name.as_str()) {
            Some(GraphQLType::Scalar(scalar_type)) => {
                scalar_type.directives.append(&mut DirectiveAnnotation::from_ast(
                    &ext_loc,
                    &ext.directives,
                ));
                Ok(())
            },

            Some(non_scalar_type) => Err(SchemaBuildError::InvalidExtensionType {
                actual_kind: non_scalar_type.kind(),
                expected_kind: GraphQLTypeKind::Scalar,
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
impl TypeBuilder for ScalarTypeBuilder {
    type AstTypeDef = ast::schema::ScalarType;
    type AstTypeExtension = ast::schema::ScalarTypeExtension;

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
        def: ast::schema::ScalarType,
    ) -> Result<()> {
        let def_location: loc::SourceLocation =
            loc::FilePosition::from_pos(file_path, def.position).into();

        types_builder.add_new_type(
            def.name.as_str(),
            &def_location,
            GraphQLType::Scalar(Box::new(ScalarType {
                description: def.description.to_owned(),
                directives: DirectiveAnnotation::from_ast(
                    &def_location,
                    &def.directives,
                ),
                name: def.name.to_string(),
                def_location: def_location.to_owned(),
            })),
        )
    }

    pub(crate) fn visit_type_extension(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: &Path,
        ext: ast::schema::ScalarTypeExtension,
    ) -> Result<()> {
        if types_builder.get_type(ext.name.as_str()).is_none() {
            self.extensions.push((file_path.to_path_buf(), ext));
            return Ok(());
        }
        Self::merge_into_types_map(types_builder, file_path, ext)
    }
}

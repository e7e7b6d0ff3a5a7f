use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::DirectiveAnnotation;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::TypeBuilder;
use crate::types::TypeBuilderHelpers;
use crate::types::TypesMapBuilder;
use inherent::inherent;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct ObjectTypeBuilder {
    extensions: Vec<(PathBuf, ast::schema::ObjectTypeExtension)>,
}

impl ObjectTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }

    fn merge_type_extension(
        obj_type: &mut ObjectType,
        allow_dunder_names: bool,
        ext_file_path: &Path,
        ext: ast::schema::ObjectTypeExtension,
    ) -> Result<()> {
        let ext_loc: loc::SourceLocation =
            loc::FilePosition::from_pos(ext_file_path, ext.position).into();

        obj_type.0.directives.append(&mut DirectiveAnnotation::from_ast(
            &ext_loc,
            &ext.directives,
        ));

        TypeBuilderHelpers::append_interfaces(
            &mut obj_type.0.interfaces,
            &ext_loc,
            ext.name.as_str(),
            &ext.implements_interfaces,
        )?;

        TypeBuilderHelpers::append_fields(
            &mut obj_type.0.fields,
            &ext_loc,
            ext.name.as_str(),
            &ext.fields,
            allow_dunder_names,
        )
    }

    fn merge_into_types_map(
        types_builder: &mut TypesMapBuilder,
        file_path: &Path,
        ext: ast::schema::ObjectTypeExtension,
    ) -> Result<()> {
        let allow_dunder_names = types_builder.allow_dunder_names;
        match types_builder.get_type_mut(ext.name.as_str()) {
            Some(GraphQLType::Object(obj_type)) => Self::merge_type_extension(
                obj_type,
                allow_dunder_names,
                file_path,
                ext,
            ),

            Some(non_obj_type) => Err(SchemaBuildError::InvalidExtensionType {
                actual_kind: non_obj_type.kind(),
                expected_kind: GraphQLTypeKind::Object,
                extension_location: loc::FilePosition::from_pos(
                    file_path,
                    ext.position,
                ).into(),
                type_name: ext.name.to_string(),
            }),

            None => Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name: ext.name.to_string(),
                extension_location: loc::FilePosition::from_pos(
                    file_path,
                    ext.position,
                ).into(),
            }),
        }
    }
}

#[inherent]
impl TypeBuilder for ObjectTypeBuilder {
    type AstTypeDef = ast::schema::ObjectType;
    type AstTypeExtension = ast::schema::ObjectTypeExtension;

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
        def: ast::schema::ObjectType,
    ) -> Result<()> {
        let def_location: loc::SourceLocation =
            loc::FilePosition::from_pos(file_path, def.position).into();

        let fields = TypeBuilderHelpers::object_fielddefs_from_ast(
            &def_location,
            def.name.as_str(),
            &def.fields,
            types_builder.allow_dunder_names,
        )?;

        let mut interfaces = vec![];
        TypeBuilderHelpers::append_interfaces(
            &mut interfaces,
            &def_location,
            def.name.as_str(),
            &def.implements_interfaces,
        )?;

        types_builder.add_new_type(
            def.name.as_str(),
            &def_location,
            GraphQLType::Object(Box::new(ObjectType(ObjectOrInterfaceTypeData {
                description: def.description.to_owned(),
                directives: DirectiveAnnotation::from_ast(
                    &def_location,
                    &def.directives,
                ),
                fields,
                interfaces,
                name: def.name.to_string(),
                def_location: def_location.to_owned(),
            }))),
        )
    }

    pub(crate) fn visit_type_extension(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: &Path,
        ext: ast::schema::ObjectTypeExtension,
    ) -> Result<()> {
        // Extensions may precede the definition they extend; defer those until
        // all definitions have been visited.
        if types_builder.get_type(ext.name.as_str()).is_none() {
            self.extensions.push((file_path.to_path_buf(), ext));
            return Ok(());
        }
        Self::merge_into_types_map(types_builder, file_path, ext)
    }
}

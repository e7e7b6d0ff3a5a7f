use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::DirectiveAnnotation;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::TypeBuilder;
use crate::types::TypesMapBuilder;
use crate::types::UnionType;
use indexmap::IndexMap;
use inherent::inherent;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct UnionTypeBuilder {
    extensions: Vec<(PathBuf, ast::schema::UnionTypeExtension)>,
}

impl UnionTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }

    fn append_members(
        members: &mut IndexMap<String, loc::SourceLocation>,
        location: &loc::SourceLocation,
        union_name: &str,
        member_names: &[String],
    ) -> Result<()> {
        for member_name in member_names {
            // https://spec.graphql.org/October2021/#sel-HAHdfFBABAB6Bw5R
            if members.contains_key(member_name) {
                return Err(SchemaBuildError::DuplicateUnionMember {
                    location: location.to_owned(),
                    member_name: member_name.to_string(),
                    type_name: union_name.to_string(),
                });
            }
            members.insert(member_name.to_string(), location.to_owned());
        }
        Ok(())
    }

    fn merge_into_types_map(
        types_builder: &mut TypesMapBuilder,
        file_path: &Path,
        ext: ast::schema::UnionTypeExtension,
    ) -> Result<()> {
        let ext_loc: loc::SourceLocation =
            loc::FilePosition::from_pos(file_path, ext.position).into();
        match types_builder.get_type_mut(ext.name.as_str()) {
            Some(GraphQLType::Union(union_type)) => {
                union_type.directives.append(&mut DirectiveAnnotation::from_ast(
                    &ext_loc,
                    &ext.directives,
                ));
                Self::append_members(
                    &mut union_type.members,
                    &ext_loc,
                    ext.name.as_str(),
                    &ext.types,
                )
            },

            Some(non_union_type) => Err(SchemaBuildError::InvalidExtensionType {
                actual_kind: non_union_type.kind(),
                expected_kind: GraphQLTypeKind::Union,
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
impl TypeBuilder for UnionTypeBuilder {
    type AstTypeDef = ast::schema::UnionType;
    type AstTypeExtension = ast::schema::UnionTypeExtension;

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
        def: ast::schema::UnionType,
    ) -> Result<()> {
        let def_location: loc::SourceLocation =
            loc::FilePosition::from_pos(file_path, def.position).into();

        let mut members = IndexMap::new();
        Self::append_members(
            &mut members,
            &def_location,
            def.name.as_str(),
            &def.types,
        )?;

        types_builder.add_new_type(
            def.name.as_str(),
            &def_location,
            GraphQLType::Union(Box::new(UnionType {
                description: def.description.to_owned(),
                directives: DirectiveAnnotation::from_ast(
                    &def_location,
                    &def.directives,
                ),
                members,
                name: def.name.to_string(),
                def_location: def_location.to_owned(),
            })),
        )
    }

    pub(crate) fn visit_type_extension(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: &Path,
        ext: ast::schema::UnionTypeExtension,
    ) -> Result<()> {
        if types_builder.get_type(ext.name.as_str()).is_none() {
            self.extensions.push((file_path.to_path_buf(), ext));
            return Ok(());
        }
        Self::merge_into_types_map(types_builder, file_path, ext)
    }
}

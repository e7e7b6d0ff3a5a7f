use crate::ast;
use crate::loc;
use crate::types::InputValue;
use crate::types::TypeRef;
use indexmap::IndexMap;

/// The places in a document where a directive may be applied.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DirectiveLocation {
    ArgumentDefinition,
    Enum,
    EnumValue,
    Field,
    FieldDefinition,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    InputFieldDefinition,
    InputObject,
    Interface,
    Mutation,
    Object,
    Query,
    Scalar,
    Schema,
    Subscription,
    Union,
    VariableDefinition,
}
impl DirectiveLocation {
    pub(crate) fn from_ast(ast_loc: &ast::schema::DirectiveLocation) -> Self {
        use ast::schema::DirectiveLocation as AstLoc;
        match ast_loc {
            AstLoc::ArgumentDefinition => Self::ArgumentDefinition,
            AstLoc::Enum => Self::Enum,
            AstLoc::EnumValue => Self::EnumValue,
            AstLoc::Field => Self::Field,
            AstLoc::FieldDefinition => Self::FieldDefinition,
            AstLoc::FragmentDefinition => Self::FragmentDefinition,
            AstLoc::FragmentSpread => Self::FragmentSpread,
            AstLoc::InlineFragment => Self::InlineFragment,
            AstLoc::InputFieldDefinition => Self::InputFieldDefinition,
            AstLoc::InputObject => Self::InputObject,
            AstLoc::Interface => Self::Interface,
            AstLoc::Mutation => Self::Mutation,
            AstLoc::Object => Self::Object,
            AstLoc::Query => Self::Query,
            AstLoc::Scalar => Self::Scalar,
            AstLoc::Schema => Self::Schema,
            AstLoc::Subscription => Self::Subscription,
            AstLoc::Union => Self::Union,
            AstLoc::VariableDefinition => Self::VariableDefinition,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ArgumentDefinition => "ARGUMENT_DEFINITION",
            Self::Enum => "ENUM",
            Self::EnumValue => "ENUM_VALUE",
            Self::Field => "FIELD",
            Self::FieldDefinition => "FIELD_DEFINITION",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
            Self::InputObject => "INPUT_OBJECT",
            Self::Interface => "INTERFACE",
            Self::Mutation => "MUTATION",
            Self::Object => "OBJECT",
            Self::Query => "QUERY",
            Self::Scalar => "SCALAR",
            Self::Schema => "SCHEMA",
            Self::Subscription => "SUBSCRIPTION",
            Self::Union => "UNION",
            Self::VariableDefinition => "VARIABLE_DEFINITION",
        }
    }
}
impl std::fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directive definition: either one of the built-in directives or one
/// declared with `directive @name(...) on ...` in a schema document.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) locations: Vec<DirectiveLocation>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, InputValue>,
    pub(crate) repeatable: bool,
}
impl Directive {
    fn builtin(
        name: &str,
        description: &str,
        parameters: Vec<(&str, TypeRef, Option<ast::query::Value>)>,
        locations: Vec<DirectiveLocation>,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            description: Some(description.to_string()),
            locations,
            name: name.to_string(),
            parameters: parameters.into_iter().map(|(param_name, type_ref, default_value)| (
                param_name.to_string(),
                InputValue {
                    def_location: loc::SourceLocation::GraphQLBuiltIn,
                    default_value,
                    description: None,
                    directives: vec![],
                    name: param_name.to_string(),
                    type_ref,
                },
            )).collect(),
            repeatable: false,
        }
    }

    pub(crate) fn builtin_deprecated() -> Self {
        Self::builtin(
            "deprecated",
            "Marks an element of a GraphQL schema as no longer supported.",
            vec![(
                "reason",
                TypeRef::named("String"),
                Some(ast::query::Value::String("No longer supported".to_string())),
            )],
            vec![
                DirectiveLocation::ArgumentDefinition,
                DirectiveLocation::EnumValue,
                DirectiveLocation::FieldDefinition,
                DirectiveLocation::InputFieldDefinition,
            ],
        )
    }

    pub(crate) fn builtin_include() -> Self {
        Self::builtin(
            "include",
            "Directs the executor to include this field or fragment only when \
            the `if` argument is true.",
            vec![("if", TypeRef::non_null(TypeRef::named("Boolean")), None)],
            vec![
                DirectiveLocation::Field,
                DirectiveLocation::FragmentSpread,
                DirectiveLocation::InlineFragment,
            ],
        )
    }

    pub(crate) fn builtin_skip() -> Self {
        Self::builtin(
            "skip",
            "Directs the executor to skip this field or fragment when the `if` \
            argument is true.",
            vec![("if", TypeRef::non_null(TypeRef::named("Boolean")), None)],
            vec![
                DirectiveLocation::Field,
                DirectiveLocation::FragmentSpread,
                DirectiveLocation::InlineFragment,
            ],
        )
    }

    pub(crate) fn builtin_specified_by() -> Self {
        Self::builtin(
            "specifiedBy",
            "Exposes a URL that specifies the behavior of this scalar.",
            vec![("url", TypeRef::non_null(TypeRef::named("String")), None)],
            vec![DirectiveLocation::Scalar],
        )
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.def_location, loc::SourceLocation::GraphQLBuiltIn)
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    pub fn locations(&self) -> &[DirectiveLocation] {
        &self.locations
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameters(&self) -> &IndexMap<String, InputValue> {
        &self.parameters
    }
}

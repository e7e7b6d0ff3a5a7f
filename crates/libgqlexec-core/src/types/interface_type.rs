use crate::types::ObjectOrInterfaceTypeData;

/// An interface type along with the set of object types that implement it.
///
/// The implementer set is computed once, after every definition in the
/// schema is known; it lists object types in definition order.
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType {
    pub(crate) data: ObjectOrInterfaceTypeData,
    pub(crate) implementers: Vec<String>,
}
impl InterfaceType {
    pub fn implementer_names(&self) -> &[String] {
        &self.implementers
    }
}
impl std::ops::Deref for InterfaceType {
    type Target = ObjectOrInterfaceTypeData;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

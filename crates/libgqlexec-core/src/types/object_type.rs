use crate::types::ObjectOrInterfaceTypeData;

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType(pub(crate) ObjectOrInterfaceTypeData);
impl std::ops::Deref for ObjectType {
    type Target = ObjectOrInterfaceTypeData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

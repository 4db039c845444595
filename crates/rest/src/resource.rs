use crate::representation::Representation;

/// Something that can be represented in one or more variants, e.g. the same
/// document in several media types or languages.
#[cfg_attr(test, mockall::automock)]
pub trait Resource {
    /// All the variants of the resource, in order of server preference
    fn variants(&self) -> Vec<Representation>;
}

impl Resource for [Representation] {
    fn variants(&self) -> Vec<Representation> {
        self.to_vec()
    }
}

impl Resource for Vec<Representation> {
    fn variants(&self) -> Vec<Representation> {
        self.clone()
    }
}

/// A vault secret as returned by the tag-filtered listing. The name doubles
/// as the CircleCI context name by convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretDescriptor {
    pub name: String,
    pub tags: Vec<String>,
}

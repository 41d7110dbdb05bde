use crate::define_index_newtype;

define_index_newtype!(ProductIdx, Product);

#[derive(Debug, Clone)]
pub struct Product {
    external_id: String,
}

impl Product {
    pub fn new(external_id: impl Into<String>) -> Self {
        Product {
            external_id: external_id.into(),
        }
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }
}

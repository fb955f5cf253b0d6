use crate::{Attributes, Model, Scalar};

/// A product tax category.
#[derive(Debug, Clone, Model)]
pub struct Category {
    attributes: Attributes,
    name: Scalar,
    product_tax_code: Scalar,
    description: Scalar,
}

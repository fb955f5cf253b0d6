use super::Breakdown;
use crate::{Attributes, Model, Object, Scalar};

/// Sales tax calculated for an order.
#[derive(Debug, Clone, Model)]
pub struct Tax {
    attributes: Attributes,
    order_total_amount: Scalar,
    shipping: Scalar,
    taxable_amount: Scalar,
    amount_to_collect: Scalar,
    rate: Scalar,
    has_nexus: Scalar,
    freight_taxable: Scalar,
    tax_source: Scalar,
    exemption_type: Scalar,
    jurisdictions: Object<Jurisdictions>,
    breakdown: Object<Breakdown>,
}

/// Jurisdiction names the tax was calculated for.
#[derive(Debug, Clone, Model)]
pub struct Jurisdictions {
    attributes: Attributes,
    country: Scalar,
    state: Scalar,
    county: Scalar,
    city: Scalar,
}

use crate::{Attributes, Model, Scalar};

/// Sales tax rates for a location.
///
/// US responses fill the state/county/city fields, EU and Canadian responses
/// the country and VAT fields; the rest come back absent.
#[derive(Debug, Clone, Model)]
pub struct Rate {
    attributes: Attributes,
    zip: Scalar,
    state: Scalar,
    state_rate: Scalar,
    county: Scalar,
    county_rate: Scalar,
    city: Scalar,
    city_rate: Scalar,
    combined_district_rate: Scalar,
    combined_rate: Scalar,
    freight_taxable: Scalar,
    country: Scalar,
    name: Scalar,
    country_rate: Scalar,
    standard_rate: Scalar,
    reduced_rate: Scalar,
    super_reduced_rate: Scalar,
    parking_rate: Scalar,
    distance_sale_threshold: Scalar,
}

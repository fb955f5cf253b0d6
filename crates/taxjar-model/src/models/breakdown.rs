use crate::{Attributes, Collection, Model, Object, Scalar};

/// Per-jurisdiction breakdown of a tax calculation.
///
/// US orders fill the state/county/city/special district fields, Canadian
/// orders GST/PST/QST, other countries the country fields.
#[derive(Debug, Clone, Model)]
pub struct Breakdown {
    attributes: Attributes,
    taxable_amount: Scalar,
    tax_collectable: Scalar,
    combined_tax_rate: Scalar,
    state_taxable_amount: Scalar,
    state_tax_rate: Scalar,
    state_tax_collectable: Scalar,
    county_taxable_amount: Scalar,
    county_tax_rate: Scalar,
    county_tax_collectable: Scalar,
    city_taxable_amount: Scalar,
    city_tax_rate: Scalar,
    city_tax_collectable: Scalar,
    special_district_taxable_amount: Scalar,
    special_tax_rate: Scalar,
    special_district_tax_collectable: Scalar,
    country_taxable_amount: Scalar,
    country_tax_rate: Scalar,
    country_tax_collectable: Scalar,
    gst_taxable_amount: Scalar,
    gst_tax_rate: Scalar,
    gst: Scalar,
    pst_taxable_amount: Scalar,
    pst_tax_rate: Scalar,
    pst: Scalar,
    qst_taxable_amount: Scalar,
    qst_tax_rate: Scalar,
    qst: Scalar,
    shipping: Object<Shipping>,
    line_items: Collection<BreakdownLineItem>,
}

/// Tax on the shipping charge.
#[derive(Debug, Clone, Model)]
pub struct Shipping {
    attributes: Attributes,
    taxable_amount: Scalar,
    tax_collectable: Scalar,
    combined_tax_rate: Scalar,
    state_taxable_amount: Scalar,
    state_sales_tax_rate: Scalar,
    state_amount: Scalar,
    county_taxable_amount: Scalar,
    county_tax_rate: Scalar,
    county_amount: Scalar,
    city_taxable_amount: Scalar,
    city_tax_rate: Scalar,
    city_amount: Scalar,
    special_taxable_amount: Scalar,
    special_tax_rate: Scalar,
    special_district_amount: Scalar,
    country_taxable_amount: Scalar,
    country_tax_rate: Scalar,
    country_tax_collectable: Scalar,
    gst_taxable_amount: Scalar,
    gst_tax_rate: Scalar,
    gst: Scalar,
    pst_taxable_amount: Scalar,
    pst_tax_rate: Scalar,
    pst: Scalar,
    qst_taxable_amount: Scalar,
    qst_tax_rate: Scalar,
    qst: Scalar,
}

/// Tax on a single order line.
#[derive(Debug, Clone, Model)]
pub struct BreakdownLineItem {
    attributes: Attributes,
    id: Scalar,
    taxable_amount: Scalar,
    tax_collectable: Scalar,
    combined_tax_rate: Scalar,
    state_taxable_amount: Scalar,
    state_sales_tax_rate: Scalar,
    state_amount: Scalar,
    county_taxable_amount: Scalar,
    county_tax_rate: Scalar,
    county_amount: Scalar,
    city_taxable_amount: Scalar,
    city_tax_rate: Scalar,
    city_amount: Scalar,
    special_district_taxable_amount: Scalar,
    special_tax_rate: Scalar,
    special_district_amount: Scalar,
    country_taxable_amount: Scalar,
    country_tax_rate: Scalar,
    country_tax_collectable: Scalar,
    gst_taxable_amount: Scalar,
    gst_tax_rate: Scalar,
    gst: Scalar,
    pst_taxable_amount: Scalar,
    pst_tax_rate: Scalar,
    pst: Scalar,
    qst_taxable_amount: Scalar,
    qst_tax_rate: Scalar,
    qst: Scalar,
}

//! DigiKey product search v4 wire types
//!
//! Request and response shapes for the `/products/v4/search/keyword`
//! endpoint. Field names and optionality mirror the DigiKey contract
//! exactly; request types drop `None` fields when serialized, response
//! types accept sparse payloads.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Request side
// ---------------------------------------------------------------------------

/// A single filter id selected from a prior response's FilterOptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilterId {
    /// The Id of the filter
    pub id: String,
}

/// Filter values for one parametric parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParametricCategory {
    pub parameter_id: i64,
    pub filter_values: Vec<FilterId>,
}

/// Parametric filter request: optional category plus per-parameter values
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParameterFilterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_filter: Option<FilterId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_filters: Option<Vec<ParametricCategory>>,
}

/// Field in the response to sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    None,
    Packaging,
    ProductStatus,
    DigiKeyProductNumber,
    ManufacturerProductNumber,
    Manufacturer,
    MinimumQuantity,
    QuantityAvailable,
    Price,
    Supplier,
    PriceManufacturerStandardPackage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SortOptions {
    pub field: SortField,
    pub sort_order: SortOrder,
}

/// Marketplace inclusion mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketPlaceFilter {
    NoFilter,
    ExcludeMarketPlace,
    MarketPlaceOnly,
}

/// Boolean search flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOption {
    ChipOutpost,
    Has3DModel,
    HasCadModel,
    HasDatasheet,
    HasProductPhoto,
    InStock,
    NewProduct,
    NonRohsCompliant,
    NormallyStocking,
    RohsCompliant,
}

/// The full filter set applied to one keyword search.
///
/// Immutable once constructed: either absent (the seed search) or a
/// complete replacement proposed by the model for the next round.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilterOptionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_filter: Option<Vec<FilterId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_filter: Option<Vec<FilterId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_filter: Option<Vec<FilterId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging_filter: Option<Vec<FilterId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_place_filter: Option<MarketPlaceFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_filter: Option<Vec<FilterId>>,
    /// Minimum available quantity for a result to display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_quantity_available: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_filter_request: Option<ParameterFilterRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_options: Option<Vec<SearchOption>>,
}

/// Body of the keyword search POST
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeywordRequest {
    /// A string of keywords, up to 250 characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    /// Number of products to return, between 1 and 50
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Starting index for paginating beyond the first page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_options_request: Option<FilterOptionsRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_options: Option<SortOptions>,
}

// ---------------------------------------------------------------------------
// Response side
// ---------------------------------------------------------------------------

/// A filter value that can narrow the next search request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BaseFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Manufacturer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CategoryNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    /// Id of the parent category, when this is a child category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_product_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    /// Children of this category; their ParentId is this CategoryId
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_categories: Option<Vec<CategoryNode>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Series {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Classifications {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reach_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rohs_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moisture_sensitivity_level: Option<String>,
    /// Export control class number (U.S. Department of Commerce)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_control_class_number: Option<String>,
    /// Harmonized Tariff Schedule of the United States code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub htsus_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BaseProduct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PriceBreak {
    /// The quantity at which the price takes effect
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Parameter data type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterType {
    String,
    Integer,
    Double,
    UnitOfMeasure,
    CoupledUnitOfMeasure,
    RangeUnitOfMeasure,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParameterValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_type: Option<ParameterType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Description {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Supplier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One orderable variation (package type) of a product
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductVariation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digi_key_product_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_type: Option<PackageType>,
    /// Standard pricing for the validated locale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_pricing: Option<Vec<PriceBreak>>,
    /// Pricing for the authenticated account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_pricing: Option<Vec<PriceBreak>>,
    /// Marketplace product that ships direct from the supplier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_place: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tariff_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<Supplier>,
    #[serde(
        rename = "QuantityAvailableforPackageType",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity_available_for_package_type: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_quantity_for_distribution: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_order_quantity: Option<i64>,
    /// Product count in the manufacturer's standard package
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_package: Option<i64>,
    /// Fee per reel ordered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digi_reel_fee: Option<f64>,
}

/// A matched product
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<Manufacturer>,
    /// Manufacturer part number; may be reused across manufacturers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_product_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    /// Full URL of the DigiKey catalog page for the product
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasheet_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_variations: Option<Vec<ProductVariation>>,
    /// Sum of quantities across all package types in ProductVariations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_available: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_status: Option<ProductStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_order_not_allowed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normally_stocking: Option<bool>,
    /// No longer sold at DigiKey and will no longer be stocked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discontinued: Option<bool>,
    /// No longer manufactured; stocked only until depletion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_of_life: Option<bool>,
    /// Non-cancellable and non-returnable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ncnr: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_product_number: Option<BaseProduct>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryNode>,
    /// Last purchasable date, ISO 8601
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_last_buy_chance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_lead_weeks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_public_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Series>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifications: Option<Classifications>,
}

/// Filter range type for parametric filter values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeFilterType {
    Min,
    Max,
    Range,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilterValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_filter_type: Option<RangeFilterType>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParameterFilterOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<BaseFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_values: Option<Vec<FilterValue>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TopCategoryNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TopCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_category: Option<TopCategoryNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<TopCategoryNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Filter values legal to apply on the next search request.
///
/// Valid for the immediately following request only; a refinement
/// round must draw its filter ids from the latest response's block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilterOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturers: Option<Vec<BaseFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging: Option<Vec<BaseFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<BaseFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<BaseFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parametric_filters: Option<Vec<ParameterFilterOptions>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_categories: Option<Vec<TopCategory>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_place_filters: Option<Vec<MarketPlaceFilter>>,
}

/// Locale actually used for the API call; may differ from the request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IsoSearchLocale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppliedParametricFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

/// Response body of one keyword search call
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeywordResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
    /// Total number of matching products found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_matches: Option<Vec<Product>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_options: Option<FilterOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_locale_used: Option<IsoSearchLocale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_parametric_filters_dto: Option<Vec<AppliedParametricFilter>>,
}

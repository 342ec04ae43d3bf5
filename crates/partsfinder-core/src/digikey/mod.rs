//! DigiKey product search API integration

pub mod client;
pub mod schema;

pub use client::{DigiKeyClient, PartSearch, SEARCH_RESULT_LIMIT};
pub use schema::{
    AppliedParametricFilter, BaseFilter, FilterId, FilterOptions, FilterOptionsRequest,
    FilterValue, IsoSearchLocale, KeywordRequest, KeywordResponse, MarketPlaceFilter,
    ParameterFilterOptions, ParameterFilterRequest, ParametricCategory, Product, SearchOption,
    SortField, SortOptions, SortOrder, TopCategory,
};

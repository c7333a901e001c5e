mod detail;
mod pagination_bar;
mod table;

pub use detail::DetailPanel;
pub use pagination_bar::PaginationBar;
pub use table::CatalogTable;

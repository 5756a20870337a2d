//! DataTable Component
//!
//! A reusable data table with row selection support.

pub mod column;
pub mod data_table;
pub mod pagination;

pub use column::Column;
pub use data_table::DataTable;
pub use pagination::Pagination;

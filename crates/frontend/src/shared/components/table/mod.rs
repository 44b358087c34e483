pub mod data_table;
pub mod number_format;
pub mod table_cell_checkbox;
pub mod table_cell_image;
pub mod table_header_checkbox;

pub use data_table::{Column, DataTable, RowActions, RowSelection};
pub use number_format::*;
pub use table_cell_checkbox::TableCellCheckbox;
pub use table_cell_image::image_cell;
pub use table_header_checkbox::TableHeaderCheckbox;

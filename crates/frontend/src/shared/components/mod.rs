pub mod confirm_dialog;
pub mod date_input;
pub mod delete_dialog;
pub mod filter_panel;
pub mod form_fields;
pub mod list_header;
pub mod loading_spinner;
pub mod pagination_controls;
pub mod project_select;
pub mod row_actions;
pub mod searchable_select;
pub mod table;

pub use confirm_dialog::ConfirmDialog;
pub use date_input::DateInput;
pub use delete_dialog::{DeleteDialog, DeleteTarget};
pub use filter_panel::{FilterFields, FilterPanel};
pub use form_fields::{FieldGroup, FormField, ReadonlyField};
pub use list_header::ListHeader;
pub use loading_spinner::LoadingSpinner;
pub use pagination_controls::PaginationControls;
pub use project_select::ProjectSelect;
pub use row_actions::RowActionButtons;
pub use searchable_select::{SearchableSelect, SelectOption};

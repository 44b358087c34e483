pub mod errors;
pub mod form;
pub mod list;
pub mod mutation;
pub mod pagination;
pub mod query;
pub mod reference;
pub mod uploads;

pub use errors::{EnvelopeError, RequestError, ValidationError};
pub use form::FormModel;
pub use list::{Exportable, ListResource, Page};
pub use pagination::PageCursor;

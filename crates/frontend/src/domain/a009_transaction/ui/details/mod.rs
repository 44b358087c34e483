mod view;
pub use view::TransactionDetails;

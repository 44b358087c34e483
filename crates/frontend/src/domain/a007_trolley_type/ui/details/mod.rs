mod view;
pub use view::TrolleyTypeDetails;

mod view;
pub use view::TrolleyDetails;

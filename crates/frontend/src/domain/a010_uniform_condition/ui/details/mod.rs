mod view;
pub use view::UniformConditionDetails;

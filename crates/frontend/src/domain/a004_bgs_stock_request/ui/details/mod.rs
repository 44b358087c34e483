mod view;

pub use view::BgsStockRequestDetails;

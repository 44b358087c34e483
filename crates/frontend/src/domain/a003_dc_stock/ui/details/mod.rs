mod view;

pub use view::DcStockDetails;

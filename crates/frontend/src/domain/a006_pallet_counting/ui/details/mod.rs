mod view;

pub use view::PalletCountingDetails;

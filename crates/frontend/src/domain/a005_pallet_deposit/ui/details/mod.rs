mod view;

pub use view::PalletDepositDetails;

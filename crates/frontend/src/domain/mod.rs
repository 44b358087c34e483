pub mod a001_employee;
pub mod a002_uniform;
pub mod a003_dc_stock;
pub mod a004_bgs_stock_request;
pub mod a005_pallet_deposit;
pub mod a006_pallet_counting;
pub mod a007_trolley_type;
pub mod a008_trolley;
pub mod a009_transaction;
pub mod a010_uniform_condition;

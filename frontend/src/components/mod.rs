pub mod create_fee_dialog;
pub mod month_select;

pub mod use_fee_form;

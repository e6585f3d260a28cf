pub mod dynamic_form;
pub mod format;
pub mod master_data;

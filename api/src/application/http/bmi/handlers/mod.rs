pub mod bmi_form;
pub mod compute_bmi;

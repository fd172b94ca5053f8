//! Page components

mod multi_form;

pub use multi_form::MultiForm;

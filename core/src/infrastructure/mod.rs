pub mod pdf;
pub mod reference;
pub mod template;

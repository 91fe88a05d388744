pub mod motion;
pub mod style;
pub mod validate;

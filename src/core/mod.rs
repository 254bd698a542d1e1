pub mod catalog;
pub mod finder;
pub mod logging;

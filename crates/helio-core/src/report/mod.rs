//! HelioScope report field extraction.

mod parser;
pub mod rules;
pub mod view;

pub use parser::{HelioscopeParser, ReportParser};

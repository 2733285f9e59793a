//! Generates a seed dataset for the survey service and renders it as a SQL
//! script of `INSERT` statements.

pub mod catalog;
pub mod config;
pub mod error;
pub mod generate;
pub mod output;
pub mod records;
pub mod sql;
pub mod test;
pub mod validation;

pub use error::GenerateError;
pub use generate::Generator;
pub use records::Dataset;

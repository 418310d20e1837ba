#![deny(missing_docs)]
#![doc = "Closed-form generator for anomaly-free integer sets, after arXiv:1905.13729."]

pub mod errors;
mod generate;
mod parse;
mod reduce;

pub use errors::{AnomalyError, ErrorInfo};
pub use generate::{generate, GenerateOpts};
pub use parse::parse_int_list;
pub use reduce::{gcd_reduce, solve, Solution};

//! sting-data - C4.5 dataset parsing
//!
//! Reads datasets stored as a `<name>.names` schema file plus a matching
//! `<name>.data` records file into typed, numeric form:
//!
//! - **Features**: BINARY, NOMINAL and CONTINUOUS columns with a canonical
//!   float encoding and its inverse
//! - **Schema**: ordered features parsed from the `.names` file
//! - **Dataset**: feature matrix `x` (NaN for missing values) and 0/1
//!   label vector `y`
//!
//! # Example
//!
//! ```no_run
//! let dataset = sting_data::parse_c45("example", "data")?;
//! let (schema, x, y) = dataset.into_parts();
//! assert_eq!(x.ncols(), schema.len());
//! assert_eq!(x.nrows(), y.len());
//! # Ok::<(), sting_data::C45Error>(())
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod feature;
pub mod locate;
pub mod parser;
pub mod schema;

pub use config::*;
pub use dataset::*;
pub use error::*;
pub use feature::*;
pub use locate::*;
pub use parser::*;
pub use schema::*;

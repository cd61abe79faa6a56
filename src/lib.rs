//! A byte count value type that rounds to binary (1024-based) or decimal
//! (1000-based) magnitudes and renders itself with unit suffixes.
//!
//! ```
//! use byteunits::units::{ByteCount, FormatDirective, Verb};
//!
//! let size = ByteCount(2001);
//! assert_eq!(size.ceil().to_string(), "2kiB");
//! assert_eq!(format!("{:#}", size.decimal_ceil()), "3kB");
//!
//! let fixed = FormatDirective::new(Verb::Fixed).precision(3);
//! assert_eq!(ByteCount(1025).ceil().format(&fixed), "2.000kiB");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod units;

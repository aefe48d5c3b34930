//! A typed-parameter, POSIX-style command line declaration and parsing library.
//!
//! Declare strongly typed parameters (options and positional arguments), parse
//! raw process tokens against them, and read the validated values back out:
//!
//! ```
//! use argot::{CommandLine, IntParam, StringParam};
//!
//! let mut count = IntParam::new("count", "the number of times to repeat")
//!     .unwrap()
//!     .min(1)
//!     .unwrap()
//!     .max(10)
//!     .unwrap();
//! let mut target = StringParam::new("target", "the file to repeat").unwrap();
//!
//! let mut command_line = CommandLine::new("repeater");
//! command_line.add_option(&mut count).unwrap();
//! command_line.add_argument(&mut target).unwrap();
//! command_line.parse_tokens(&["-count", "5", "out.txt"]).unwrap();
//! drop(command_line);
//!
//! assert_eq!(count.value(), Some(&5));
//! assert_eq!(target.value().map(String::as_str), Some("out.txt"));
//! ```
//!
//! Parsing never terminates the process; every failure is surfaced as a
//! [`ParseError`] for the caller to act on.
#![deny(missing_docs)]
mod constant;
mod error;
mod param;
mod parser;

pub use error::*;
pub use param::*;
pub use parser::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

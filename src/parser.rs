//! The POSIX-style command line: parameter registration, token parsing, and
//! usage rendering.
mod command_line;
mod posix;
mod usage;

pub use command_line::CommandLine;
pub use posix::PosixParser;

mod boolean;
mod core;
mod date;
mod date_time;
mod file;
mod int;
mod string;
mod time;

pub use boolean::{BoolSpec, BooleanParam};
pub use self::core::{Param, Parameter, ValueSpec};
pub use date::{DateParam, DateSpec};
pub use date_time::{DateTimeParam, DateTimeSpec};
pub use file::{FileAttributes, FileParam, FileSpec};
pub use int::{IntParam, IntSpec};
pub use string::{StrSpec, StringParam};
pub use time::{TimeParam, TimeSpec};

pub(crate) const MINIMUM_DESC_LENGTH: usize = 5;

pub(crate) const TRUE_TOKENS: [&str; 2] = ["true", "yes"];
pub(crate) const FALSE_TOKENS: [&str; 2] = ["false", "no"];

pub(crate) const DEFAULT_DATE_FORMAT: &str = "%m/%d/%y";
pub(crate) const TIME_FORMAT_DISPLAY: &str = "HH:mm[:ss[:SSS]]";

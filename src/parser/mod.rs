mod strings;

pub use strings::{StringEntry, StringsParser};

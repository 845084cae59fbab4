#[macro_use]
extern crate lazy_static;

#[macro_use]
pub mod log;
pub mod error;
pub mod pcf;
pub mod pin_table;
pub mod scanner;

pub use crate::error::Error;
pub use crate::pcf::PCF_FILE_NAME;
pub use crate::pin_table::{AliasEntry, PinTable};
pub use crate::scanner::{convert, convert_file, parse_directive, ConvertStats, MapDirective};

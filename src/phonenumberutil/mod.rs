mod helper_constants;
mod helper_functions;
pub mod errors;
pub mod enums;
pub mod phonenumberutil;
mod phone_number_regexps_and_mappings;
pub(self) mod helper_types;
pub(self) mod comparisons;
pub(self) mod field_handlers;
pub(self) mod parser;
pub(crate) mod numbering_plan;
pub(crate) mod region_locator;
pub(crate) mod state_table;
pub(crate) mod region_data;
pub(crate) mod parsed_number;
pub(crate) mod formatter;
pub(crate) mod normalizer;

use std::sync::LazyLock;

pub use enums::{DialingStyle, Field, Handler, NetworkType};
pub use errors::{LoadError, ParseError, TableError};
pub use formatter::{FormatStyle, FormatStyles, RawFormatStyle, Template};
pub use normalizer::NormalizeOptions;
pub use numbering_plan::{FieldLengths, NumberingPlan};
pub use parsed_number::ParsedNumber;
pub use region_data::{RegionData, RegionRecord};
pub use region_locator::{LocatorRecord, RegionLocator};
pub use state_table::{DigitClass, Node, RawNode, StateTable};
use crate::phonenumberutil::phonenumberutil::PhoneNumberUtil;

pub static PHONE_NUMBER_UTIL: LazyLock<PhoneNumberUtil> = LazyLock::new(|| {
    PhoneNumberUtil::new()
});

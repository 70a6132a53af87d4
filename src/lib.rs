mod interfaces;
/// Region data compiled in from /resources/*.json
mod metadata;
mod phonenumberutil;
mod region_data_cache;
pub mod i18n;
pub(crate) mod string_util;

/// I decided to create this module because there are many
/// boilerplate places in the code that can be replaced with macros,
/// the name of which will describe what is happening more
/// clearly than a few lines of code.
mod macros;

pub use interfaces::DataLoader;
pub use metadata::JsonLoader;
pub use phonenumberutil::{
    DialingStyle, DigitClass, Field, FieldLengths, FormatStyle, FormatStyles, Handler,
    LoadError, LocatorRecord, NetworkType, Node, NormalizeOptions, NumberingPlan,
    PHONE_NUMBER_UTIL, ParseError, ParsedNumber, RawFormatStyle, RawNode, RegionData,
    RegionLocator, RegionRecord, StateTable, TableError, Template,
    phonenumberutil::{PhoneNumberUtil, Result},
};
pub use region_data_cache::RegionDataCache;

#[cfg(test)]
mod tests;

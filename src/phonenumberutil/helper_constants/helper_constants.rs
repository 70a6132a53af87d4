/// Synthetic character put in front of every new number so that tables can
/// anchor patterns to the beginning of the number.
pub const START_MARKER: char = '^';
/// Data spelling of the wildcard digit class.
pub const WILDCARD_KEY: &'static str = "?";

pub const PLUS_SIGN: &'static str = "+";
pub const RFC3966_PREFIX: &'static str = "tel:";

// Characters that end the digits of a subscriber number. Everything from the
// first of these on is the extension, or a dialing sequence after a pause.
pub const EXTENSION_SEPARATORS: &'static [char] = &['x', 'X', 'w', 'W', 't', 'T', 'p', 'P', ',', ';'];
// Only these are pure markers and are dropped from the stored extension.
pub const EXTENSION_MARKERS: &'static [char] = &['x', 'X'];

pub const DEFAULT_TRUNK_CODE: &'static str = "0";
pub const DEFAULT_IDD_CODE: &'static str = "00";
pub const DEFAULT_STYLE: &'static str = "default";
pub const DEFAULT_EXTN_PREFIX: &'static str = " x";

// Guard against data that keeps bouncing between countries.
pub const MAX_REGION_SWITCHES: usize = 4;

pub const US_REGION: &'static str = "US";
pub const US_IDD_CODE: &'static str = "011";
pub const NANPA_COUNTRY_CODE: u16 = 1;

// Matcher penalties, in percent of the remaining score. A full penalty
// always brings the score down to 0.
pub const FULL_PENALTY: u32 = 100;
pub const COUNTRY_CODE_MISSING_PENALTY: u32 = 10;
pub const SERVICE_CODE_MISSING_PENALTY: u32 = 20;
pub const MOBILE_PREFIX_MISSING_PENALTY: u32 = 20;
pub const AREA_CODE_MISSING_PENALTY: u32 = 25;

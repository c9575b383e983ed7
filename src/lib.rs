pub mod locale;
pub mod normalize;
pub mod parse;
pub mod pattern;
pub mod types;

// Re-export the main API
pub use locale::{locale_number_config, supported_locales};
pub use parse::{parse_number, parse_number_with, NumberParser};
pub use types::*;

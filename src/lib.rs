pub mod error;
pub mod filter;

pub use error::FilterError;
pub use filter::{
    CodeFilter, DupeFilter, FilterMode, FilterStats, LineFilter, filter_file, filter_reader,
    filter_str, is_code, signature,
};

//! Formatting-authority adapters.

pub mod masking;
pub mod recording;
pub mod style;

pub use masking::MaskingAuthority;
pub use recording::{ConstAuthority, ConstFormatter, RecordingAuthority};
pub use style::StyleAuthority;

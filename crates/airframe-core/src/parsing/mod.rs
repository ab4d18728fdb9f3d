pub mod normalize;
pub mod units;
pub mod values;

pub use normalize::{clean_text, normalize_label};
pub use units::Unit;

pub mod sample;
pub mod unit;
pub mod view;

pub use sample::Sample;
pub use unit::UnitKind;
pub use view::{CheckerView, Stability, UnitReading};

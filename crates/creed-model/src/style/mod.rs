mod label;
pub use label::LabelStyle;

mod palette;
pub use palette::Palette;

mod axis_layout;

pub use axis_layout::{AxisLayout, Segment};

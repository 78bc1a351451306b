pub mod color;
pub mod data_model;
pub mod params;
pub mod segment;

pub use color::{parse_color, SegmentColor};
pub use data_model::{Frame, Layout, SegmentRecord};
pub use params::{ParamKind, Params};
pub use segment::{PixelRect, Segment, SegmentRegistry};

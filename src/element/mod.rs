mod annotation_box;
mod common;
mod guide;

pub use annotation_box::AnnotationBox;
pub use common::{
    BoxId, DEFAULT_BOX_HEIGHT, DEFAULT_BOX_WIDTH, GuideId, MIN_BOX_HEIGHT, MIN_BOX_WIDTH,
};
pub use guide::{GuideLine, Orientation};

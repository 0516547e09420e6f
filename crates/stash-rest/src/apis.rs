pub mod metadata {
    pub use crate::metadata::metadata_scan;
}

pub mod performers {
    pub use crate::performers::find_performers;
}

pub mod scenes {
    pub use crate::scenes::find_scenes;
}

pub mod tags {
    pub use crate::tags::{create_tag, find_tag_by_name};
}

pub extern crate hitpath_algorithms;
pub extern crate hitpath_geom;
pub extern crate hitpath_path;

pub use hitpath_algorithms as algorithms;
pub use hitpath_geom as geom;
pub use hitpath_path as path;

pub use hitpath_path::math;

// Group domain module
// A group is identified solely by its name

pub mod value_objects;

pub use value_objects::GroupName;

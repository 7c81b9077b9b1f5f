pub mod floor;

pub use floor::Floor;

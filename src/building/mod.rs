pub mod building;

pub use building::Building;
pub use building::FloorHandle;
pub use building::LiftHandle;

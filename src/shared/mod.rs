pub mod macros;
pub mod structs;

pub use structs::AckSender;
pub use structs::Event;
pub use structs::SHUTDOWN;
pub use structs::START_FLOOR;

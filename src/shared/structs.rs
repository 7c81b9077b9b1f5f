/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/

/// Sentinel destination that shuts an actor down when sent to its
/// primary input channel.
pub const SHUTDOWN: i32 = -1;

/// Every cabin starts here. Floors are numbered from 1.
pub const START_FLOOR: i32 = 1;

/// Single-use acknowledgment handle. A lift creates a rendezvous pair
/// per arrival, hands the sender to the floor, and blocks on the
/// receiver until the floor closes its doors.
pub type AckSender = cbc::Sender<()>;

/// Trace events emitted by the actors. Informational only; emission
/// never blocks an actor.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    LiftCalled { lift: i32, destination: i32 },
    LiftArrived { lift: i32, floor: i32 },
    FloorCalled { floor: i32, lift: i32 },
    DoorsOpened { floor: i32 },
    DoorsClosed { floor: i32 },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Event::LiftCalled { lift, destination } => {
                write!(f, "lift {} has been called to floor {}", lift, destination)
            }
            Event::LiftArrived { lift, floor } => {
                write!(f, "lift {} has arrived at floor {}", lift, floor)
            }
            Event::FloorCalled { floor, lift } => {
                write!(f, "floor {} is calling lift {}", floor, lift)
            }
            Event::DoorsOpened { floor } => {
                write!(f, "doors are opening on floor {}", floor)
            }
            Event::DoorsClosed { floor } => {
                write!(f, "doors are closing on floor {}", floor)
            }
        }
    }
}

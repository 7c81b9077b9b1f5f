use crate::shared::{AckSender, Event, START_FLOOR};
use crossbeam_channel as cbc;

/**
 * Schedules one cabin and coordinates its controller with the floors.
 *
 * The lift accepts call requests on `call_rx` (from floor components or
 * from a user inside the cabin) and arrival notices on `at_rx` (from its
 * controller only). It keeps an ordered schedule of pending destinations
 * and issues one step at a time to the controller; whenever the cabin
 * stops at a scheduled floor it performs the arrival handshake with that
 * floor and blocks until the doors have closed again.
 *
 * A negative call value shuts the lift down; dropping its channel ends
 * takes the controller with it.
 *
 * # Fields
 * - `number`:      The lift number (1-based).
 * - `call_rx`:     Receives destination floors. Rendezvous.
 * - `at_rx`:       Receives arrival notices from the controller.
 * - `step_tx`:     Issues step requests to the controller.
 * - `arrive_txs`:  One Arrive sender per floor, indexed by floor - 1.
 * - `event_tx`:    Trace event stream, fire-and-forget.
 */
pub struct Lift {
    number: i32,
    call_rx: cbc::Receiver<i32>,
    at_rx: cbc::Receiver<i32>,
    step_tx: cbc::Sender<i32>,
    arrive_txs: Vec<cbc::Sender<AckSender>>,
    event_tx: cbc::Sender<Event>,
}

/// Appends a destination to the schedule unless it matches the existing
/// last entry, so consecutive duplicates coalesce into one stop.
pub(crate) fn schedule_append(schedule: &mut Vec<i32>, destination: i32) {
    if schedule.last() != Some(&destination) {
        schedule.push(destination);
    }
}

impl Lift {
    pub fn new(
        number: i32,
        call_rx: cbc::Receiver<i32>,
        at_rx: cbc::Receiver<i32>,
        step_tx: cbc::Sender<i32>,
        arrive_txs: Vec<cbc::Sender<AckSender>>,
        event_tx: cbc::Sender<Event>,
    ) -> Lift {
        Lift {
            number,
            call_rx,
            at_rx,
            step_tx,
            arrive_txs,
            event_tx,
        }
    }

    pub fn run(self) {
        let mut floor = START_FLOOR;
        let mut schedule: Vec<i32> = Vec::new();
        let mut moving = false;

        loop {
            cbc::select! {
                recv(self.call_rx) -> msg => {
                    let destination = match msg {
                        Ok(destination) => destination,
                        Err(_) => break,
                    };
                    if destination < 0 {
                        break;
                    }
                    let _ = self.event_tx.send(Event::LiftCalled {
                        lift: self.number,
                        destination,
                    });
                    if destination == floor && !moving {
                        // Already at rest on the requested floor; no travel.
                        self.arrival_handshake(floor);
                    } else {
                        schedule_append(&mut schedule, destination);
                        if !moving {
                            moving = true;
                            if self.step_tx.send(destination).is_err() {
                                break;
                            }
                        }
                    }
                }
                recv(self.at_rx) -> msg => {
                    let new_floor = match msg {
                        Ok(new_floor) => new_floor,
                        Err(_) => break,
                    };
                    floor = new_floor;
                    let _ = self.event_tx.send(Event::LiftArrived {
                        lift: self.number,
                        floor,
                    });
                    // The controller only reports arrivals the lift asked
                    // for; an empty schedule here is a protocol violation.
                    let head = match schedule.first() {
                        Some(&head) => head,
                        None => panic!(
                            "lift {}: arrival at floor {} with an empty schedule",
                            self.number, floor
                        ),
                    };
                    if floor == head {
                        self.arrival_handshake(floor);
                        schedule.remove(0);
                        match schedule.first() {
                            Some(&next) => {
                                if self.step_tx.send(next).is_err() {
                                    break;
                                }
                            }
                            None => moving = false,
                        }
                    } else {
                        // Intermediate floor; keep going toward the head.
                        if self.step_tx.send(head).is_err() {
                            break;
                        }
                    }
                }
            }
        }
    }

    /// Reports the arrival to the floor and blocks until the floor has
    /// closed its doors again.
    fn arrival_handshake(&self, floor: i32) {
        let (ack_tx, ack_rx) = cbc::bounded::<()>(0);
        if self.arrive_txs[(floor - 1) as usize].send(ack_tx).is_ok() {
            let _ = ack_rx.recv();
        }
    }
}

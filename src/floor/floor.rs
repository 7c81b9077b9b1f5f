use crate::shared::{AckSender, Event};
use crossbeam_channel as cbc;
use rand::Rng;
use std::time::Duration;

/**
 * Call-button and door logic for one floor.
 *
 * The floor accepts calls on `call_rx` (a user pressing the button; no
 * payload) and arrival reports on `arrive_rx` (a lift that has stopped
 * here, carrying the ack handle the lift blocks on). On the first call it
 * dispatches an unweighted random lift; further calls are absorbed until
 * that dispatch has been serviced. When a lift arrives, the doors open
 * for a fixed window, during which additional arrivals join the same
 * batch; when the window closes, every accumulated ack handle is
 * signaled in one go.
 *
 * A message on `terminate_rx` ends the actor in any state.
 *
 * # Fields
 * - `number`:         The floor number (1-based).
 * - `pause`:          Length of the door-open window.
 * - `call_rx`:        Receives call-button presses. Rendezvous.
 * - `arrive_rx`:      Receives ack handles from stopping lifts.
 * - `terminate_rx`:   Shutdown signal.
 * - `lift_call_txs`:  One Call sender per lift, indexed by lift - 1.
 * - `event_tx`:       Trace event stream, fire-and-forget.
 */
pub struct Floor {
    number: i32,
    pause: Duration,
    call_rx: cbc::Receiver<()>,
    arrive_rx: cbc::Receiver<AckSender>,
    terminate_rx: cbc::Receiver<()>,
    lift_call_txs: Vec<cbc::Sender<i32>>,
    event_tx: cbc::Sender<Event>,
}

#[derive(PartialEq)]
enum FloorState {
    NotCalled,
    Called,
    DoorsOpen,
}

impl Floor {
    pub fn new(
        number: i32,
        pause: Duration,
        call_rx: cbc::Receiver<()>,
        arrive_rx: cbc::Receiver<AckSender>,
        terminate_rx: cbc::Receiver<()>,
        lift_call_txs: Vec<cbc::Sender<i32>>,
        event_tx: cbc::Sender<Event>,
    ) -> Floor {
        assert!(
            !lift_call_txs.is_empty(),
            "floor {} constructed without any lifts",
            number
        );
        Floor {
            number,
            pause,
            call_rx,
            arrive_rx,
            terminate_rx,
            lift_call_txs,
            event_tx,
        }
    }

    pub fn run(self) {
        let mut state = FloorState::NotCalled;
        let mut pending_acks: Vec<AckSender> = Vec::new();
        let mut door_timer = cbc::never();

        loop {
            match state {
                FloorState::NotCalled => {
                    cbc::select! {
                        recv(self.arrive_rx) -> msg => {
                            let ack = match msg {
                                Ok(ack) => ack,
                                Err(_) => break,
                            };
                            pending_acks.push(ack);
                            door_timer = cbc::after(self.pause);
                            state = FloorState::DoorsOpen;
                            let _ = self.event_tx.send(Event::DoorsOpened { floor: self.number });
                        }
                        recv(self.call_rx) -> msg => {
                            if msg.is_err() {
                                break;
                            }
                            let lift = rand::thread_rng().gen_range(0..self.lift_call_txs.len());
                            let _ = self.event_tx.send(Event::FloorCalled {
                                floor: self.number,
                                lift: lift as i32 + 1,
                            });
                            if self.lift_call_txs[lift].send(self.number).is_err() {
                                break;
                            }
                            state = FloorState::Called;
                        }
                        recv(self.terminate_rx) -> _ => break,
                    }
                }
                FloorState::Called => {
                    cbc::select! {
                        recv(self.arrive_rx) -> msg => {
                            let ack = match msg {
                                Ok(ack) => ack,
                                Err(_) => break,
                            };
                            pending_acks.push(ack);
                            door_timer = cbc::after(self.pause);
                            state = FloorState::DoorsOpen;
                            let _ = self.event_tx.send(Event::DoorsOpened { floor: self.number });
                        }
                        recv(self.call_rx) -> msg => {
                            // A dispatch is already in flight.
                            if msg.is_err() {
                                break;
                            }
                        }
                        recv(self.terminate_rx) -> _ => break,
                    }
                }
                FloorState::DoorsOpen => {
                    cbc::select! {
                        recv(door_timer) -> _ => {
                            let _ = self.event_tx.send(Event::DoorsClosed { floor: self.number });
                            // Close the doors for the whole batch at once.
                            for ack in pending_acks.drain(..) {
                                let _ = ack.send(());
                            }
                            state = FloorState::NotCalled;
                        }
                        recv(self.arrive_rx) -> msg => {
                            // A late lift joins the open window.
                            match msg {
                                Ok(ack) => pending_acks.push(ack),
                                Err(_) => break,
                            }
                        }
                        recv(self.call_rx) -> msg => {
                            if msg.is_err() {
                                break;
                            }
                        }
                        recv(self.terminate_rx) -> _ => break,
                    }
                }
            }
        }
    }
}

use crate::config::Config;
use crate::controller::Controller;
use crate::floor::Floor;
use crate::lift::Lift;
use crate::shared::{AckSender, Event, SHUTDOWN};
use crossbeam_channel as cbc;
use std::thread::Builder;
use std::thread::JoinHandle;
use std::time::Duration;

/// External handle to one lift. `call` blocks until the lift is ready to
/// take the request (rendezvous).
pub struct LiftHandle {
    call_tx: cbc::Sender<i32>,
}

impl LiftHandle {
    /// Requests that this lift visit the given floor, as a user inside
    /// the cabin would.
    pub fn call(&self, destination: i32) {
        let _ = self.call_tx.send(destination);
    }

    pub fn stop(&self) {
        let _ = self.call_tx.send(SHUTDOWN);
    }
}

/// External handle to one floor's call button.
pub struct FloorHandle {
    call_tx: cbc::Sender<()>,
    terminate_tx: cbc::Sender<()>,
}

impl FloorHandle {
    /// Presses the call button on this floor.
    pub fn call(&self) {
        let _ = self.call_tx.send(());
    }

    pub fn stop(&self) {
        let _ = self.terminate_tx.send(());
    }
}

/**
 * Assembles and owns a running bank of lifts and floors.
 *
 * Construction follows the dependency order the actors require: the
 * Arrive channel pair for every floor is created first so that each lift
 * can hold senders for floors that do not exist yet; each controller is
 * built before its lift and has its lift back-reference wired before
 * either thread starts; the floors are built last against the completed
 * lift list.
 */
pub struct Building {
    lifts: Vec<LiftHandle>,
    floors: Vec<FloorHandle>,
    event_rx: cbc::Receiver<Event>,
    threads: Vec<JoinHandle<()>>,
}

impl Building {
    pub fn new(config: &Config) -> Building {
        let n_floors = config.building.n_floors;
        let n_lifts = config.building.n_lifts;
        assert!(n_floors >= 1, "a building needs at least one floor");
        assert!(n_lifts >= 1, "a building needs at least one lift");

        let pause = Duration::from_millis(config.timing.pause_ms);
        let (event_tx, event_rx) = cbc::unbounded::<Event>();

        // Arrive channels exist before any lift so every lift gets a full
        // set of floor senders up front.
        let mut arrive_txs: Vec<cbc::Sender<AckSender>> = Vec::new();
        let mut arrive_rxs: Vec<cbc::Receiver<AckSender>> = Vec::new();
        for _ in 0..n_floors {
            let (tx, rx) = cbc::bounded::<AckSender>(0);
            arrive_txs.push(tx);
            arrive_rxs.push(rx);
        }

        let mut threads = Vec::new();
        let mut lifts = Vec::new();
        let mut lift_call_txs = Vec::new();

        for number in 1..=n_lifts {
            let (step_tx, step_rx) = cbc::bounded::<i32>(0);
            let (at_tx, at_rx) = cbc::bounded::<i32>(0);
            let (call_tx, call_rx) = cbc::bounded::<i32>(0);

            let mut controller = Controller::new(number, pause, step_rx);
            let lift = Lift::new(
                number,
                call_rx,
                at_rx,
                step_tx,
                arrive_txs.clone(),
                event_tx.clone(),
            );
            // Back-reference fixup: both actors exist before either runs.
            controller.attach_lift(at_tx);

            let controller_thread = Builder::new().name(format!("controller-{}", number));
            threads.push(controller_thread.spawn(move || controller.run()).unwrap());
            let lift_thread = Builder::new().name(format!("lift-{}", number));
            threads.push(lift_thread.spawn(move || lift.run()).unwrap());

            lift_call_txs.push(call_tx.clone());
            lifts.push(LiftHandle { call_tx });
        }

        let mut floors = Vec::new();
        for (i, arrive_rx) in arrive_rxs.into_iter().enumerate() {
            let number = i as i32 + 1;
            let (call_tx, call_rx) = cbc::bounded::<()>(0);
            let (terminate_tx, terminate_rx) = cbc::bounded::<()>(0);

            let floor = Floor::new(
                number,
                pause,
                call_rx,
                arrive_rx,
                terminate_rx,
                lift_call_txs.clone(),
                event_tx.clone(),
            );
            let floor_thread = Builder::new().name(format!("floor-{}", number));
            threads.push(floor_thread.spawn(move || floor.run()).unwrap());

            floors.push(FloorHandle {
                call_tx,
                terminate_tx,
            });
        }

        Building {
            lifts,
            floors,
            event_rx,
            threads,
        }
    }

    /// Handle to lift `number` (1-based).
    pub fn lift(&self, number: i32) -> &LiftHandle {
        &self.lifts[(number - 1) as usize]
    }

    /// Handle to floor `number` (1-based).
    pub fn floor(&self, number: i32) -> &FloorHandle {
        &self.floors[(number - 1) as usize]
    }

    /// The trace event stream. The receiver can be cloned freely; it
    /// disconnects once every actor has stopped.
    pub fn events(&self) -> cbc::Receiver<Event> {
        self.event_rx.clone()
    }

    /// Stops every lift and floor and waits for all actor threads to
    /// finish. Controllers exit through channel disconnect once their
    /// lift is gone.
    pub fn shutdown(self) {
        for lift in &self.lifts {
            lift.stop();
        }
        for floor in &self.floors {
            floor.stop();
        }
        drop(self.lifts);
        drop(self.floors);
        for handle in self.threads {
            let _ = handle.join();
        }
    }
}

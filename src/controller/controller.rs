use crate::shared::START_FLOOR;
use crossbeam_channel as cbc;
use std::time::Duration;

/**
 * Drives one lift's motor, one floor at a time.
 *
 * The controller is privately owned by its lift. It accepts step requests
 * (destination floors) on `step_rx` and reports every arrival back to the
 * lift. Each accepted step moves the cabin exactly one floor toward the
 * destination after a fixed pause; multi-floor travel requires the lift to
 * re-issue the step after every arrival notice. A negative destination
 * shuts the controller down, as does either channel disconnecting.
 *
 * # Fields
 * - `number`:   The owning lift's number (1-based).
 * - `pause`:    Travel time for a single floor.
 * - `step_rx`:  Receives step requests. Rendezvous; only read while idle,
 *               so a new step is never accepted while the motor runs.
 * - `at_tx`:    Back-reference to the owning lift, wired with
 *               `attach_lift` after the lift exists and before `run`.
 */
pub struct Controller {
    number: i32,
    pause: Duration,
    step_rx: cbc::Receiver<i32>,
    at_tx: Option<cbc::Sender<i32>>,
}

impl Controller {
    pub fn new(number: i32, pause: Duration, step_rx: cbc::Receiver<i32>) -> Controller {
        Controller {
            number,
            pause,
            step_rx,
            at_tx: None,
        }
    }

    /// Wires the back-reference to the owning lift. Must be called before
    /// `run`; the circular controller/lift construction makes this a
    /// separate step.
    pub fn attach_lift(&mut self, at_tx: cbc::Sender<i32>) {
        self.at_tx = Some(at_tx);
    }

    pub fn run(mut self) {
        let at_tx = match self.at_tx.take() {
            Some(at_tx) => at_tx,
            None => panic!("controller {} started without an attached lift", self.number),
        };

        let mut floor = START_FLOOR;
        let mut motor_running = false;
        let mut step_timer = cbc::never();

        loop {
            if motor_running {
                let _ = step_timer.recv();
                if at_tx.send(floor).is_err() {
                    break;
                }
                motor_running = false;
            } else {
                let destination = match self.step_rx.recv() {
                    Ok(destination) => destination,
                    Err(_) => break,
                };
                if destination < 0 {
                    break;
                }
                if destination == floor {
                    // Nothing to do; keep serving future steps.
                    continue;
                }
                step_timer = cbc::after(self.pause);
                motor_running = true;
                floor += if destination > floor { 1 } else { -1 };
            }
        }
    }
}

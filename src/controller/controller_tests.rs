/*
 * Unit tests for the controller component.
 *
 * The unit tests follow the Arrange, Act, Assert pattern.
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod controller_tests {
    use crate::controller::Controller;
    use crate::shared::SHUTDOWN;
    use crossbeam_channel as cbc;
    use std::thread::spawn;
    use std::thread::JoinHandle;
    use std::time::Duration;

    const PAUSE: Duration = Duration::from_millis(20);
    const RECV_TIMEOUT: Duration = Duration::from_secs(2);

    fn setup_controller() -> (cbc::Sender<i32>, cbc::Receiver<i32>, JoinHandle<()>) {
        // Arrange rendezvous channels on both sides of the controller
        let (step_tx, step_rx) = cbc::bounded::<i32>(0);
        let (at_tx, at_rx) = cbc::bounded::<i32>(0);

        let mut controller = Controller::new(1, PAUSE, step_rx);
        controller.attach_lift(at_tx);
        let handle = spawn(move || controller.run());

        (step_tx, at_rx, handle)
    }

    #[test]
    fn test_controller_steps_one_floor_per_request() {
        // Arrange
        let (step_tx, at_rx, handle) = setup_controller();

        // Act: request floor 3 from the starting floor 1.
        step_tx.send(3).unwrap();

        // Assert: one floor of travel per step request, re-issued to continue.
        assert_eq!(at_rx.recv_timeout(RECV_TIMEOUT), Ok(2));
        step_tx.send(3).unwrap();
        assert_eq!(at_rx.recv_timeout(RECV_TIMEOUT), Ok(3));

        // Cleanup
        step_tx.send(SHUTDOWN).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_controller_steps_down_toward_lower_destination() {
        // Arrange
        let (step_tx, at_rx, handle) = setup_controller();

        // Act: travel up to floor 3, then request floor 1.
        step_tx.send(3).unwrap();
        assert_eq!(at_rx.recv_timeout(RECV_TIMEOUT), Ok(2));
        step_tx.send(3).unwrap();
        assert_eq!(at_rx.recv_timeout(RECV_TIMEOUT), Ok(3));
        step_tx.send(1).unwrap();

        // Assert
        assert_eq!(at_rx.recv_timeout(RECV_TIMEOUT), Ok(2));

        // Cleanup
        step_tx.send(SHUTDOWN).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_controller_ignores_destination_equal_to_current_floor() {
        // Arrange
        let (step_tx, at_rx, handle) = setup_controller();

        // Act: the cabin is already on floor 1, no travel is needed.
        step_tx.send(1).unwrap();

        // Assert: the controller keeps serving later requests.
        step_tx.send(2).unwrap();
        assert_eq!(at_rx.recv_timeout(RECV_TIMEOUT), Ok(2));

        // Cleanup
        step_tx.send(SHUTDOWN).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_controller_shutdown_on_negative_destination() {
        // Arrange
        let (step_tx, at_rx, handle) = setup_controller();

        // Act
        step_tx.send(SHUTDOWN).unwrap();
        handle.join().unwrap();

        // Assert: the arrival channel disconnects once the loop has ended.
        assert_eq!(
            at_rx.recv_timeout(RECV_TIMEOUT),
            Err(cbc::RecvTimeoutError::Disconnected)
        );
    }

    #[test]
    fn test_controller_shutdown_on_disconnect() {
        // Arrange
        let (step_tx, at_rx, handle) = setup_controller();

        // Act: dropping the step sender ends the loop as well.
        drop(step_tx);
        handle.join().unwrap();

        // Assert
        assert_eq!(
            at_rx.recv_timeout(RECV_TIMEOUT),
            Err(cbc::RecvTimeoutError::Disconnected)
        );
    }

    #[test]
    fn test_controller_panics_without_attached_lift() {
        // Arrange: a controller whose lift back-reference was never wired.
        let (_step_tx, step_rx) = cbc::bounded::<i32>(0);
        let controller = Controller::new(1, PAUSE, step_rx);

        // Act
        let handle = spawn(move || controller.run());

        // Assert
        assert!(handle.join().is_err());
    }
}

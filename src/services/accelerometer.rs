use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};

use crate::sensors::{AccelReading, SensorHub};

/// Standard gravity in m/s²
pub const GRAVITY: f32 = 9.81;

/// Degrees of tilt the simulated sweep advances per second
const SWEEP_DEGREES_PER_SEC: f32 = 30.0;

/// Reading for a watch tilted `degrees` about its y axis
///
/// Gravity is split between the x and z axes so that the derived rotation
/// equals `degrees`.
pub fn reading_for_tilt(degrees: f32) -> AccelReading {
    let radians = degrees.to_radians();
    AccelReading::new(GRAVITY * radians.sin(), 0.0, GRAVITY * radians.cos())
}

/// Tilt shared between the UI (manual tilt keys) and the simulator task
#[derive(Debug, Clone, Default)]
pub struct TiltControl {
    degrees: Arc<AtomicU32>,
}

impl TiltControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn degrees(&self) -> f32 {
        f32::from_bits(self.degrees.load(Ordering::Relaxed))
    }

    pub fn set(&self, degrees: f32) {
        self.degrees
            .store(degrees.rem_euclid(360.0).to_bits(), Ordering::Relaxed);
    }

    pub fn nudge(&self, delta: f32) {
        self.set(self.degrees() + delta);
    }
}

/// Spawn the simulated accelerometer
///
/// Every `period` it publishes a reading for the current tilt. With `sweep`
/// the tilt also advances on its own so the display keeps turning.
pub fn spawn_accelerometer(
    hub: SensorHub,
    tilt: TiltControl,
    period: Duration,
    sweep: bool,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut tick = interval(period);
        let step = SWEEP_DEGREES_PER_SEC * period.as_secs_f32();

        loop {
            tick.tick().await;
            if sweep {
                tilt.nudge(step);
            }
            hub.publish(reading_for_tilt(tilt.degrees()));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::RotationCell;

    #[test]
    fn test_reading_for_tilt_matches_rotation() {
        for degrees in [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 300.0] {
            let rotation = reading_for_tilt(degrees).rotation_degrees();
            assert!((rotation - degrees).abs() < 0.01, "{} -> {}", degrees, rotation);
        }
    }

    #[test]
    fn test_tilt_wraps() {
        let tilt = TiltControl::new();
        tilt.nudge(-15.0);
        assert!((tilt.degrees() - 345.0).abs() < 1e-3);
        tilt.nudge(30.0);
        assert!((tilt.degrees() - 15.0).abs() < 1e-3);
    }

    #[tokio::test]
    async fn test_simulator_publishes_to_listener() {
        let hub = SensorHub::new();
        let cell = RotationCell::new();
        let listener = hub.register(cell.clone());

        let tilt = TiltControl::new();
        tilt.set(90.0);
        let handle = spawn_accelerometer(hub.clone(), tilt, Duration::from_millis(50), false);

        tokio::time::sleep(Duration::from_millis(120)).await;
        handle.abort();

        assert!(listener.readings() >= 2);
        assert!((cell.load() - 90.0).abs() < 0.01);
    }
}

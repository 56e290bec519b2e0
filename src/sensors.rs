//! Motion sensor hub
//!
//! Accelerometer readings are published into the hub by whatever produces
//! them (the simulator task, or manual tilt keys). At most one listener is
//! registered at a time: the full-screen display while it is open. The
//! listener owns a [`RotationCell`] that the hub writes and the UI reads.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::logic::rotation::rotation_degrees;

/// One accelerometer sample in m/s²
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccelReading {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl AccelReading {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn rotation_degrees(&self) -> f32 {
        rotation_degrees(self.x, self.z)
    }
}

/// Latest rotation angle, written by the sensor side and read by the UI
///
/// Stores the `f32` bit pattern in an atomic, so reads never block and the
/// last write wins.
#[derive(Debug, Clone, Default)]
pub struct RotationCell {
    bits: Arc<AtomicU32>,
}

impl RotationCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, degrees: f32) {
        self.bits.store(degrees.to_bits(), Ordering::Relaxed);
    }

    pub fn load(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

#[derive(Debug)]
struct Registration {
    id: u64,
    cell: RotationCell,
    readings: Arc<AtomicU64>,
}

#[derive(Debug, Default)]
struct HubInner {
    listener: Mutex<Option<Registration>>,
    next_id: AtomicU64,
}

/// Routes accelerometer readings to the registered listener
#[derive(Debug, Clone, Default)]
pub struct SensorHub {
    inner: Arc<HubInner>,
}

impl SensorHub {
    pub fn new() -> Self {
        Self::default()
    }

    fn listener(&self) -> MutexGuard<'_, Option<Registration>> {
        // A panic while holding the lock leaves only a plain Option behind
        self.inner
            .listener
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Register `cell` to receive rotation updates
    ///
    /// Replaces any previous listener. The returned guard unregisters on
    /// drop.
    pub fn register(&self, cell: RotationCell) -> SensorListener {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let readings = Arc::new(AtomicU64::new(0));

        let mut slot = self.listener();
        if slot.is_some() {
            log::debug!("Sensor listener replaced by #{}", id);
        }
        *slot = Some(Registration {
            id,
            cell,
            readings: Arc::clone(&readings),
        });
        log::debug!("Sensor listener #{} registered", id);

        SensorListener {
            hub: self.clone(),
            id,
            readings,
        }
    }

    pub fn has_listener(&self) -> bool {
        self.listener().is_some()
    }

    /// Deliver a reading; dropped when nobody is listening
    pub fn publish(&self, reading: AccelReading) {
        if let Some(registration) = self.listener().as_ref() {
            registration.cell.store(reading.rotation_degrees());
            registration.readings.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn unregister(&self, id: u64) {
        let mut slot = self.listener();
        if slot.as_ref().map(|r| r.id) == Some(id) {
            *slot = None;
            log::debug!("Sensor listener #{} unregistered", id);
        }
    }
}

/// Registration handle; unregisters from the hub when dropped
#[derive(Debug)]
pub struct SensorListener {
    hub: SensorHub,
    id: u64,
    readings: Arc<AtomicU64>,
}

impl SensorListener {
    /// Whether this listener is still the hub's registered one
    pub fn is_registered(&self) -> bool {
        self.hub.listener().as_ref().map(|r| r.id) == Some(self.id)
    }

    /// Number of readings delivered to this listener
    pub fn readings(&self) -> u64 {
        self.readings.load(Ordering::Relaxed)
    }
}

impl Drop for SensorListener {
    fn drop(&mut self) {
        self.hub.unregister(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_cell_last_write_wins() {
        let cell = RotationCell::new();
        assert_eq!(cell.load(), 0.0);
        cell.store(12.5);
        cell.store(270.0);
        assert_eq!(cell.load(), 270.0);
    }

    #[test]
    fn test_publish_without_listener_is_dropped() {
        let hub = SensorHub::new();
        hub.publish(AccelReading::new(1.0, 0.0, 0.0));
        assert!(!hub.has_listener());
    }

    #[test]
    fn test_registered_listener_receives_rotation() {
        let hub = SensorHub::new();
        let cell = RotationCell::new();
        let listener = hub.register(cell.clone());

        hub.publish(AccelReading::new(9.81, 0.0, 0.0));
        assert!((cell.load() - 90.0).abs() < 1e-3);
        assert_eq!(listener.readings(), 1);
    }

    #[test]
    fn test_drop_unregisters() {
        let hub = SensorHub::new();
        let cell = RotationCell::new();
        let listener = hub.register(cell.clone());
        assert!(hub.has_listener());

        drop(listener);
        assert!(!hub.has_listener());

        hub.publish(AccelReading::new(0.0, 0.0, -9.81));
        assert_eq!(cell.load(), 0.0);
    }

    #[test]
    fn test_stale_guard_does_not_unregister_replacement() {
        let hub = SensorHub::new();
        let first = hub.register(RotationCell::new());
        let second = hub.register(RotationCell::new());
        assert!(!first.is_registered());
        assert!(second.is_registered());

        drop(first);
        assert!(second.is_registered());
    }

    #[test]
    fn test_hub_shared_across_threads() {
        let hub = SensorHub::new();
        let cell = RotationCell::new();
        let _listener = hub.register(cell.clone());

        let producer = hub.clone();
        std::thread::spawn(move || producer.publish(AccelReading::new(0.0, 0.0, -1.0)))
            .join()
            .unwrap();

        assert!((cell.load() - 180.0).abs() < 1e-3);
    }
}

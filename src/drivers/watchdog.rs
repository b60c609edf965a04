//! Task watchdog for the poll loop.
//!
//! The poll loop spins without yielding, which starves the FreeRTOS idle
//! task on its core.  Arming therefore turns idle-task supervision off and
//! registers the main task itself; `feed()` must then run on every loop
//! iteration or the device panics and resets after `timeout_ms`.
//!
//! On host targets nothing is armed and `feed()` does nothing.

use log::{info, warn};

pub struct Watchdog {
    armed: bool,
}

impl Watchdog {
    /// Arm the TWDT with `timeout_ms` and register the calling task.
    pub fn subscribe(timeout_ms: u32) -> Self {
        let armed = arm(timeout_ms);
        if armed {
            info!("Watchdog: armed, {}ms, main task registered", timeout_ms);
        }
        Self { armed }
    }

    /// Whether the calling task is registered with the TWDT.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn feed(&self) {
        if self.armed {
            reset();
        }
    }
}

#[cfg(target_os = "espidf")]
fn arm(timeout_ms: u32) -> bool {
    use esp_idf_svc::sys::{ESP_OK, esp_task_wdt_add, esp_task_wdt_config_t, esp_task_wdt_reconfigure};

    let cfg = esp_task_wdt_config_t {
        timeout_ms,
        idle_core_mask: 0,
        trigger_panic: true,
    };
    // SAFETY: called once from the main task before the poll loop; the
    // TWDT API serialises access internally.
    let rc = unsafe { esp_task_wdt_reconfigure(&cfg) };
    if rc != ESP_OK as i32 {
        // Not fatal: an already-running TWDT keeps its previous settings.
        warn!("Watchdog: reconfigure rc={}", rc);
    }
    // SAFETY: a null handle registers the calling task.
    let rc = unsafe { esp_task_wdt_add(core::ptr::null_mut()) };
    if rc != ESP_OK as i32 {
        warn!("Watchdog: task registration rc={}", rc);
        return false;
    }
    true
}

#[cfg(not(target_os = "espidf"))]
fn arm(timeout_ms: u32) -> bool {
    warn!("Watchdog(sim): {}ms timeout not armed", timeout_ms);
    false
}

#[cfg(target_os = "espidf")]
fn reset() {
    // SAFETY: only touches the TWDT entry of the calling task.
    unsafe {
        esp_idf_svc::sys::esp_task_wdt_reset();
    }
}

#[cfg(not(target_os = "espidf"))]
fn reset() {}

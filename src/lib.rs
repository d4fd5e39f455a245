//! # Capture iteration timing
//!
//! This crate measures how long it takes to iterate through all blocks of a capture file
//! (legacy PCAP or PCAPNG), using the streaming readers of the
//! [pcap-parser](https://crates.io/crates/pcap-parser) crate. Packets are not decoded.
//!
//! Measurements are taken with [`Timer`], an accumulating stopwatch with guarded start/stop
//! state. The timer reads time from an injected [`Clock`], which makes it testable with a
//! [`ManualClock`].
//!
//! # Example: timing a capture file
//!
//! ```rust,no_run
//! use pcap_timing::{time_capture_file, BenchConfig};
//!
//! # fn main() -> Result<(), pcap_timing::CaptureError> {
//! let report = time_capture_file("assets/modbus.pcap", &BenchConfig::default())?;
//! println!("{} packets: {}", report.stats.packets, report);
//! # Ok(())
//! # }
//! ```
//!
//! # Example: timing arbitrary work
//!
//! ```rust
//! use pcap_timing::Timer;
//!
//! # fn main() -> Result<(), pcap_timing::TimerError> {
//! let mut timer = Timer::new();
//! for _ in 0..3 {
//!     // setup, not measured
//!     let v: Vec<u64> = (0..1000).collect();
//!     let _sum: u64 = timer.time(|| v.iter().sum())?;
//! }
//! println!("{:.2} ms", timer.elapsed().as_secs_f64() * 1000.0);
//! # Ok(())
//! # }
//! ```

mod capture;
mod clock;
mod error;
mod timer;

pub use capture::*;
pub use clock::*;
pub use error::*;
pub use timer::*;

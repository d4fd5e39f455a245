use crate::clock::Clock;
use crate::error::CaptureError;
use crate::timer::Timer;
use log::{debug, info, warn};
use pcap_parser::{create_reader, Block, PcapBlockOwned, PcapError};
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Default capacity of the streaming reader buffer
pub const DEFAULT_BUFFER_SIZE: usize = 65536;

/// Settings of a capture timing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Capacity of the streaming reader buffer. Must hold at least one complete block.
    pub buffer_size: usize,
    /// Number of full passes over the capture, accumulated in the same timer.
    /// A value of 0 is treated as 1.
    pub rounds: u32,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            buffer_size: DEFAULT_BUFFER_SIZE,
            rounds: 1,
        }
    }
}

/// Counters collected while iterating a capture
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CaptureStats {
    /// Blocks returned by the reader, including file and section headers
    pub blocks: u64,
    /// Packet records (legacy records, enhanced and simple packet blocks)
    pub packets: u64,
    /// Packet data bytes stored in the capture
    pub captured_bytes: u64,
}

impl CaptureStats {
    fn record(&mut self, block: &PcapBlockOwned) {
        self.blocks += 1;
        let captured = match block {
            PcapBlockOwned::Legacy(b) => b.caplen,
            PcapBlockOwned::NG(Block::EnhancedPacket(epb)) => epb.caplen,
            // data of a simple packet block includes padding
            PcapBlockOwned::NG(Block::SimplePacket(spb)) => {
                spb.origlen.min(spb.data.len() as u32)
            }
            _ => return,
        };
        self.packets += 1;
        self.captured_bytes += u64::from(captured);
    }
}

/// Result of timing the iteration of a capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingReport {
    pub stats: CaptureStats,
    pub elapsed: Duration,
}

impl TimingReport {
    /// Elapsed time, in milliseconds
    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

impl fmt::Display for TimingReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2} ms", self.millis())
    }
}

/// Iterates over all blocks of a legacy pcap or pcap-ng stream.
///
/// The format is detected from the file magic. Packet contents are not decoded.
///
/// ## Example
///
/// ```rust
/// use pcap_timing::{iterate_capture, CaptureError};
///
/// let empty: &[u8] = &[];
/// let res = iterate_capture(empty, 1024);
/// assert!(matches!(res, Err(CaptureError::Empty)));
/// ```
pub fn iterate_capture<R>(input: R, buffer_size: usize) -> Result<CaptureStats, CaptureError>
where
    R: Read + Send,
{
    let mut reader = match create_reader(buffer_size, input) {
        Ok(reader) => reader,
        Err(PcapError::Eof) => return Err(CaptureError::Empty),
        Err(PcapError::Incomplete(_)) | Err(PcapError::UnexpectedEof) => {
            return Err(CaptureError::Truncated { consumed: 0 })
        }
        Err(e) => return Err(e.to_owned_vec().into()),
    };
    let mut stats = CaptureStats::default();
    loop {
        match reader.next() {
            Ok((offset, block)) => {
                stats.record(&block);
                reader.consume(offset);
            }
            Err(PcapError::Eof) => break,
            Err(PcapError::Incomplete(_)) => {
                if reader.reader_exhausted() {
                    return Err(CaptureError::Truncated {
                        consumed: reader.consumed(),
                    });
                }
                let available = reader.data().len();
                reader.refill().map_err(|e| e.to_owned_vec())?;
                if reader.data().len() == available && !reader.reader_exhausted() {
                    // buffer is full and still does not hold a complete block
                    return Err(CaptureError::Parse(PcapError::BufferTooSmall));
                }
            }
            Err(PcapError::UnexpectedEof) => {
                return Err(CaptureError::Truncated {
                    consumed: reader.consumed(),
                })
            }
            Err(e) => return Err(e.to_owned_vec().into()),
        }
    }
    Ok(stats)
}

/// Times `config.rounds` passes over an in-memory capture, accumulating in `timer`.
///
/// Only the iterations are measured. Returns the counters of a single pass.
pub fn time_capture<C: Clock>(
    data: &[u8],
    config: &BenchConfig,
    timer: &mut Timer<C>,
) -> Result<CaptureStats, CaptureError> {
    let rounds = config.rounds.max(1);
    let mut stats = CaptureStats::default();
    for round in 0..rounds {
        stats = timer.time(|| iterate_capture(data, config.buffer_size))??;
        debug!(
            "round {}/{}: {} blocks, accumulated {:?}",
            round + 1,
            rounds,
            stats.blocks,
            timer.elapsed()
        );
    }
    Ok(stats)
}

/// Reads a capture file, and times the iteration of its blocks.
///
/// The file is loaded into memory first, so that disk access is not measured.
pub fn time_capture_file<P: AsRef<Path>>(
    path: P,
    config: &BenchConfig,
) -> Result<TimingReport, CaptureError> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    debug!("{}: loaded {} bytes", path.display(), data.len());
    let mut timer = Timer::new();
    let stats = time_capture(&data, config, &mut timer)?;
    if stats.packets == 0 {
        warn!("{}: capture contains no packets", path.display());
    }
    let report = TimingReport {
        stats,
        elapsed: timer.elapsed(),
    };
    info!(
        "{}: {} blocks, {} packets, {} bytes in {}",
        path.display(),
        stats.blocks,
        stats.packets,
        stats.captured_bytes,
        report
    );
    Ok(report)
}

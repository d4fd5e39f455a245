use pcap_parser::PcapError;
use std::error::Error;
use std::fmt;
use std::io;

/// Misuse of the [`Timer`](crate::Timer) state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// `start` was called while a timing interval is open
    AlreadyRunning,
    /// `stop` was called while no timing interval is open
    NotRunning,
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TimerError::AlreadyRunning => write!(f, "timer is already running"),
            TimerError::NotRunning => write!(f, "timer is not running"),
        }
    }
}

impl Error for TimerError {}

/// Failure while iterating or timing a capture file
#[derive(Debug)]
pub enum CaptureError {
    /// The capture file could not be read
    Io(io::Error),
    /// The input contains no data at all
    Empty,
    /// The input ends in the middle of a block
    Truncated {
        /// Number of bytes successfully consumed before the truncated block
        consumed: usize,
    },
    /// The capture reader rejected the input
    Parse(PcapError<&'static [u8]>),
    /// The timer was misused by the driver
    Timer(TimerError),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CaptureError::Io(e) => write!(f, "I/O error: {}", e),
            CaptureError::Empty => write!(f, "empty capture"),
            CaptureError::Truncated { consumed } => {
                write!(f, "truncated capture after {} bytes", consumed)
            }
            CaptureError::Parse(e) => write!(f, "invalid capture: {}", e),
            CaptureError::Timer(e) => write!(f, "timer error: {}", e),
        }
    }
}

impl Error for CaptureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CaptureError::Io(e) => Some(e),
            CaptureError::Parse(e) => Some(e),
            CaptureError::Timer(e) => Some(e),
            CaptureError::Empty | CaptureError::Truncated { .. } => None,
        }
    }
}

impl From<io::Error> for CaptureError {
    fn from(e: io::Error) -> Self {
        CaptureError::Io(e)
    }
}

impl From<TimerError> for CaptureError {
    fn from(e: TimerError) -> Self {
        CaptureError::Timer(e)
    }
}

impl From<PcapError<&'static [u8]>> for CaptureError {
    fn from(e: PcapError<&'static [u8]>) -> Self {
        CaptureError::Parse(e)
    }
}

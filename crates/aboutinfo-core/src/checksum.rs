//! CRC-32 of the feature image, computed on demand and cached.
//!
//! The checksum is only used to notice that a feature's image bytes changed,
//! so it is computed lazily on first request and never recomputed.

use std::io::{self, Read};
use std::sync::Mutex;

const BUF_SIZE: usize = 2048;

/// Compute the CRC-32 (IEEE 802.3) of everything `reader` yields.
/// Reads in fixed-size chunks; the reader is consumed but not closed.
pub fn crc32_reader<R: Read>(mut reader: R) -> io::Result<u32> {
    let mut hasher = crc32fast::Hasher::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finalize())
}

/// Outcome of the one-time checksum computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChecksumState {
    #[default]
    Uncomputed,
    Present(u32),
    /// Computed, but there is no value (no image, unresolvable, or unreadable).
    Absent,
}

impl ChecksumState {
    pub fn value(self) -> Option<u32> {
        match self {
            ChecksumState::Present(v) => Some(v),
            ChecksumState::Uncomputed | ChecksumState::Absent => None,
        }
    }
}

/// Memo cell for a checksum. The lock is held while computing, so concurrent
/// first callers run the computation once.
#[derive(Debug, Default)]
pub struct ChecksumCache {
    state: Mutex<ChecksumState>,
}

impl ChecksumCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state without computing.
    pub fn state(&self) -> ChecksumState {
        *self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Return the cached outcome, running `compute` on first use only.
    pub fn get_or_compute<F>(&self, compute: F) -> Option<u32>
    where
        F: FnOnce() -> Option<u32>,
    {
        let mut state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if *state == ChecksumState::Uncomputed {
            *state = match compute() {
                Some(v) => ChecksumState::Present(v),
                None => ChecksumState::Absent,
            };
        }
        state.value()
    }
}

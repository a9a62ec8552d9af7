//! Platform session lifecycle
//!
//! Wraps SDK initialization/shutdown into an explicit open/close pair. A
//! failed open never touches `session_close`; a successful open is closed
//! exactly once, either explicitly or on drop.

use crate::logger::DebugLogger;
use std::sync::Arc;
use worksnap_core::platform::WorkshopPlatform;
use worksnap_core::{Error, Result};

pub struct PlatformSession {
    platform: Arc<dyn WorkshopPlatform>,
    closed: bool,
}

impl PlatformSession {
    /// Establish the platform session, failing fast when the host
    /// environment cannot provide one.
    pub fn open(platform: Arc<dyn WorkshopPlatform>, logger: &DebugLogger) -> Result<Self> {
        logger.log("Initializing platform session...");
        if !platform.session_open() {
            logger.log("Platform session initialization failed");
            return Err(Error::SessionInit);
        }
        logger.log("Platform session established");
        Ok(Self {
            platform,
            closed: false,
        })
    }

    /// Release the session explicitly. Idempotence is enforced by consuming
    /// `self`; the drop guard below covers early-return paths.
    pub fn close(mut self, logger: &DebugLogger) {
        logger.log("Closing platform session");
        self.platform.session_close();
        self.closed = true;
    }
}

impl Drop for PlatformSession {
    fn drop(&mut self) {
        if !self.closed {
            self.platform.session_close();
        }
    }
}

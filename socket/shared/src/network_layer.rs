use log::warn;

use crate::{SocketError, SocketPlatform};

/// Keeps the OS network layer initialized for as long as it lives.
///
/// Created by `initialize`, which runs `initialize_network_layer`; the
/// matching `shutdown_network_layer` runs on `shutdown` or on drop, whichever
/// comes first. All socket use should happen while a `NetworkLayer` is alive.
pub struct NetworkLayer<P: SocketPlatform> {
    platform: P,
    active: bool,
}

impl<P: SocketPlatform> NetworkLayer<P> {
    pub fn initialize(platform: P) -> Result<Self, SocketError> {
        platform.initialize_network_layer()?;
        Ok(Self {
            platform,
            active: true,
        })
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Shuts the network layer down now, reporting any failure to the caller.
    pub fn shutdown(mut self) -> Result<(), SocketError> {
        self.active = false;
        self.platform.shutdown_network_layer()
    }
}

impl<P: SocketPlatform> Drop for NetworkLayer<P> {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Err(err) = self.platform.shutdown_network_layer() {
            warn!("{}", err);
        }
    }
}

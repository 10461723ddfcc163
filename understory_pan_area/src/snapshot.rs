// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapshot cache: a pre-rasterized bitmap of the content shown while moving.
//!
//! The cache is filled at most once per mount. The area queues a
//! [`RasterRequest`] after its first successful measurement; the host hands
//! it to whatever rasterization service it has and reports back through
//! [`Area::complete_snapshot`](crate::Area::complete_snapshot). Requests are
//! identified by a [`SnapshotTicket`] bound to the mount generation, so
//! results that arrive after a re-mount or teardown are dropped.

use kurbo::Size;
use thiserror::Error;

/// Identifies one rasterization request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SnapshotTicket(u64);

impl SnapshotTicket {
    pub(crate) fn new(generation: u64) -> Self {
        Self(generation)
    }

    /// Mount generation this ticket belongs to.
    #[must_use]
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Parameters for rasterizing the content subtree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterRequest {
    /// Ticket to pass back with the result.
    pub ticket: SnapshotTicket,
    /// Output image size: natural content size times the snapshot resolution.
    pub size: Size,
    /// Render over a transparent background.
    pub transparent_background: bool,
    /// Include cross-origin resources (images, fonts) in the output.
    pub include_cross_origin: bool,
}

/// A rasterized image of the content.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Encoded image bytes; the format is up to the rasterizer.
    pub image: Vec<u8>,
    /// Pixel size of the encoded image.
    pub size: Size,
}

/// Rasterization did not produce an image.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RasterizeError {
    /// The rasterizer reported a failure.
    #[error("rasterization failed: {0}")]
    Failed(String),
    /// The request was abandoned before it finished.
    #[error("rasterization was cancelled")]
    Cancelled,
}

/// A rasterization service that can produce an image inline.
///
/// Hosts with asynchronous rasterizers use
/// [`Area::take_raster_request`](crate::Area::take_raster_request) and
/// [`Area::complete_snapshot`](crate::Area::complete_snapshot) directly.
pub trait Rasterizer {
    /// Rasterizes the content described by `request`.
    fn rasterize(&mut self, request: &RasterRequest) -> Result<Snapshot, RasterizeError>;
}

impl<F> Rasterizer for F
where
    F: FnMut(&RasterRequest) -> Result<Snapshot, RasterizeError>,
{
    fn rasterize(&mut self, request: &RasterRequest) -> Result<Snapshot, RasterizeError> {
        self(request)
    }
}

/// Lifecycle of the cache for the current mount.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SnapshotState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is waiting to be picked up by the host.
    Queued(RasterRequest),
    /// The host is rasterizing.
    InFlight(SnapshotTicket),
    /// The image is available.
    Ready(Snapshot),
    /// Rasterization failed; live content is used for the rest of this mount.
    Failed,
}

/// Outcome of [`SnapshotCache::complete`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The image was stored.
    Stored,
    /// The failure was recorded.
    Failed,
    /// The ticket does not match the outstanding request.
    Stale,
}

/// Per-area snapshot cache.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SnapshotCache {
    enabled: bool,
    state: SnapshotState,
}

impl SnapshotCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            state: SnapshotState::Idle,
        }
    }

    /// Returns `true` if the caller asked for snapshot rendering.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the cache. Disabling drops any pending request.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled && matches!(self.state, SnapshotState::Queued(_) | SnapshotState::InFlight(_)) {
            self.state = SnapshotState::Idle;
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> &SnapshotState {
        &self.state
    }

    /// Clears the cache, abandoning any outstanding request.
    pub fn invalidate(&mut self) {
        self.state = SnapshotState::Idle;
    }

    /// Queues a request if the cache is enabled and idle.
    pub fn queue(&mut self, ticket: SnapshotTicket, natural_content: Size, resolution: f64) -> bool {
        if !self.enabled || self.state != SnapshotState::Idle {
            return false;
        }
        self.state = SnapshotState::Queued(RasterRequest {
            ticket,
            size: natural_content * resolution,
            transparent_background: true,
            include_cross_origin: true,
        });
        true
    }

    /// Hands the queued request to the host.
    pub fn take_request(&mut self) -> Option<RasterRequest> {
        let SnapshotState::Queued(request) = self.state else {
            return None;
        };
        self.state = SnapshotState::InFlight(request.ticket);
        Some(request)
    }

    /// Records the result of a request.
    pub fn complete(
        &mut self,
        ticket: SnapshotTicket,
        result: Result<Snapshot, RasterizeError>,
    ) -> Completion {
        let outstanding = match &self.state {
            SnapshotState::Queued(request) => request.ticket,
            SnapshotState::InFlight(ticket) => *ticket,
            _ => return Completion::Stale,
        };
        if outstanding != ticket {
            return Completion::Stale;
        }
        match result {
            Ok(snapshot) => {
                self.state = SnapshotState::Ready(snapshot);
                Completion::Stored
            }
            Err(_) => {
                self.state = SnapshotState::Failed;
                Completion::Failed
            }
        }
    }

    /// The cached image, if enabled and ready.
    #[must_use]
    pub fn ready(&self) -> Option<&Snapshot> {
        match &self.state {
            SnapshotState::Ready(snapshot) if self.enabled => Some(snapshot),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> Snapshot {
        Snapshot {
            image: vec![1, 2, 3],
            size: Size::new(1600.0, 1280.0),
        }
    }

    #[test]
    fn disabled_cache_never_queues() {
        let mut cache = SnapshotCache::new(false);
        assert!(!cache.queue(SnapshotTicket::new(1), Size::new(800.0, 640.0), 2.0));
        assert_eq!(cache.take_request(), None);
    }

    #[test]
    fn request_is_taken_once_and_sized_at_resolution() {
        let mut cache = SnapshotCache::new(true);
        assert!(cache.queue(SnapshotTicket::new(1), Size::new(800.0, 640.0), 2.0));
        let request = cache.take_request().unwrap();
        assert_eq!(request.size, Size::new(1600.0, 1280.0));
        assert!(request.transparent_background);
        assert!(request.include_cross_origin);
        assert_eq!(cache.take_request(), None);
        assert_eq!(cache.state(), &SnapshotState::InFlight(SnapshotTicket::new(1)));
    }

    #[test]
    fn completion_with_matching_ticket_is_stored() {
        let mut cache = SnapshotCache::new(true);
        cache.queue(SnapshotTicket::new(3), Size::new(800.0, 640.0), 2.0);
        let request = cache.take_request().unwrap();
        assert_eq!(cache.complete(request.ticket, Ok(image())), Completion::Stored);
        assert_eq!(cache.ready(), Some(&image()));
    }

    #[test]
    fn stale_ticket_is_dropped() {
        let mut cache = SnapshotCache::new(true);
        cache.queue(SnapshotTicket::new(3), Size::new(800.0, 640.0), 2.0);
        cache.take_request();
        assert_eq!(
            cache.complete(SnapshotTicket::new(2), Ok(image())),
            Completion::Stale
        );
        assert_eq!(cache.ready(), None);
    }

    #[test]
    fn failure_is_permanent_for_the_mount() {
        let mut cache = SnapshotCache::new(true);
        cache.queue(SnapshotTicket::new(1), Size::new(800.0, 640.0), 2.0);
        cache.take_request();
        assert_eq!(
            cache.complete(
                SnapshotTicket::new(1),
                Err(RasterizeError::Failed("boom".into()))
            ),
            Completion::Failed
        );
        assert!(!cache.queue(SnapshotTicket::new(1), Size::new(800.0, 640.0), 2.0));
        assert_eq!(cache.ready(), None);

        cache.invalidate();
        assert!(cache.queue(SnapshotTicket::new(2), Size::new(800.0, 640.0), 2.0));
    }

    #[test]
    fn disabling_drops_in_flight_request() {
        let mut cache = SnapshotCache::new(true);
        cache.queue(SnapshotTicket::new(1), Size::new(800.0, 640.0), 2.0);
        cache.take_request();
        cache.set_enabled(false);
        assert_eq!(
            cache.complete(SnapshotTicket::new(1), Ok(image())),
            Completion::Stale
        );
    }
}

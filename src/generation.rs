use tracing::debug;

/// Token identifying one load cycle of a [`ViewState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

/// Holds the value of the most recent load cycle.
///
/// Each selection change calls [`ViewState::begin`] and tags its in-flight
/// requests with the returned generation. A result is only stored when it
/// belongs to the latest generation, so a slow response for an older
/// selection cannot overwrite a newer one.
#[derive(Debug)]
pub struct ViewState<T> {
    latest: Generation,
    current: Option<T>,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            latest: Generation(0),
            current: None,
        }
    }
}

impl<T> ViewState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load cycle. Every earlier generation becomes stale.
    pub fn begin(&mut self) -> Generation {
        self.latest = Generation(self.latest.0 + 1);
        self.latest
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation == self.latest
    }

    /// Store `value` if `generation` is still current. Returns whether the
    /// value was kept.
    pub fn accept(&mut self, generation: Generation, value: T) -> bool {
        if !self.is_current(generation) {
            debug!(
                stale = generation.0,
                latest = self.latest.0,
                "discarding stale result"
            );
            return false;
        }
        self.current = Some(value);
        true
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }
}

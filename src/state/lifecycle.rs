/// Progress of one asynchronous operation site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Idle,
    Pending,
    Success,
    Failed,
}

impl Lifecycle {
    pub fn is_pending(&self) -> bool {
        matches!(self, Lifecycle::Pending)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Lifecycle::Idle => "Idle",
            Lifecycle::Pending => "Loading",
            Lifecycle::Success => "Ready",
            Lifecycle::Failed => "Failed",
        }
    }
}

/// Token identifying one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Issues monotonically increasing generations.
///
/// Only a completion carrying the latest generation may be applied, so an
/// older response that arrives late never overwrites newer state.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Generation {
        self.latest += 1;
        Generation(self.latest)
    }

    /// Invalidate whatever is in flight without starting a new request
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.latest
    }
}

use crate::types::ScreenEvent;

/// Destination for screen events. Delivery guarantees belong to the sink.
pub trait AnalyticsSink {
    fn record(&mut self, event: ScreenEvent);
}

impl<S: AnalyticsSink + ?Sized> AnalyticsSink for &mut S {
    fn record(&mut self, event: ScreenEvent) {
        (**self).record(event);
    }
}

impl<S: AnalyticsSink + ?Sized> AnalyticsSink for Box<S> {
    fn record(&mut self, event: ScreenEvent) {
        (**self).record(event);
    }
}

/// In-memory sink that keeps every recorded event in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    events: Vec<ScreenEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ScreenEvent] {
        &self.events
    }

    /// Drain the recorded events, leaving the sink empty.
    pub fn take(&mut self) -> Vec<ScreenEvent> {
        std::mem::take(&mut self.events)
    }
}

impl AnalyticsSink for RecordingSink {
    fn record(&mut self, event: ScreenEvent) {
        self.events.push(event);
    }
}

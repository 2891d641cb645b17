use crate::message::Messages;

/// A driver is whatever sits between the frontend and the user, such as a
/// terminal or a test harness. It receives every batch of messages produced
/// while processing a source.
pub trait Driver {
    fn report(&mut self, messages: Messages);
}

impl Driver for Messages {
    fn report(&mut self, messages: Messages) {
        self.merge(messages);
    }
}

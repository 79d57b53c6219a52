//! The bounded handoff between the copier and its consumer.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::sync::mpsc::{Receiver, SyncSender, sync_channel};

/// Number of bytes written to the output in one copy iteration.
pub type ByteEvent = usize;

/// Sending half of the event channel, owned by the copier.
pub type EventSender = SyncSender<ByteEvent>;

/// Receiving half of the event channel, owned by the consumer.
pub type EventReceiver = Receiver<ByteEvent>;

/// Only one event may be waiting at a time; the copier blocks on the next.
const EVENT_CAPACITY: usize = 1;

/// Create the capacity-1 event channel.
///
/// Events arrive in the order they were sent. Dropping the sender closes
/// the channel, which is how the receiver learns the copy has finished.
#[must_use]
pub fn event_channel() -> (EventSender, EventReceiver) {
    sync_channel(EVENT_CAPACITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::TrySendError;

    #[test]
    fn test_event_channel_holds_one_event() {
        let (sender, receiver) = event_channel();

        sender.try_send(1).unwrap();
        assert!(matches!(sender.try_send(2), Err(TrySendError::Full(2))));

        assert_eq!(receiver.recv().unwrap(), 1);
        sender.try_send(3).unwrap();
        assert_eq!(receiver.recv().unwrap(), 3);
    }

    #[test]
    fn test_event_channel_closes_when_sender_dropped() {
        let (sender, receiver) = event_channel();

        sender.send(7).unwrap();
        drop(sender);

        assert_eq!(receiver.iter().collect::<Vec<_>>(), vec![7]);
    }
}

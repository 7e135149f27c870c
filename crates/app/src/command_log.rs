//! In-process command publisher that keeps the most recent commands.
//!
//! Used in place of the broker when MQTT is disabled, and as a recorder in
//! tests: every published command is logged and retained (up to a fixed
//! capacity) so it can be inspected.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Mutex, PoisonError};

use homeswitch_domain::command::DeviceStatus;
use homeswitch_domain::error::HomeSwitchError;

use crate::ports::CommandPublisher;

/// One command as it was handed to the publisher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedCommand {
    pub topic: String,
    pub status: DeviceStatus,
}

/// Bounded, in-memory record of published commands.
///
/// Once `capacity` entries are held, the oldest one is dropped for each new one.
#[derive(Debug)]
pub struct CommandLog {
    capacity: usize,
    entries: Mutex<VecDeque<PublishedCommand>>,
}

impl CommandLog {
    /// Create a log keeping at most `capacity` commands (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Snapshot of retained commands, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<PublishedCommand> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.iter().cloned().collect()
    }
}

impl CommandPublisher for CommandLog {
    fn publish(
        &self,
        topic: &str,
        status: DeviceStatus,
    ) -> impl Future<Output = Result<(), HomeSwitchError>> + Send {
        let topic = topic.to_string();
        async move {
            tracing::info!(%topic, payload = status.as_str(), "publishing command");
            let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
            if entries.len() == self.capacity {
                entries.pop_front();
            }
            entries.push_back(PublishedCommand { topic, status });
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_record_published_commands_in_order() {
        let log = CommandLog::new(4);

        log.publish("home/device/a", DeviceStatus::On).await.unwrap();
        log.publish("home/device/b", DeviceStatus::Off).await.unwrap();

        let topics: Vec<_> = log.entries().into_iter().map(|e| e.topic).collect();
        assert_eq!(topics, ["home/device/a", "home/device/b"]);
    }

    #[tokio::test]
    async fn should_drop_oldest_entry_when_full() {
        let log = CommandLog::new(2);

        for topic in ["t/1", "t/2", "t/3"] {
            log.publish(topic, DeviceStatus::On).await.unwrap();
        }

        let topics: Vec<_> = log.entries().into_iter().map(|e| e.topic).collect();
        assert_eq!(topics, ["t/2", "t/3"]);
    }

    #[tokio::test]
    async fn should_record_only_once_the_publish_is_awaited() {
        let log = CommandLog::new(4);

        let pending = log.publish("home/device/a", DeviceStatus::On);
        assert!(log.entries().is_empty());

        pending.await.unwrap();
        assert_eq!(log.entries().len(), 1);
    }

    #[test]
    fn should_keep_at_least_one_entry() {
        let log = CommandLog::new(0);
        assert_eq!(log.capacity, 1);
    }
}

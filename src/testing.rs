//! Test doubles shared by the unit-test modules.

use std::cell::RefCell;

use crate::error::ConfigError;
use crate::notifications::{Notification, Notifier};
use crate::storage::KeyValueStore;

#[derive(Default)]
pub struct RecordingNotifier {
    sent: RefCell<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.sent.borrow().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.sent.borrow_mut().push(notification);
    }
}

/// Reads nothing, refuses every write.
pub struct FailingStorage;

impl KeyValueStore for FailingStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, ConfigError> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), ConfigError> {
        Err(ConfigError::StorageWrite("QuotaExceededError".into()))
    }
}

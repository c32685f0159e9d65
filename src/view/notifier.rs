use async_trait::async_trait;
use log::{info, warn};

/// Fire-and-forget toast messages for terminal outcomes and rejected input.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn success(&self, message: String);
    async fn error(&self, message: String);
}

pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn success(&self, message: String) {
        info!("notify success: {}", message);
        println!("✅ {}", message);
    }

    async fn error(&self, message: String) {
        warn!("notify error: {}", message);
        println!("❌ {}", message);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct RecordingNotifier {
        pub successes: Mutex<Vec<String>>,
        pub errors: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        pub fn successes(&self) -> Vec<String> {
            self.successes.lock().unwrap().clone()
        }

        pub fn errors(&self) -> Vec<String> {
            self.errors.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn success(&self, message: String) {
            self.successes.lock().unwrap().push(message);
        }

        async fn error(&self, message: String) {
            self.errors.lock().unwrap().push(message);
        }
    }
}

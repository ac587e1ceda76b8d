use license_sniffer::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ProgressReporter for testing that captures messages
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// Identities passed to `report_module`, in the order they were visited
    pub fn visited_modules(&self) -> Vec<String> {
        self.get_messages()
            .iter()
            .filter_map(|message| message.strip_prefix("Module: "))
            .map(|entry| entry.split_once(' ').map_or(entry, |(_, identity)| identity).to_string())
            .collect()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_module(&self, visited: usize, identity: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Module: {} {}", visited, identity));
    }

    fn report_error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Completed: {}", message));
    }
}

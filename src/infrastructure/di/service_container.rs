//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{DictionaryService, VisualizerService};
use crate::config::Settings;
use crate::infrastructure::store::FileWordStore;
use crate::infrastructure::traits::{RealFileSystem, WordStore};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Trie plus word list persistence
    pub dictionary: DictionaryService,

    /// Layout, highlight and status for drawing
    pub visualizer: VisualizerService,
}

impl ServiceContainer {
    /// Create a new service container backed by the configured word file.
    pub fn new(settings: &Settings) -> Self {
        let store = Arc::new(FileWordStore::new(
            settings.data_file.clone(),
            Arc::new(RealFileSystem),
        ));
        Self::with_store(settings, store)
    }

    /// Create a service container over a custom store (for testing).
    pub fn with_store(settings: &Settings, store: Arc<dyn WordStore>) -> Self {
        Self {
            dictionary: DictionaryService::open(store),
            visualizer: VisualizerService::new(settings.layout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LayoutConfig;
    use crate::infrastructure::MemoryWordStore;

    #[test]
    fn given_settings_and_store_when_wiring_then_services_use_both() {
        let settings = Settings {
            layout: LayoutConfig {
                panel_width: 800,
                ..LayoutConfig::default()
            },
            ..Settings::default()
        };
        let store = Arc::new(MemoryWordStore::with_words(["cat", "car"]));

        let mut services = ServiceContainer::with_store(&settings, store);
        services.visualizer.refresh(services.dictionary.trie());

        assert_eq!(services.dictionary.word_count(), 2);
        let snapshot = services.visualizer.snapshot();
        assert_eq!(snapshot.panel_width, 800);
        assert_eq!((snapshot.nodes[0].x, snapshot.nodes[0].y), (400, 70));
    }
}

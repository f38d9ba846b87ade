//! In-memory adapter.

use std::sync::{Mutex, MutexGuard, PoisonError};

use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};

use super::{Adapter, Composition, FileScope, IdentOption, ProtocolError};
use crate::block::Css;
use crate::config::CollectorConfig;

/// A registered composition and whether any style referenced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionEntry {
    pub composition: Composition,
    pub used: bool,
}

#[derive(Debug, Default)]
struct ScopeEntry {
    closed: bool,
    blocks: Vec<Css>,
}

#[derive(Debug, Default)]
struct CollectorState {
    scopes: IndexMap<FileScope, ScopeEntry>,
    class_names: IndexSet<String>,
    compositions: IndexMap<String, CompositionEntry>,
}

/// An [`Adapter`] that keeps everything it receives in memory.
///
/// Blocks are stored per scope in the order they were appended. Scopes,
/// class names and compositions keep first-seen order.
///
/// # Example
///
/// ```rust
/// use cssforge::{Adapter, Collector, Composition, FileScope};
///
/// let collector = Collector::new();
/// collector.register_class_name("button");
/// collector.register_composition(Composition::new("button_primary", "button primary")).unwrap();
///
/// collector.mark_composition_used("button_primary");
/// collector.mark_composition_used("never-registered");
///
/// assert_eq!(collector.class_names(), vec!["button".to_string()]);
/// assert!(collector.unused_compositions().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct Collector {
    config: CollectorConfig,
    state: Mutex<CollectorState>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CollectorConfig) -> Self {
        Self {
            config,
            state: Mutex::new(CollectorState::default()),
        }
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    // A panic while holding the lock cannot leave the state half-updated:
    // every mutation is a single insert or push.
    fn lock(&self) -> MutexGuard<'_, CollectorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the blocks appended to `scope`, in append order.
    pub fn css_for(&self, scope: &FileScope) -> Vec<Css> {
        self.lock()
            .scopes
            .get(scope)
            .map(|entry| entry.blocks.clone())
            .unwrap_or_default()
    }

    /// Returns every scope seen so far, open or closed.
    pub fn scopes(&self) -> Vec<FileScope> {
        self.lock().scopes.keys().cloned().collect()
    }

    /// Returns `true` once `scope` has ended.
    pub fn is_closed(&self, scope: &FileScope) -> bool {
        self.lock()
            .scopes
            .get(scope)
            .map_or(false, |entry| entry.closed)
    }

    pub fn class_names(&self) -> Vec<String> {
        self.lock().class_names.iter().cloned().collect()
    }

    pub fn compositions(&self) -> Vec<CompositionEntry> {
        self.lock().compositions.values().cloned().collect()
    }

    /// Returns the compositions nothing has marked as used.
    pub fn unused_compositions(&self) -> Vec<Composition> {
        self.lock()
            .compositions
            .values()
            .filter(|entry| !entry.used)
            .map(|entry| entry.composition.clone())
            .collect()
    }
}

impl Adapter for Collector {
    fn append_css(&self, css: Css, scope: &FileScope) -> Result<(), ProtocolError> {
        let mut state = self.lock();
        if !state.scopes.contains_key(scope) {
            debug!("opening file scope {}", scope);
        }
        let entry = state.scopes.entry(scope.clone()).or_default();
        if entry.closed {
            return Err(ProtocolError::ScopeClosed(scope.clone()));
        }
        trace!("{}: appending {} block", scope, css.kind());
        entry.blocks.push(css);
        Ok(())
    }

    fn register_class_name(&self, class_name: &str) {
        if self.lock().class_names.insert(class_name.to_string()) {
            trace!("registered class name '{}'", class_name);
        }
    }

    fn register_composition(&self, composition: Composition) -> Result<(), ProtocolError> {
        let mut state = self.lock();
        if let Some(existing) = state.compositions.get(&composition.identifier) {
            if existing.composition.class_list == composition.class_list {
                return Ok(());
            }
            return Err(ProtocolError::CompositionConflict {
                identifier: composition.identifier,
                existing: existing.composition.class_list.clone(),
                conflicting: composition.class_list,
            });
        }
        debug!(
            "registered composition '{}' as '{}'",
            composition.identifier, composition.class_list
        );
        state.compositions.insert(
            composition.identifier.clone(),
            CompositionEntry {
                composition,
                used: false,
            },
        );
        Ok(())
    }

    fn mark_composition_used(&self, identifier: &str) {
        match self.lock().compositions.get_mut(identifier) {
            Some(entry) => entry.used = true,
            None => debug!("ignoring usage of unknown composition '{}'", identifier),
        }
    }

    fn on_end_file_scope(&self, scope: &FileScope) -> Result<(), ProtocolError> {
        let mut state = self.lock();
        let entry = state.scopes.entry(scope.clone()).or_default();
        if entry.closed {
            return Err(ProtocolError::ScopeAlreadyClosed(scope.clone()));
        }
        entry.closed = true;
        debug!("closed file scope {} with {} blocks", scope, entry.blocks.len());
        Ok(())
    }

    fn ident_option(&self) -> IdentOption {
        self.config.ident_option
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{GlobalStyleRule, StyleRule};
    use crate::{ImportRule, Property};

    fn scope() -> FileScope {
        FileScope::new("src/a.css.ts")
    }

    #[test]
    fn test_append_preserves_order_and_duplicates() {
        let collector = Collector::new();
        let block = Css::local(".a", StyleRule::new().property(Property::Color, "red"));

        collector.append_css(block.clone(), &scope()).unwrap();
        collector
            .append_css(Css::import(ImportRule::new("reset.css")), &scope())
            .unwrap();
        collector.append_css(block.clone(), &scope()).unwrap();

        let blocks = collector.css_for(&scope());
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], block);
        assert_eq!(blocks[2], block);
    }

    #[test]
    fn test_append_after_close_fails() {
        let collector = Collector::new();
        collector
            .append_css(Css::global("body", GlobalStyleRule::new()), &scope())
            .unwrap();
        collector.on_end_file_scope(&scope()).unwrap();

        let err = collector
            .append_css(Css::global("html", GlobalStyleRule::new()), &scope())
            .unwrap_err();
        assert_eq!(err, ProtocolError::ScopeClosed(scope()));
        assert_eq!(collector.css_for(&scope()).len(), 1);
    }

    #[test]
    fn test_double_close_fails() {
        let collector = Collector::new();
        collector.on_end_file_scope(&scope()).unwrap();
        assert!(collector.is_closed(&scope()));
        assert_eq!(
            collector.on_end_file_scope(&scope()),
            Err(ProtocolError::ScopeAlreadyClosed(scope()))
        );
    }

    #[test]
    fn test_scopes_are_independent() {
        let collector = Collector::new();
        let other = FileScope::new("src/a.css.ts").with_package("other");
        collector.on_end_file_scope(&scope()).unwrap();

        collector
            .append_css(Css::global("body", GlobalStyleRule::new()), &other)
            .unwrap();
        assert!(!collector.is_closed(&other));
        assert_eq!(collector.scopes(), vec![scope(), other]);
    }

    #[test]
    fn test_class_names_are_idempotent() {
        let collector = Collector::new();
        collector.register_class_name("a");
        collector.register_class_name("b");
        collector.register_class_name("a");
        assert_eq!(collector.class_names(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_composition_registration() {
        let collector = Collector::new();
        let composition = Composition::new("x", "a b");
        collector.register_composition(composition.clone()).unwrap();
        collector.register_composition(composition.clone()).unwrap();
        assert_eq!(collector.compositions().len(), 1);

        let err = collector
            .register_composition(Composition::new("x", "a c"))
            .unwrap_err();
        assert_eq!(
            err,
            ProtocolError::CompositionConflict {
                identifier: "x".to_string(),
                existing: "a b".to_string(),
                conflicting: "a c".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_usage_creates_nothing() {
        let collector = Collector::new();
        collector.mark_composition_used("never-registered");
        assert!(collector.compositions().is_empty());

        collector
            .register_composition(Composition::new("never-registered", "a"))
            .unwrap();
        assert_eq!(collector.unused_compositions().len(), 1);

        collector.mark_composition_used("never-registered");
        assert!(collector.compositions()[0].used);
    }

    #[test]
    fn test_ident_option_comes_from_config() {
        assert_eq!(Collector::new().ident_option(), IdentOption::Debug);
        let short = Collector::with_config(
            CollectorConfig::default().with_ident_option(IdentOption::Short),
        );
        assert_eq!(short.ident_option(), IdentOption::Short);
    }

    #[test]
    fn test_concurrent_scopes() {
        let collector = std::sync::Arc::new(Collector::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let collector = collector.clone();
                std::thread::spawn(move || {
                    let scope = FileScope::new(format!("file{}.ts", i));
                    for _ in 0..10 {
                        collector
                            .append_css(Css::global("body", GlobalStyleRule::new()), &scope)
                            .unwrap();
                    }
                    collector.on_end_file_scope(&scope).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(collector.scopes().len(), 4);
        for scope in collector.scopes() {
            assert_eq!(collector.css_for(&scope).len(), 10);
            assert!(collector.is_closed(&scope));
        }
    }
}

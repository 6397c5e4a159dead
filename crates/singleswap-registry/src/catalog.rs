// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog of context implementations available to this build.
//!
//! Maps a fully-qualified implementation id to its zero-argument factory. The
//! variant table only names implementations; whether one can actually be built
//! is decided here, at registry load time.

use std::any::Any;
use std::cell::Cell;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Once};

use singleswap_core::{ContextFactory, HotswapContext, SwapError};

thread_local! {
    /// Set while this thread runs a factory under [`ContextCatalog::instantiate`].
    static CONSTRUCTING: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Wrap the current panic hook so factory panics are not printed.
///
/// They are reported through the diagnostic sink instead. Panics on other
/// threads, or outside a factory, still reach the previous hook.
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !CONSTRUCTING.with(Cell::get) {
                previous(info);
            }
        }));
    });
}

/// Factories keyed by implementation id.
#[derive(Clone, Default)]
pub struct ContextCatalog {
    factories: HashMap<String, ContextFactory>,
}

impl std::fmt::Debug for ContextCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextCatalog")
            .field("implementations", &self.ids())
            .finish()
    }
}

impl ContextCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog of the contexts compiled into `singleswap-lang`.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (id, factory) in singleswap_lang::builtin_factories() {
            catalog.register(id, factory);
        }
        catalog
    }

    /// Register (or replace) the factory for `implementation`.
    pub fn register(&mut self, implementation: &str, factory: ContextFactory) {
        self.factories.insert(implementation.to_string(), factory);
    }

    /// Register a closure as the factory for `implementation`.
    pub fn register_fn<F>(&mut self, implementation: &str, factory: F)
    where
        F: Fn() -> Result<Arc<dyn HotswapContext>, SwapError> + Send + Sync + 'static,
    {
        self.register(implementation, Arc::new(factory));
    }

    pub fn contains(&self, implementation: &str) -> bool {
        self.factories.contains_key(implementation)
    }

    /// Registered implementation ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Construct the context registered under `implementation`.
    ///
    /// An unknown id, a factory error and a factory panic all come back as
    /// `Err`; nothing unwinds past this call.
    pub fn instantiate(&self, implementation: &str) -> Result<Arc<dyn HotswapContext>, SwapError> {
        let factory = self
            .factories
            .get(implementation)
            .ok_or_else(|| SwapError::ImplementationNotFound {
                implementation: implementation.to_string(),
            })?;

        install_quiet_hook();
        let outer = CONSTRUCTING.with(|flag| flag.replace(true));
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| factory()));
        CONSTRUCTING.with(|flag| flag.set(outer));

        match outcome {
            Ok(result) => result,
            Err(payload) => Err(SwapError::ConstructionPanicked {
                implementation: implementation.to_string(),
                message: panic_message(payload.as_ref()),
            }),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use singleswap_core::Language;
    use singleswap_test_utils::{failing_factory, panicking_factory, MockContext};

    #[test]
    fn builtin_catalog_lists_compiled_languages() {
        let catalog = ContextCatalog::builtin();
        assert_eq!(
            catalog.contains(singleswap_lang::ids::JAVA),
            cfg!(feature = "java")
        );
        assert_eq!(
            catalog.contains(singleswap_lang::ids::KOTLIN),
            cfg!(feature = "kotlin")
        );
    }

    #[test]
    fn instantiate_registered_closure() {
        let mut catalog = ContextCatalog::new();
        catalog.register_fn("test::Mock", || {
            Ok(Arc::new(MockContext::accepting_all("mock", Language::Java)))
        });

        let context = catalog.instantiate("test::Mock").unwrap();
        assert_eq!(context.name(), "mock");
    }

    #[test]
    fn unknown_implementation_is_not_found() {
        let err = ContextCatalog::new().instantiate("missing::Type").unwrap_err();
        assert!(matches!(err, SwapError::ImplementationNotFound { implementation } if implementation == "missing::Type"));
    }

    #[test]
    fn factory_error_is_returned() {
        let mut catalog = ContextCatalog::new();
        catalog.register("test::Failing", failing_factory("no runtime"));
        let err = catalog.instantiate("test::Failing").unwrap_err();
        assert!(err.to_string().contains("no runtime"));
    }

    #[test]
    fn factory_panic_is_caught() {
        let mut catalog = ContextCatalog::new();
        catalog.register("test::Panicking", panicking_factory("constructor exploded"));
        let err = catalog.instantiate("test::Panicking").unwrap_err();
        match err {
            SwapError::ConstructionPanicked { message, .. } => {
                assert!(message.contains("constructor exploded"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn factory_runs_with_quiet_panics_and_flag_is_restored() {
        let mut catalog = ContextCatalog::new();
        catalog.register_fn("test::Flagged", || {
            assert!(CONSTRUCTING.with(Cell::get));
            Ok(Arc::new(MockContext::accepting_all("flagged", Language::Java)))
        });
        catalog.register("test::Panicking", panicking_factory("boom"));

        assert!(catalog.instantiate("test::Flagged").is_ok());
        assert!(!CONSTRUCTING.with(Cell::get));

        assert!(catalog.instantiate("test::Panicking").is_err());
        assert!(!CONSTRUCTING.with(Cell::get));
        assert!(QUIET_HOOK.is_completed());
    }

    #[test]
    fn panics_outside_factories_still_unwind_normally() {
        let mut catalog = ContextCatalog::new();
        catalog.register("test::Panicking", panicking_factory("inside"));
        assert!(catalog.instantiate("test::Panicking").is_err());

        let outside = panic::catch_unwind(|| panic!("outside"));
        assert!(outside.is_err());
        assert!(!CONSTRUCTING.with(Cell::get));
    }

    #[test]
    fn ids_are_sorted() {
        let mut catalog = ContextCatalog::new();
        catalog.register("b", failing_factory("x"));
        catalog.register("a", failing_factory("x"));
        assert_eq!(catalog.ids(), vec!["a", "b"]);
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
    }
}

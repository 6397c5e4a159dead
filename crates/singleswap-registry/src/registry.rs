// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The variant registry and its process-wide instance.

use std::sync::{Arc, OnceLock};

use singleswap_core::{CapabilityProbe, DiagnosticSink, HotswapContext, SourceFile};

use crate::catalog::ContextCatalog;
use crate::variant::{Variant, VariantSpec, BUILTIN_VARIANTS};

/// Ordered, immutable set of loaded variants.
///
/// Loading runs the construction protocol once per variant; afterwards the
/// registry is read-only and can be shared freely between threads.
#[derive(Debug)]
pub struct VariantRegistry {
    variants: Vec<Variant>,
}

impl VariantRegistry {
    /// Load `specs` in declaration order.
    ///
    /// Capability state is read exactly once, here. A failing variant is
    /// reported to `sink` and does not stop the others from loading.
    pub fn load<P, S>(specs: &[VariantSpec], catalog: &ContextCatalog, probe: &P, sink: &S) -> Self
    where
        P: CapabilityProbe + ?Sized,
        S: DiagnosticSink + ?Sized,
    {
        let variants: Vec<Variant> = specs
            .iter()
            .map(|spec| Variant::load(*spec, catalog, probe, sink))
            .collect();

        tracing::info!(
            variants = variants.len(),
            ready = variants.iter().filter(|v| v.context_ref().is_some()).count(),
            "variant registry loaded"
        );

        Self { variants }
    }

    /// Load the built-in variant table against the built-in catalog.
    pub fn builtin<P, S>(probe: &P, sink: &S) -> Self
    where
        P: CapabilityProbe + ?Sized,
        S: DiagnosticSink + ?Sized,
    {
        Self::load(BUILTIN_VARIANTS, &ContextCatalog::builtin(), probe, sink)
    }

    /// All variants in declaration order.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn get(&self, name: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.name() == name)
    }

    /// Stored context of the variant called `name`. Pure read.
    pub fn strategy_of(&self, name: &str) -> Option<Arc<dyn HotswapContext>> {
        self.get(name).and_then(Variant::context)
    }

    /// The first variant without an implementation.
    pub fn sentinel(&self) -> Option<&Variant> {
        self.variants.iter().find(|v| v.spec().is_sentinel())
    }

    /// Context for `file`, or `None` if nothing applies.
    ///
    /// `None` is the sentinel's (empty) result. An absent file returns it
    /// without consulting any context.
    pub fn resolve(&self, file: Option<&SourceFile>) -> Option<Arc<dyn HotswapContext>> {
        self.resolve_variant(file).and_then(Variant::context)
    }

    /// The variant whose context accepted `file`.
    ///
    /// Empty variants are skipped; the first applicable context wins.
    pub fn resolve_variant(&self, file: Option<&SourceFile>) -> Option<&Variant> {
        let file = file?;
        self.variants.iter().find(|variant| {
            variant
                .context_ref()
                .is_some_and(|context| context.is_applicable(file))
        })
    }
}

static GLOBAL: OnceLock<VariantRegistry> = OnceLock::new();

/// Load the process-wide registry from the built-in table, once.
///
/// The first call decides the registry's contents. Later calls return the same
/// instance and ignore their arguments, so plugins toggled after the first
/// call are not picked up.
pub fn init_global<P, S>(probe: &P, sink: &S) -> &'static VariantRegistry
where
    P: CapabilityProbe + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    if let Some(registry) = GLOBAL.get() {
        tracing::debug!("variant registry already loaded, capability state not re-read");
        return registry;
    }
    GLOBAL.get_or_init(|| VariantRegistry::builtin(probe, sink))
}

/// The process-wide registry, if it has been loaded.
pub fn global() -> Option<&'static VariantRegistry> {
    GLOBAL.get()
}

/// Resolve `file` against the process-wide registry.
///
/// Returns `None` before [`init_global`] has run.
pub fn find_context(file: Option<&SourceFile>) -> Option<Arc<dyn HotswapContext>> {
    global().and_then(|registry| registry.resolve(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use singleswap_core::Language;
    use singleswap_test_utils::{
        context_factory, failing_factory, panicking_factory, MockContext, MockProbe,
        RecordingSink,
    };

    const JAVA: VariantSpec = VariantSpec::new("java", "test::Java", Some("plugin.java"));
    const GROOVY: VariantSpec = VariantSpec::new("groovy", "test::Groovy", Some("plugin.groovy"));
    const KOTLIN: VariantSpec = VariantSpec::new("kotlin", "test::Kotlin", Some("plugin.kotlin"));

    struct Fixture {
        java: Arc<MockContext>,
        groovy: Arc<MockContext>,
        kotlin: Arc<MockContext>,
        catalog: ContextCatalog,
    }

    fn fixture() -> Fixture {
        let java = Arc::new(MockContext::new("java", Language::Java, &["java"]));
        let groovy = Arc::new(MockContext::new("groovy", Language::Groovy, &["groovy"]));
        let kotlin = Arc::new(MockContext::new("kotlin", Language::Kotlin, &["kt"]));

        let mut catalog = ContextCatalog::new();
        catalog.register("test::Java", context_factory(java.clone()));
        catalog.register("test::Groovy", context_factory(groovy.clone()));
        catalog.register("test::Kotlin", context_factory(kotlin.clone()));

        Fixture {
            java,
            groovy,
            kotlin,
            catalog,
        }
    }

    fn specs() -> Vec<VariantSpec> {
        vec![VariantSpec::sentinel("none"), JAVA, GROOVY, KOTLIN]
    }

    fn is_same(a: &Arc<dyn HotswapContext>, b: &Arc<MockContext>) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
    }

    #[test]
    fn disabled_or_unknown_capability_leaves_variant_empty() {
        let f = fixture();
        let probe = MockProbe::with_enabled(&["plugin.java"]);
        let registry = VariantRegistry::load(&specs(), &f.catalog, &probe, &RecordingSink::new());

        assert!(registry.strategy_of("java").is_some());
        assert!(registry.strategy_of("groovy").is_none());
        assert!(registry.strategy_of("kotlin").is_none());
    }

    #[test]
    fn unconditional_variant_is_populated() {
        let f = fixture();
        let spec = VariantSpec::new("java", "test::Java", None);
        let registry =
            VariantRegistry::load(&[spec], &f.catalog, &MockProbe::none(), &RecordingSink::new());
        assert!(registry.strategy_of("java").is_some());
    }

    #[test]
    fn sentinel_is_always_empty() {
        let f = fixture();
        let probe = MockProbe::with_enabled(&["plugin.java", "plugin.groovy", "plugin.kotlin"]);
        let registry = VariantRegistry::load(&specs(), &f.catalog, &probe, &RecordingSink::new());

        let sentinel = registry.sentinel().unwrap();
        assert_eq!(sentinel.name(), "none");
        assert!(sentinel.context().is_none());
        assert!(registry.strategy_of("none").is_none());
    }

    #[test]
    fn absent_file_resolves_to_nothing_without_checks() {
        let f = fixture();
        let probe = MockProbe::with_enabled(&["plugin.java", "plugin.groovy", "plugin.kotlin"]);
        let registry = VariantRegistry::load(&specs(), &f.catalog, &probe, &RecordingSink::new());

        assert!(registry.resolve(None).is_none());
        assert_eq!(f.java.check_count(), 0);
        assert_eq!(f.groovy.check_count(), 0);
        assert_eq!(f.kotlin.check_count(), 0);
    }

    #[test]
    fn java_file_resolves_to_java_context() {
        let f = fixture();
        let probe = MockProbe::with_enabled(&["plugin.java", "plugin.groovy", "plugin.kotlin"]);
        let registry = VariantRegistry::load(&specs(), &f.catalog, &probe, &RecordingSink::new());

        let file = SourceFile::new("src/Main.java");
        let context = registry.resolve(Some(&file)).unwrap();
        assert!(is_same(&context, &f.java));
        assert_eq!(registry.resolve_variant(Some(&file)).unwrap().name(), "java");
    }

    #[test]
    fn resolution_short_circuits_on_first_match() {
        let f = fixture();
        let probe = MockProbe::with_enabled(&["plugin.java", "plugin.groovy", "plugin.kotlin"]);
        let registry = VariantRegistry::load(&specs(), &f.catalog, &probe, &RecordingSink::new());

        registry.resolve(Some(&SourceFile::new("Main.java")));
        assert_eq!(f.java.check_count(), 1);
        assert_eq!(f.groovy.check_count(), 0);
        assert_eq!(f.kotlin.check_count(), 0);
    }

    #[test]
    fn disabled_kotlin_is_skipped_entirely() {
        let f = fixture();
        let probe = MockProbe::with_enabled(&["plugin.java", "plugin.groovy"]);
        let registry = VariantRegistry::load(&specs(), &f.catalog, &probe, &RecordingSink::new());

        assert!(registry.resolve(Some(&SourceFile::new("Main.kt"))).is_none());
        assert_eq!(f.kotlin.check_count(), 0);
        assert_eq!(f.java.check_count(), 1);
        assert_eq!(f.groovy.check_count(), 1);
    }

    #[test]
    fn unmatched_file_resolves_to_nothing() {
        let f = fixture();
        let probe = MockProbe::with_enabled(&["plugin.java", "plugin.groovy", "plugin.kotlin"]);
        let registry = VariantRegistry::load(&specs(), &f.catalog, &probe, &RecordingSink::new());
        assert!(registry.resolve(Some(&SourceFile::new("README.md"))).is_none());
    }

    #[test]
    fn earlier_declaration_wins() {
        let first = Arc::new(MockContext::accepting_all("first", Language::Groovy));
        let second = Arc::new(MockContext::accepting_all("second", Language::Java));
        let mut catalog = ContextCatalog::new();
        catalog.register("test::First", context_factory(first.clone()));
        catalog.register("test::Second", context_factory(second.clone()));

        let specs = [
            VariantSpec::new("first", "test::First", None),
            VariantSpec::new("second", "test::Second", None),
        ];
        let registry =
            VariantRegistry::load(&specs, &catalog, &MockProbe::none(), &RecordingSink::new());

        let context = registry.resolve(Some(&SourceFile::new("Any.java"))).unwrap();
        assert!(is_same(&context, &first));
        assert_eq!(second.check_count(), 0);
    }

    #[test]
    fn failing_construction_is_isolated() {
        let f = fixture();
        let mut catalog = f.catalog.clone();
        catalog.register("test::Broken", failing_factory("missing runtime"));
        catalog.register("test::Exploding", panicking_factory("constructor panicked"));

        let specs = [
            VariantSpec::sentinel("none"),
            VariantSpec::new("broken", "test::Broken", None),
            JAVA,
            VariantSpec::new("exploding", "test::Exploding", None),
            VariantSpec::new("missing", "test::DoesNotExist", None),
            KOTLIN,
        ];
        let probe = MockProbe::with_enabled(&["plugin.java", "plugin.kotlin"]);
        let sink = RecordingSink::new();
        let registry = VariantRegistry::load(&specs, &catalog, &probe, &sink);

        assert_eq!(registry.variants().len(), 6);
        assert!(registry.strategy_of("java").is_some());
        assert!(registry.strategy_of("kotlin").is_some());
        assert!(registry.strategy_of("broken").is_none());
        assert!(registry.strategy_of("exploding").is_none());
        assert!(registry.strategy_of("missing").is_none());
        assert_eq!(sink.failed_variants(), vec!["broken", "exploding", "missing"]);

        let kotlin = registry.resolve(Some(&SourceFile::new("Main.kt"))).unwrap();
        assert!(is_same(&kotlin, &f.kotlin));
    }

    #[test]
    fn capability_is_read_once_at_load() {
        let f = fixture();
        let probe = MockProbe::with_enabled(&["plugin.java"]);
        let registry = VariantRegistry::load(&specs(), &f.catalog, &probe, &RecordingSink::new());
        let queried_at_load = probe.queried();

        for _ in 0..3 {
            registry.resolve(Some(&SourceFile::new("Main.java")));
        }
        assert_eq!(probe.queried(), queried_at_load);
        assert_eq!(
            queried_at_load,
            vec!["plugin.java", "plugin.groovy", "plugin.kotlin"]
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        const EXTENSIONS: &[&str] = &["java", "groovy", "kt", "md", "txt"];

        proptest! {
            #[test]
            fn resolve_is_idempotent(
                java in any::<bool>(),
                groovy in any::<bool>(),
                kotlin in any::<bool>(),
                ext in prop::sample::select(EXTENSIONS),
            ) {
                let f = fixture();
                let mut enabled = Vec::new();
                if java { enabled.push("plugin.java"); }
                if groovy { enabled.push("plugin.groovy"); }
                if kotlin { enabled.push("plugin.kotlin"); }
                let probe = MockProbe::with_enabled(&enabled);
                let registry = VariantRegistry::load(&specs(), &f.catalog, &probe, &RecordingSink::new());

                let file = SourceFile::new(format!("Some.{ext}"));
                let first = registry.resolve(Some(&file)).map(|c| c.name().to_string());
                let second = registry.resolve(Some(&file)).map(|c| c.name().to_string());
                prop_assert_eq!(first, second);
            }

            #[test]
            fn first_declared_applicable_variant_wins(
                accepting in prop::collection::vec(any::<bool>(), 1..6),
            ) {
                let mut catalog = ContextCatalog::new();
                let names: Vec<&'static str> = ["v0", "v1", "v2", "v3", "v4", "v5"][..accepting.len()].to_vec();
                let ids: Vec<&'static str> = ["t0", "t1", "t2", "t3", "t4", "t5"][..accepting.len()].to_vec();
                let mut specs = Vec::new();
                for (i, accepts) in accepting.iter().enumerate() {
                    let context = if *accepts {
                        MockContext::accepting_all(names[i], Language::Java)
                    } else {
                        MockContext::rejecting_all(names[i], Language::Java)
                    };
                    catalog.register(ids[i], context_factory(Arc::new(context)));
                    specs.push(VariantSpec::new(names[i], ids[i], None));
                }

                let registry = VariantRegistry::load(&specs, &catalog, &MockProbe::none(), &RecordingSink::new());
                let resolved = registry
                    .resolve(Some(&SourceFile::new("X.java")))
                    .map(|c| c.name().to_string());
                let expected = accepting.iter().position(|a| *a).map(|i| names[i].to_string());
                prop_assert_eq!(resolved, expected);
            }
        }
    }
}

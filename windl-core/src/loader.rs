//! Library resolution and the process-wide binding cache.
//!
//! [`Loader`] turns a [`SignatureTable`] (optionally narrowed to a selection
//! of function names) into a [`LibraryBinding`]: the opened library plus one
//! resolved address per selected export.  Resolution goes through the
//! [`FfiBridge`] trait; [`LibloadingBridge`] is the default implementation
//! and test doubles substitute freely.
//!
//! # Singleton mode
//!
//! With `LoadSettings { singleton: true }` the loader consults its
//! [`LibraryCache`]: the first load of a name resolves and inserts, every
//! later singleton load of that name returns the cached binding **unchanged**
//! -- the selection and table arguments of the later call are ignored by
//! contract.  The whole lookup-or-insert runs under one lock, so concurrent
//! first loads of the same name cannot both resolve.  Entries are never
//! evicted; teardown is process exit.

use std::collections::HashMap;
use std::ffi::c_void;
use std::sync::{Arc, OnceLock};

use log::{debug, warn};
use parking_lot::Mutex;

use crate::api::{Signature, SignatureTable};
use crate::errors::WinDlError;

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Load options, merged over the defaults by struct-update syntax:
/// `LoadSettings { singleton: true, ..LoadSettings::new() }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSettings {
    /// Route the load through the process-wide cache (default `false`).
    pub singleton: bool,
}

impl LoadSettings {
    /// The fixed default configuration.
    pub const fn new() -> Self {
        Self { singleton: false }
    }

    /// Shorthand for the cached mode.
    pub const fn cached() -> Self {
        Self { singleton: true }
    }
}

impl Default for LoadSettings {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Resolved bindings
// ---------------------------------------------------------------------------

/// One resolved export: its declared signature and raw address.
#[derive(Debug)]
pub struct ResolvedFn {
    name: &'static str,
    sig: &'static Signature,
    addr: usize,
}

impl ResolvedFn {
    pub fn new(name: &'static str, sig: &'static Signature, addr: usize) -> Self {
        Self { name, sig, addr }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn sig(&self) -> &'static Signature {
        self.sig
    }

    pub fn addr(&self) -> *const c_void {
        self.addr as *const c_void
    }

    /// Reinterpret the address as a concrete fn-pointer type.
    ///
    /// # Safety
    ///
    /// `F` must be a fn-pointer type whose ABI, return type, and parameter
    /// list match this export's declared signature.  Nothing here checks
    /// that; a mismatch corrupts the call frame exactly as in C.
    pub unsafe fn cast<F: Copy>(&self) -> F {
        assert_eq!(
            std::mem::size_of::<F>(),
            std::mem::size_of::<usize>(),
            "cast target must be pointer-sized"
        );
        unsafe { std::mem::transmute_copy(&self.addr) }
    }
}

/// The callable result of a load: an opened library and its resolved
/// exports, in selection order.
///
/// Keeps the underlying [`libloading::Library`] alive for as long as any
/// caller holds the binding, so the addresses stay valid.
#[derive(Debug)]
pub struct LibraryBinding {
    dll: String,
    functions: Vec<ResolvedFn>,
    _library: Option<libloading::Library>,
}

impl LibraryBinding {
    /// Assemble a binding.  Bridges call this; `library` is `None` for
    /// bridges that do not own an OS handle (test doubles).
    pub fn from_parts(
        dll: impl Into<String>,
        functions: Vec<ResolvedFn>,
        library: Option<libloading::Library>,
    ) -> Self {
        Self {
            dll: dll.into(),
            functions,
            _library: library,
        }
    }

    pub fn dll(&self) -> &str {
        &self.dll
    }

    pub fn get(&self, name: &str) -> Option<&ResolvedFn> {
        self.functions.iter().find(|f| f.name == name)
    }

    pub fn fn_addr(&self, name: &str) -> Option<*const c_void> {
        self.get(name).map(ResolvedFn::addr)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.iter().map(|f| f.name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

// ---------------------------------------------------------------------------
// The bridge boundary
// ---------------------------------------------------------------------------

/// The one capability the loader needs from the outside world: resolve a
/// named library into a binding for the given name -> signature mapping.
///
/// Implementations define their own failure modes; the loader propagates
/// them verbatim, no wrapping, no retry.
pub trait FfiBridge {
    fn resolve(
        &self,
        dll_name: &str,
        functions: &[(&'static str, &'static Signature)],
    ) -> Result<LibraryBinding, WinDlError>;
}

/// Default bridge backed by `libloading`.
///
/// The library name is passed through untouched; Windows appends `.dll` to
/// extension-less names on its own.
#[derive(Debug, Default)]
pub struct LibloadingBridge;

impl FfiBridge for LibloadingBridge {
    fn resolve(
        &self,
        dll_name: &str,
        functions: &[(&'static str, &'static Signature)],
    ) -> Result<LibraryBinding, WinDlError> {
        let library = unsafe { libloading::Library::new(dll_name) }.map_err(|e| {
            WinDlError::Library {
                dll: dll_name.to_owned(),
                source: e,
            }
        })?;

        let mut resolved = Vec::with_capacity(functions.len());
        for &(name, sig) in functions {
            let symbol: libloading::Symbol<'_, unsafe extern "C" fn()> =
                unsafe { library.get(name.as_bytes()) }.map_err(|e| WinDlError::Symbol {
                    name: name.to_owned(),
                    source: e,
                })?;
            resolved.push(ResolvedFn::new(name, sig, *symbol as usize));
        }

        debug!("resolved {} functions from {dll_name}", resolved.len());
        Ok(LibraryBinding::from_parts(dll_name, resolved, Some(library)))
    }
}

// ---------------------------------------------------------------------------
// Cache
// ---------------------------------------------------------------------------

/// Per-name binding cache.  An entry goes from absent to present once and
/// stays for the life of the owning loader.
#[derive(Debug, Default)]
pub struct LibraryCache {
    entries: Mutex<HashMap<String, Arc<LibraryBinding>>>,
}

impl LibraryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, dll_name: &str) -> Option<Arc<LibraryBinding>> {
        self.entries.lock().get(dll_name).cloned()
    }

    pub fn contains(&self, dll_name: &str) -> bool {
        self.entries.lock().contains_key(dll_name)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Atomic lookup-or-insert.  The lock is held across `resolve` so two
    /// racing first loads of one name cannot both resolve; the loser of the
    /// race sees the winner's entry.
    fn get_or_insert_with(
        &self,
        dll_name: &str,
        resolve: impl FnOnce() -> Result<LibraryBinding, WinDlError>,
    ) -> Result<Arc<LibraryBinding>, WinDlError> {
        let mut entries = self.entries.lock();
        if let Some(binding) = entries.get(dll_name) {
            debug!("singleton cache hit for {dll_name}");
            return Ok(Arc::clone(binding));
        }
        let binding = Arc::new(resolve()?);
        entries.insert(dll_name.to_owned(), Arc::clone(&binding));
        Ok(binding)
    }
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

/// Resolves signature tables into bindings through a bridge, with an owned
/// cache for singleton loads.
#[derive(Debug, Default)]
pub struct Loader<B = LibloadingBridge> {
    bridge: B,
    cache: LibraryCache,
}

impl Loader<LibloadingBridge> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: FfiBridge> Loader<B> {
    pub fn with_bridge(bridge: B) -> Self {
        Self {
            bridge,
            cache: LibraryCache::new(),
        }
    }

    pub fn cache(&self) -> &LibraryCache {
        &self.cache
    }

    /// Resolve `dll_name` into a binding for the selected functions.
    ///
    /// `fns` narrows the table to the listed names in selection order;
    /// names the table does not declare are skipped silently.  An empty
    /// selection takes the whole table.  With `settings.singleton`, the
    /// cache decides (a hit returns the first load's binding and ignores
    /// `fns` and `table`); without it, every call resolves fresh and the
    /// caller solely owns the result.
    pub fn load(
        &self,
        dll_name: &str,
        table: &SignatureTable,
        fns: &[&str],
        settings: LoadSettings,
    ) -> Result<Arc<LibraryBinding>, WinDlError> {
        if settings.singleton {
            self.cache.get_or_insert_with(dll_name, || {
                self.bridge.resolve(dll_name, &select_functions(table, fns))
            })
        } else {
            let binding = self.bridge.resolve(dll_name, &select_functions(table, fns))?;
            Ok(Arc::new(binding))
        }
    }
}

/// Narrow `table` to the selection, silently dropping unknown names.
///
/// An empty selection yields the full table in declaration order.
pub fn select_functions(
    table: &SignatureTable,
    fns: &[&str],
) -> Vec<(&'static str, &'static Signature)> {
    if fns.is_empty() {
        return table.entries().iter().map(|(n, sig)| (*n, sig)).collect();
    }
    let mut selected = Vec::with_capacity(fns.len());
    for &name in fns {
        match table.entry(name) {
            Some(entry) => selected.push(entry),
            None => warn!("{} does not declare {name}; skipping", table.dll()),
        }
    }
    selected
}

// ---------------------------------------------------------------------------
// Process-wide default
// ---------------------------------------------------------------------------

/// The process-wide loader backing the per-DLL `load` helpers.
pub fn default_loader() -> &'static Loader<LibloadingBridge> {
    static LOADER: OnceLock<Loader<LibloadingBridge>> = OnceLock::new();
    LOADER.get_or_init(Loader::new)
}

/// Load through [`default_loader`].
pub fn load(
    dll_name: &str,
    table: &SignatureTable,
    fns: &[&str],
    settings: LoadSettings,
) -> Result<Arc<LibraryBinding>, WinDlError> {
    default_loader().load(dll_name, table, fns, settings)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::f;
    use crate::windef::{BOOL, DWORD, HWND};
    use std::sync::atomic::{AtomicUsize, Ordering};

    static TEST_TABLE: SignatureTable = SignatureTable::new(
        "testlib",
        &[
            f("Alpha", BOOL, &[HWND]),
            f("Beta", DWORD, &[]),
            f("Gamma", BOOL, &[DWORD, DWORD]),
        ],
    );

    /// Bridge that fabricates addresses and counts resolutions.
    #[derive(Default)]
    struct CountingBridge {
        resolutions: AtomicUsize,
    }

    impl FfiBridge for CountingBridge {
        fn resolve(
            &self,
            dll_name: &str,
            functions: &[(&'static str, &'static Signature)],
        ) -> Result<LibraryBinding, WinDlError> {
            self.resolutions.fetch_add(1, Ordering::SeqCst);
            let resolved = functions
                .iter()
                .enumerate()
                .map(|(i, &(name, sig))| ResolvedFn::new(name, sig, 0x1000 + i * 0x10))
                .collect();
            Ok(LibraryBinding::from_parts(dll_name, resolved, None))
        }
    }

    /// Bridge that always fails.
    struct FailingBridge;

    impl FfiBridge for FailingBridge {
        fn resolve(
            &self,
            _dll_name: &str,
            _functions: &[(&'static str, &'static Signature)],
        ) -> Result<LibraryBinding, WinDlError> {
            Err(WinDlError::Bridge("no such library".into()))
        }
    }

    #[test]
    fn test_singleton_reuses_binding() {
        let loader = Loader::with_bridge(CountingBridge::default());
        let first = loader
            .load("testlib", &TEST_TABLE, &[], LoadSettings::cached())
            .unwrap();
        let second = loader
            .load("testlib", &TEST_TABLE, &[], LoadSettings::cached())
            .unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(loader.bridge.resolutions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_singleton_hit_ignores_later_selection() {
        let loader = Loader::with_bridge(CountingBridge::default());
        let first = loader
            .load("testlib", &TEST_TABLE, &["Alpha"], LoadSettings::cached())
            .unwrap();
        // The wider selection on the second call changes nothing.
        let second = loader
            .load(
                "testlib",
                &TEST_TABLE,
                &["Alpha", "Beta", "Gamma"],
                LoadSettings::cached(),
            )
            .unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 1);
        assert!(second.get("Beta").is_none());
    }

    #[test]
    fn test_non_singleton_resolves_fresh() {
        let loader = Loader::with_bridge(CountingBridge::default());
        let cached = loader
            .load("testlib", &TEST_TABLE, &[], LoadSettings::cached())
            .unwrap();
        let fresh = loader
            .load("testlib", &TEST_TABLE, &[], LoadSettings::new())
            .unwrap();
        let fresh2 = loader
            .load("testlib", &TEST_TABLE, &[], LoadSettings::default())
            .unwrap();
        assert!(!Arc::ptr_eq(&cached, &fresh));
        assert!(!Arc::ptr_eq(&fresh, &fresh2));
        assert_eq!(loader.bridge.resolutions.load(Ordering::SeqCst), 3);
        // The cache still holds the singleton entry only.
        assert_eq!(loader.cache().len(), 1);
    }

    #[test]
    fn test_selection_drops_unknown_names_silently() {
        let selected = select_functions(&TEST_TABLE, &["Alpha", "Gamma", "Zeta"]);
        let names: Vec<_> = selected.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["Alpha", "Gamma"]);
    }

    #[test]
    fn test_empty_selection_takes_full_table() {
        let selected = select_functions(&TEST_TABLE, &[]);
        let names: Vec<_> = selected.iter().map(|(n, _)| *n).collect();
        let declared: Vec<_> = TEST_TABLE.names().collect();
        assert_eq!(names, declared);
    }

    #[test]
    fn test_selection_preserves_caller_order() {
        let selected = select_functions(&TEST_TABLE, &["Gamma", "Alpha"]);
        let names: Vec<_> = selected.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["Gamma", "Alpha"]);
    }

    #[test]
    fn test_bridge_error_propagates_verbatim() {
        let loader = Loader::with_bridge(FailingBridge);
        let err = loader
            .load("testlib", &TEST_TABLE, &[], LoadSettings::new())
            .unwrap_err();
        assert!(matches!(err, WinDlError::Bridge(msg) if msg == "no such library"));
        // A singleton-mode failure must not poison the cache.
        let err = loader
            .load("testlib", &TEST_TABLE, &[], LoadSettings::cached())
            .unwrap_err();
        assert!(matches!(err, WinDlError::Bridge(_)));
        assert!(loader.cache().is_empty());
    }

    #[test]
    fn test_caches_are_per_loader() {
        let a = Loader::with_bridge(CountingBridge::default());
        let b = Loader::with_bridge(CountingBridge::default());
        a.load("testlib", &TEST_TABLE, &[], LoadSettings::cached())
            .unwrap();
        assert!(a.cache().contains("testlib"));
        assert!(!b.cache().contains("testlib"));
    }

    #[test]
    fn test_binding_lookup() {
        let loader = Loader::with_bridge(CountingBridge::default());
        let binding = loader
            .load("testlib", &TEST_TABLE, &["Beta"], LoadSettings::new())
            .unwrap();
        let beta = binding.get("Beta").unwrap();
        assert_eq!(beta.name(), "Beta");
        assert_eq!(beta.sig().ret, DWORD);
        assert_eq!(binding.fn_addr("Beta"), Some(0x1000 as *const _));
        assert!(binding.fn_addr("Alpha").is_none());
    }

    #[test]
    fn test_cast_calls_through() {
        extern "C" fn forty_two() -> i32 {
            42
        }
        static SIG: Signature = Signature::new(DWORD, &[]);
        let resolved = ResolvedFn::new("FortyTwo", &SIG, forty_two as usize);
        let f: extern "C" fn() -> i32 = unsafe { resolved.cast() };
        assert_eq!(f(), 42);
    }
}

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::io::Write;
use std::sync::{Arc, Mutex, Once};

use spigen_api::{
    Constructor, Diagnostic, DiagnosticSink, ElementKind, EnclosingKind, Filer, FilerError,
    Modifier, ProviderCandidate, Severity, TypeOracle, TypeRef, TypeRefKind,
};

static LOGGING: Once = Once::new();

pub fn init_test_logging() {
    LOGGING.call_once(|| {
        spigen_core::logging::try_init_stderr();
    });
}

/// In-memory stand-in for the host compiler's type system and diagnostic
/// stream.
#[derive(Default)]
pub struct FakeHost {
    next_ref: u32,
    kinds: HashMap<TypeRef, TypeRefKind>,
    names: HashMap<TypeRef, String>,
    assignable: HashSet<(TypeRef, TypeRef)>,
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn mint(&mut self, kind: TypeRefKind) -> TypeRef {
        self.next_ref += 1;
        let type_ref = TypeRef(self.next_ref);
        self.kinds.insert(type_ref, kind);
        type_ref
    }

    /// Registers a named class/interface type. Assignability is reflexive.
    pub fn declared_type(&mut self, name: &str) -> TypeRef {
        let type_ref = self.mint(TypeRefKind::Declared);
        self.names.insert(type_ref, name.to_string());
        self.assignable.insert((type_ref, type_ref));
        type_ref
    }

    /// A declared type the host cannot resolve to a named element.
    pub fn unresolved_declared_type(&mut self) -> TypeRef {
        self.mint(TypeRefKind::Declared)
    }

    /// An array/primitive/void reference, unusable as a service.
    pub fn raw_ref(&mut self, kind: TypeRefKind) -> TypeRef {
        self.mint(kind)
    }

    /// Declares `sub` assignable to `sup`.
    pub fn subtype(&mut self, sub: TypeRef, sup: TypeRef) {
        self.assignable.insert((sub, sup));
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<Diagnostic> {
        self.diagnostics()
            .into_iter()
            .filter(|d| d.severity == Severity::Error)
            .collect()
    }

    pub fn warnings(&self) -> Vec<Diagnostic> {
        self.diagnostics()
            .into_iter()
            .filter(|d| d.severity == Severity::Warning)
            .collect()
    }
}

impl TypeOracle for FakeHost {
    fn ref_kind(&self, type_ref: TypeRef) -> TypeRefKind {
        self.kinds
            .get(&type_ref)
            .copied()
            .unwrap_or(TypeRefKind::Other)
    }

    fn is_assignable(&self, sub: TypeRef, sup: TypeRef) -> bool {
        self.assignable.contains(&(sub, sup))
    }

    fn qualified_name(&self, type_ref: TypeRef) -> Option<String> {
        self.names.get(&type_ref).cloned()
    }
}

impl DiagnosticSink for FakeHost {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.lock().unwrap().push(diagnostic);
    }
}

/// A well-formed candidate: public, top-level, public no-args constructor.
/// Tests mutate the fields they want to break.
pub fn provider(name: &str, type_ref: TypeRef, services: Vec<TypeRef>) -> ProviderCandidate {
    ProviderCandidate {
        qualified_name: name.to_string(),
        simple_name: name.rsplit('.').next().unwrap().to_string(),
        kind: ElementKind::Class,
        modifiers: vec![Modifier::Public],
        enclosing: EnclosingKind::TopLevel,
        constructors: vec![Constructor::public_no_args()],
        type_ref,
        declared_services: services,
    }
}

type FileMap = Arc<Mutex<HashMap<String, Vec<u8>>>>;

/// Filer that captures created resources in memory.
#[derive(Default, Clone)]
pub struct MemoryFiler {
    files: FileMap,
}

impl MemoryFiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a resource as already produced by an earlier run.
    pub fn preload(&self, path: &str, content: &str) {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_string(), content.as_bytes().to_vec());
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .map(|bytes| String::from_utf8(bytes.clone()).unwrap())
    }

    pub fn paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.files.lock().unwrap().keys().cloned().collect();
        paths.sort();
        paths
    }
}

impl Filer for MemoryFiler {
    fn create_resource(&self, path: &str) -> Result<Box<dyn Write>, FilerError> {
        if self.files.lock().unwrap().contains_key(path) {
            return Err(FilerError::AlreadyExists);
        }
        Ok(Box::new(MemoryResource {
            path: path.to_string(),
            buf: Vec::new(),
            files: Arc::clone(&self.files),
        }))
    }
}

struct MemoryResource {
    path: String,
    buf: Vec<u8>,
    files: FileMap,
}

impl MemoryResource {
    fn commit(&self) {
        self.files
            .lock()
            .unwrap()
            .insert(self.path.clone(), self.buf.clone());
    }
}

impl Write for MemoryResource {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.commit();
        Ok(())
    }
}

impl Drop for MemoryResource {
    fn drop(&mut self) {
        self.commit();
    }
}

/// Delegates to an inner `MemoryFiler` but fails one path with an I/O error,
/// for exercising the fatal-write policy.
pub struct FailingFiler {
    pub inner: MemoryFiler,
    pub fail_path: String,
}

impl Filer for FailingFiler {
    fn create_resource(&self, path: &str) -> Result<Box<dyn Write>, FilerError> {
        if path == self.fail_path {
            return Err(FilerError::Io(std::io::Error::other("disk on fire")));
        }
        self.inner.create_resource(path)
    }
}

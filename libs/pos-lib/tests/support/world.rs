use std::fmt;
use std::sync::Arc;

use cucumber::World;

use pos_lib::session::{MemorySessionStorage, SessionContext, SessionStorage};
use pos_lib::{AuthGuard, PosError};

use super::fake_backend::FakeBackend;

#[derive(World)]
pub struct TestWorld {
    pub backend: Arc<FakeBackend>,
    pub storage: Arc<MemorySessionStorage>,
    pub guard: AuthGuard<FakeBackend>,

    // Outcome of the last action
    pub error: Option<PosError>,
    pub load_count: usize,
    /// Backend call log length when the last action started.
    pub calls_before: usize,
    pub listed: Vec<String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        let backend = Arc::new(FakeBackend::default());
        let storage = Arc::new(MemorySessionStorage::new());
        let session = SessionContext::new(storage.clone() as Arc<dyn SessionStorage>);
        Self {
            guard: AuthGuard::new(backend.clone(), session),
            backend,
            storage,
            error: None,
            load_count: 0,
            calls_before: 0,
            listed: Vec::new(),
        }
    }
}

impl fmt::Debug for TestWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestWorld")
            .field("backend", &self.backend)
            .field("error", &self.error)
            .field("load_count", &self.load_count)
            .field("listed", &self.listed)
            .finish_non_exhaustive()
    }
}

impl TestWorld {
    /// Marks the start of an action so later steps only see its calls.
    pub fn begin(&mut self) {
        self.error = None;
        self.load_count = 0;
        self.calls_before = self.backend.calls().len();
    }

    /// Calls made since the last [`TestWorld::begin`].
    pub fn recent_calls(&self) -> Vec<&'static str> {
        self.backend.calls().split_off(self.calls_before)
    }

    pub fn record<T>(&mut self, result: Result<T, PosError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }
}

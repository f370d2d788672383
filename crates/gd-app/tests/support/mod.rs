//! Hand-written fakes for picker integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::oneshot;

use gd_app::{AppDeps, GifPicker, PickerHost};
use gd_core::gif::url::resolve_url;
use gd_core::ports::{
    CatalogPort, HttpRequest, HttpResponse, HttpTransportPort, UploadCachePort, UploadObserverPort,
};
use gd_core::{CatalogResult, GifEntry, GifId, TransportError, UserId};
use gd_infra::{Base64InlineEncoder, StaticIdentity, SystemClock};

pub const BASE_URL: &str = "http://catalog.test";

/// Catalog stub with `should_fail` switches per operation.
#[derive(Default)]
pub struct StubCatalog {
    pub list: Mutex<Vec<GifEntry>>,
    pub search: Mutex<Vec<GifEntry>>,
    pub list_should_fail: AtomicBool,
    pub search_should_fail: AtomicBool,
    pub upload_should_fail: AtomicBool,
    pub remove_should_fail: AtomicBool,
    pub network_calls: AtomicUsize,
    pub removed: Mutex<Vec<GifId>>,
}

impl StubCatalog {
    pub fn network_calls(&self) -> usize {
        self.network_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogPort for StubCatalog {
    async fn list(&self, _user: Option<&UserId>) -> CatalogResult<Vec<GifEntry>> {
        self.network_calls.fetch_add(1, Ordering::SeqCst);
        if self.list_should_fail.load(Ordering::SeqCst) {
            return CatalogResult::failure("network error: connection refused");
        }
        CatalogResult::success(self.list.lock().unwrap().clone())
    }

    async fn search(&self, _query: &str, _user: Option<&UserId>) -> CatalogResult<Vec<GifEntry>> {
        self.network_calls.fetch_add(1, Ordering::SeqCst);
        if self.search_should_fail.load(Ordering::SeqCst) {
            return CatalogResult::failure("network error: connection refused");
        }
        CatalogResult::success(self.search.lock().unwrap().clone())
    }

    async fn upload(
        &self,
        title: &str,
        _tags: &[String],
        _payload: &[u8],
        _user: Option<&UserId>,
    ) -> CatalogResult<GifEntry> {
        self.network_calls.fetch_add(1, Ordering::SeqCst);
        if self.upload_should_fail.load(Ordering::SeqCst) {
            return CatalogResult::failure("unexpected HTTP status: 500");
        }
        CatalogResult::success(GifEntry::new("uploaded-1", title, "/static/gifs/1.gif"))
    }

    async fn remove(&self, id: &GifId, _user: Option<&UserId>) -> CatalogResult<GifEntry> {
        self.network_calls.fetch_add(1, Ordering::SeqCst);
        if self.remove_should_fail.load(Ordering::SeqCst) {
            return CatalogResult::failure("GIF not found");
        }
        self.removed.lock().unwrap().push(id.clone());
        CatalogResult::success_empty()
    }

    async fn health(&self) -> CatalogResult<String> {
        CatalogResult::success("ok".into())
    }

    fn resolve_url(&self, url: &str) -> String {
        resolve_url(BASE_URL, url)
    }
}

/// Catalog whose list and search calls block until released, in call order.
#[derive(Default)]
pub struct GatedCatalog {
    list_gates: Mutex<VecDeque<(oneshot::Receiver<()>, Vec<GifEntry>)>>,
    search_gates: Mutex<VecDeque<(oneshot::Receiver<()>, Vec<GifEntry>)>>,
    pub started: AtomicUsize,
}

impl GatedCatalog {
    /// Queues a list response; the returned sender releases it.
    pub fn queue_list(&self, entries: Vec<GifEntry>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.list_gates.lock().unwrap().push_back((rx, entries));
        tx
    }

    pub fn queue_search(&self, entries: Vec<GifEntry>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.search_gates.lock().unwrap().push_back((rx, entries));
        tx
    }

    pub async fn wait_started(&self, count: usize) {
        while self.started.load(Ordering::SeqCst) < count {
            tokio::task::yield_now().await;
        }
    }

    async fn pass(
        &self,
        gates: &Mutex<VecDeque<(oneshot::Receiver<()>, Vec<GifEntry>)>>,
    ) -> CatalogResult<Vec<GifEntry>> {
        let next = gates.lock().unwrap().pop_front();
        let Some((gate, entries)) = next else {
            return CatalogResult::failure("no response queued");
        };
        self.started.fetch_add(1, Ordering::SeqCst);
        let _ = gate.await;
        CatalogResult::success(entries)
    }
}

#[async_trait]
impl CatalogPort for GatedCatalog {
    async fn list(&self, _user: Option<&UserId>) -> CatalogResult<Vec<GifEntry>> {
        self.pass(&self.list_gates).await
    }

    async fn search(&self, _query: &str, _user: Option<&UserId>) -> CatalogResult<Vec<GifEntry>> {
        self.pass(&self.search_gates).await
    }

    async fn upload(
        &self,
        _title: &str,
        _tags: &[String],
        _payload: &[u8],
        _user: Option<&UserId>,
    ) -> CatalogResult<GifEntry> {
        CatalogResult::failure("uploads disabled")
    }

    async fn remove(&self, _id: &GifId, _user: Option<&UserId>) -> CatalogResult<GifEntry> {
        CatalogResult::failure("removal disabled")
    }

    async fn health(&self) -> CatalogResult<String> {
        CatalogResult::success("ok".into())
    }

    fn resolve_url(&self, url: &str) -> String {
        resolve_url(BASE_URL, url)
    }
}

/// In-memory upload cache that counts saves.
#[derive(Default)]
pub struct MemoryUploadCache {
    pub stored: Mutex<Vec<GifEntry>>,
    pub saves: AtomicUsize,
}

#[async_trait]
impl UploadCachePort for MemoryUploadCache {
    async fn load(&self) -> Vec<GifEntry> {
        self.stored.lock().unwrap().clone()
    }

    async fn save(&self, entries: &[GifEntry]) {
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.stored.lock().unwrap() = entries.to_vec();
    }
}

/// Upload cache whose first save blocks until the returned sender fires.
#[derive(Default)]
pub struct GatedUploadCache {
    gate: Mutex<Option<oneshot::Receiver<()>>>,
    pub stored: Mutex<Vec<GifEntry>>,
    pub saves_started: AtomicUsize,
}

impl GatedUploadCache {
    pub fn hold_first_save(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.lock().unwrap() = Some(rx);
        tx
    }

    pub async fn wait_saves_started(&self, count: usize) {
        while self.saves_started.load(Ordering::SeqCst) < count {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl UploadCachePort for GatedUploadCache {
    async fn load(&self) -> Vec<GifEntry> {
        self.stored.lock().unwrap().clone()
    }

    async fn save(&self, entries: &[GifEntry]) {
        let snapshot = entries.to_vec();
        let gate = self.gate.lock().unwrap().take();
        self.saves_started.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        *self.stored.lock().unwrap() = snapshot;
    }
}

#[derive(Default)]
pub struct RecordingObserver {
    pub seen: Mutex<Vec<GifEntry>>,
}

impl UploadObserverPort for RecordingObserver {
    fn gif_uploaded(&self, entry: &GifEntry) {
        self.seen.lock().unwrap().push(entry.clone());
    }
}

/// Transport that answers every request with one status.
pub struct StubTransport {
    pub status: u16,
    pub content_length: Option<u64>,
}

#[async_trait]
impl HttpTransportPort for StubTransport {
    async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        Ok(HttpResponse {
            status: self.status,
            content_length: self.content_length,
            body: Vec::new(),
        })
    }
}

pub fn build_picker(
    catalog: Arc<dyn CatalogPort>,
    upload_cache: Arc<dyn UploadCachePort>,
    host: PickerHost,
    caller: Vec<GifEntry>,
) -> GifPicker {
    let deps = AppDeps {
        catalog,
        transport: Arc::new(StubTransport {
            status: 200,
            content_length: Some(1024),
        }),
        upload_cache,
        encoder: Arc::new(Base64InlineEncoder),
        identity: Arc::new(StaticIdentity::new("alice")),
        clock: Arc::new(SystemClock),
    };
    GifPicker::new(deps, host, caller)
}

//! Test doubles shared by the use-case unit tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex as StdMutex};

use async_trait::async_trait;
use mockall::mock;
use tokio::sync::Mutex;

use gd_core::gif::url::resolve_url;
use gd_core::ports::*;
use gd_core::{CatalogResult, GifEntry, GifId, TransportError, UserId};

use crate::state::{PickerState, SharedPickerState};

pub const CATALOG_BASE: &str = "http://catalog.test";

/// Catalog with canned data and per-operation failure switches.
#[derive(Default)]
pub struct FakeCatalog {
    pub list_entries: StdMutex<Vec<GifEntry>>,
    pub search_entries: StdMutex<Vec<GifEntry>>,
    pub fail_list: AtomicBool,
    pub fail_search: AtomicBool,
    pub fail_upload: AtomicBool,
    pub fail_remove: AtomicBool,
    pub calls: StdMutex<Vec<String>>,
    pub users: StdMutex<Vec<Option<UserId>>>,
    uploads: AtomicUsize,
}

impl FakeCatalog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_list(entries: Vec<GifEntry>) -> Arc<Self> {
        let catalog = Self::default();
        *catalog.list_entries.lock().unwrap() = entries;
        Arc::new(catalog)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String, user: Option<&UserId>) {
        self.calls.lock().unwrap().push(call);
        self.users.lock().unwrap().push(user.cloned());
    }
}

#[async_trait]
impl CatalogPort for FakeCatalog {
    async fn list(&self, user: Option<&UserId>) -> CatalogResult<Vec<GifEntry>> {
        self.record("list".into(), user);
        if self.fail_list.load(Ordering::SeqCst) {
            return CatalogResult::failure("unexpected HTTP status: 500");
        }
        CatalogResult::success(self.list_entries.lock().unwrap().clone())
    }

    async fn search(&self, query: &str, user: Option<&UserId>) -> CatalogResult<Vec<GifEntry>> {
        self.record(format!("search:{query}"), user);
        if self.fail_search.load(Ordering::SeqCst) {
            return CatalogResult::failure("network error: connection refused");
        }
        CatalogResult::success(self.search_entries.lock().unwrap().clone())
    }

    async fn upload(
        &self,
        title: &str,
        tags: &[String],
        _payload: &[u8],
        user: Option<&UserId>,
    ) -> CatalogResult<GifEntry> {
        self.record(format!("upload:{title}"), user);
        if self.fail_upload.load(Ordering::SeqCst) {
            return CatalogResult::failure("unexpected HTTP status: 413");
        }
        let n = self.uploads.fetch_add(1, Ordering::SeqCst) + 1;
        CatalogResult::success(
            GifEntry::new(format!("uploaded-{n}"), title, format!("/static/gifs/{n}.gif"))
                .with_tags(tags.to_vec()),
        )
    }

    async fn remove(&self, id: &GifId, user: Option<&UserId>) -> CatalogResult<GifEntry> {
        self.record(format!("remove:{id}"), user);
        if self.fail_remove.load(Ordering::SeqCst) {
            return CatalogResult::failure("GIF not found");
        }
        CatalogResult::success_empty()
    }

    async fn health(&self) -> CatalogResult<String> {
        CatalogResult::success("ok".to_string())
    }

    fn resolve_url(&self, url: &str) -> String {
        resolve_url(CATALOG_BASE, url)
    }
}

mock! {
    pub Identity {}

    impl IdentityPort for Identity {
        fn current_user(&self) -> Option<UserId>;
    }
}

mock! {
    pub Clock {}

    impl ClockPort for Clock {
        fn now_ms(&self) -> i64;
    }
}

mock! {
    pub Cache {}

    #[async_trait]
    impl UploadCachePort for Cache {
        async fn load(&self) -> Vec<GifEntry>;
        async fn save(&self, entries: &[GifEntry]);
    }
}

mock! {
    pub Encoder {}

    #[async_trait]
    impl InlineEncoderPort for Encoder {
        async fn encode_base64(&self, bytes: &[u8]) -> anyhow::Result<String>;
        async fn encode_data_url(&self, mime_type: &str, bytes: &[u8]) -> anyhow::Result<String>;
    }
}

mock! {
    pub Transport {}

    #[async_trait]
    impl HttpTransportPort for Transport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
    }
}

mock! {
    pub Sink {}

    impl InsertionSinkPort for Sink {
        fn insert(&self, text: &str);
    }
}

mock! {
    pub Observer {}

    impl UploadObserverPort for Observer {
        fn gif_uploaded(&self, entry: &GifEntry);
    }
}

pub fn anonymous() -> Arc<MockIdentity> {
    let mut identity = MockIdentity::new();
    identity.expect_current_user().returning(|| None);
    Arc::new(identity)
}

pub fn signed_in(user: &str) -> Arc<MockIdentity> {
    let user = UserId::from(user);
    let mut identity = MockIdentity::new();
    identity
        .expect_current_user()
        .returning(move || Some(user.clone()));
    Arc::new(identity)
}

pub fn shared_state(state: PickerState) -> SharedPickerState {
    Arc::new(Mutex::new(state))
}

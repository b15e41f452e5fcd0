use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
    time::Duration,
};

use courier_adapters::{
    cleanup::FsCleanup,
    config::{CourierSettings, settings::environment},
    persistence::HashSetBlacklist,
};
use courier_core::{Job, ProgressSink};
use courier_service::NotificationService;
use url::Url;
use wiremock::MockServer;

#[derive(Clone, Default)]
pub struct RecordingProgress {
    statuses: Arc<Mutex<Vec<String>>>,
}

impl RecordingProgress {
    pub fn statuses(&self) -> Vec<String> {
        self.statuses.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ProgressSink for RecordingProgress {
    async fn progress(&self, _job: &Job, status: &str) {
        self.statuses.lock().unwrap().push(status.to_string());
    }
}

pub struct TestApp {
    pub service: NotificationService<HashSetBlacklist, FsCleanup, RecordingProgress>,
    pub email_server: MockServer,
    pub blacklist: HashSetBlacklist,
    pub progress: RecordingProgress,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let email_server = MockServer::start().await;

        let source = [
            ("COURIER__SENDER", "kindle@courier.test".to_string()),
            ("COURIER__POSTMARK__SERVER_TOKEN", "server-token".to_string()),
            ("COURIER__POSTMARK__BASE_URL", email_server.uri()),
            ("COURIER__POSTMARK__TIMEOUT_MILLIS", "2000".to_string()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
        let settings = CourierSettings::from_sources(None, environment().source(Some(source)))
            .expect("Failed to load test settings");

        let blacklist = HashSetBlacklist::new();
        let progress = RecordingProgress::default();
        let service =
            NotificationService::new(&settings, blacklist.clone(), FsCleanup::new(), progress.clone())
                .expect("Failed to build notification service");

        Self {
            service,
            email_server,
            blacklist,
            progress,
        }
    }

    /// Wait until the user has been told something, for fire-and-forget sends
    pub async fn wait_for_status(&self) -> Vec<String> {
        for _ in 0..200 {
            let statuses = self.progress.statuses();
            if !statuses.is_empty() {
                return statuses;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("No progress reported");
    }
}

pub fn converted_file(len: u64) -> PathBuf {
    let path = std::env::temp_dir().join(format!("courier-{}.mobi", uuid::Uuid::new_v4()));
    let file = std::fs::File::create(&path).unwrap();
    file.set_len(len).unwrap();
    path
}

pub fn report_job(path: &PathBuf) -> Job {
    Job::new(
        Url::parse("https://x/y").unwrap(),
        "a@b.com",
        "Report",
        path,
        "report.mobi",
    )
}

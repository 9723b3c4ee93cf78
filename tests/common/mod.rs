#![allow(dead_code)]

use artisan_pricing::application::system::Application;
use artisan_pricing::config::Config;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A pricing server bound to an ephemeral localhost port.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle
            .await
            .expect("server task panicked")
            .expect("server returned an error");
    }
}

/// Fresh directory under the system temp dir; `model.json` inside it does not exist yet.
pub fn scratch_model_path(label: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("pricing-{}-{}", label, uuid::Uuid::new_v4()))
        .join("model.json")
}

pub fn config_for(model_path: &Path, range_policy: &str) -> Config {
    build_config(model_path, Some(range_policy))
}

/// Everything at its default except the port and the model path.
pub fn default_config_for(model_path: &Path) -> Config {
    build_config(model_path, None)
}

fn build_config(model_path: &Path, range_policy: Option<&str>) -> Config {
    let model_path = model_path.display().to_string();
    Config::from_lookup(|key| match key {
        "PRICING_PORT" => Some("0".to_string()),
        "PRICING_MODEL_PATH" => Some(model_path.clone()),
        "PRICING_RANGE_POLICY" => range_policy.map(str::to_string),
        _ => None,
    })
    .expect("test configuration is valid")
}

pub async fn spawn_server(model_path: &Path, range_policy: &str) -> TestServer {
    spawn_with_config(config_for(model_path, range_policy)).await
}

pub async fn spawn_default_server(model_path: &Path) -> TestServer {
    spawn_with_config(default_config_for(model_path)).await
}

async fn spawn_with_config(config: Config) -> TestServer {
    let app = Application::build(config).expect("application builds");
    let listener = app.bind().await.expect("ephemeral port binds");
    let addr = listener.local_addr().unwrap();

    let (tx, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(app.run_on(listener, async {
        let _ = rx.await;
    }));

    TestServer {
        addr,
        shutdown: Some(tx),
        handle,
    }
}

pub fn cleanup(model_path: &Path) {
    if let Some(dir) = model_path.parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}

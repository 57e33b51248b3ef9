//! In-process adaptor for tests

use std::{
    net::{SocketAddr, TcpListener as StdTcpListener},
    sync::Arc,
};

use anyhow::{Context, Result};
use extension_api::{ApiConfig, ApiServer, AppState};
use extension_core::{DummyModule, ModuleRegistry};
use tokio::{net::TcpListener, sync::oneshot};
use tracing::{debug, error};
use url::Url;

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;

/// The adaptor served on an ephemeral localhost port.
///
/// The server runs on its own thread and runtime, so it outlives the runtime
/// of any single `#[tokio::test]`. Dropping the handle signals shutdown; the
/// thread finishes in the background.
pub struct TestServer {
    addr: SocketAddr,
    base_url: Url,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    /// Start an adaptor with `dummy-module` registered.
    ///
    /// # Errors
    ///
    /// Returns an error if no local port can be bound or the server thread
    /// cannot be started.
    pub fn spawn(system_token: &str) -> Result<Self> {
        let registry = ModuleRegistry::new().with_module(Arc::new(DummyModule));
        Self::spawn_with_modules(system_token, registry)
    }

    /// Start an adaptor with the given connector modules.
    pub fn spawn_with_modules(system_token: &str, modules: ModuleRegistry) -> Result<Self> {
        let listener =
            StdTcpListener::bind("127.0.0.1:0").context("Failed to bind test server port")?;
        listener.set_nonblocking(true)?;
        let addr = listener.local_addr()?;

        let state = AppState::new(system_token, modules);
        let server = ApiServer::new(ApiConfig::new(system_token), state);
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        std::thread::Builder::new()
            .name("adaptor-test-server".to_string())
            .spawn(move || {
                let runtime = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(runtime) => runtime,
                    Err(e) => {
                        error!("Failed to build test server runtime: {}", e);
                        return;
                    }
                };

                runtime.block_on(async move {
                    let listener = match TcpListener::from_std(listener) {
                        Ok(listener) => listener,
                        Err(e) => {
                            error!("Failed to register test server listener: {}", e);
                            return;
                        }
                    };

                    let shutdown = async move {
                        let _ = shutdown_rx.await;
                    };
                    if let Err(e) = server.serve_with_shutdown(listener, shutdown).await {
                        error!("Test server stopped with error: {}", e);
                    }
                });
            })
            .context("Failed to start test server thread")?;

        let base_url = Url::parse(&format!("http://{}/", addr))?;
        debug!(base_url = %base_url, "Test server started");

        Ok(Self {
            addr,
            base_url,
            shutdown: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

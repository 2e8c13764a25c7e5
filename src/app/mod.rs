use crate::adapters::build_source;
use crate::adapters::fallback::StaticFallback;
use crate::config::AppConfig;
use crate::core::generator::PasswordGenerator;
use crate::server::{self, AppState};
use crate::utils::error::Result;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Wires config, word source and generator together and serves them.
pub struct App {
    config: AppConfig,
    generator: Arc<PasswordGenerator>,
}

impl App {
    pub fn build(config: AppConfig) -> Result<Self> {
        let source = build_source(&config.source)?;
        let fallback = config.fallback.enabled.then(StaticFallback::new);
        let generator = PasswordGenerator::new(
            source,
            fallback,
            config.retry.policy(),
            config.password.composer(),
        );

        Ok(Self {
            config,
            generator: Arc::new(generator),
        })
    }

    pub fn generator(&self) -> &Arc<PasswordGenerator> {
        &self.generator
    }

    /// Eager pool load. A load failure is fatal unless the fallback list can
    /// stand in for it.
    pub async fn prepare(&self) -> Result<()> {
        if !self.config.source.preload {
            tracing::info!("💤 Word pool will load on first request");
            return Ok(());
        }

        let source = self.generator.source().as_ref();
        let loaded = self
            .config
            .retry
            .policy()
            .run("word pool preload", move |_| source.preload())
            .await;

        match loaded {
            Ok(()) => {
                tracing::info!("✅ Word source {} ready", source.name());
                Ok(())
            }
            Err(e) if e.allows_fallback() && self.generator.fallback_enabled() => {
                tracing::warn!(
                    "⚠️ Word source {} failed to load ({}); serving fallback words until it recovers",
                    source.name(),
                    e
                );
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Periodically reloads the word pool when `source.refresh_interval_seconds` is set.
    pub fn spawn_refresh(&self) -> Option<JoinHandle<()>> {
        let interval = self.config.source.refresh_interval()?;
        let generator = Arc::clone(&self.generator);

        Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // 第一次 tick 立即觸發，跳過
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if let Err(e) = generator.source().refresh().await {
                    tracing::warn!("⚠️ Word pool refresh failed, keeping previous pool: {}", e);
                }
            }
        }))
    }

    pub fn router(&self) -> Router {
        server::router(
            AppState {
                generator: Arc::clone(&self.generator),
                include_words: self.config.server.include_words,
                expose_error_details: self.config.server.expose_error_details,
            },
            &self.config.server.static_dir,
        )
    }

    pub async fn serve(self, listener: TcpListener) -> std::io::Result<()> {
        let _refresh = self.spawn_refresh();
        let router = self.router();

        axum::serve(listener, router)
            .with_graceful_shutdown(server::shutdown_signal())
            .await
    }

    pub async fn run(self) -> std::io::Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.server.port));
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("🚀 Server running on http://localhost:{}", self.config.server.port);
        self.serve(listener).await
    }
}

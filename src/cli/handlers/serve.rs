//! Serve command handler

use crate::config::Settings;
use crate::server::Server;

/// Handler for the serve command
pub struct ServeCommandHandler {
    config: Settings,
}

impl ServeCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Serve until shutdown, or only report the configuration when `dry_run`
    pub async fn execute(self, dry_run: bool) -> anyhow::Result<()> {
        if dry_run {
            for line in self.dry_run_report()? {
                println!("{}", line);
            }
            return Ok(());
        }
        Server::new(self.config).run().await
    }

    /// Validate configuration without starting the server
    pub fn dry_run_report(&self) -> anyhow::Result<Vec<String>> {
        self.config.validate()?;
        crate::external::HttpFetcher::new(&self.config.upstream)?;

        let collector = &self.config.collector;
        let mut report = vec![
            "✓ Configuration is valid".to_string(),
            format!("✓ Server would bind to: {}", self.config.server.address()),
            format!("✓ Station API: {}", self.config.upstream.station_api_base),
            format!(
                "✓ VOD collection: up to {} pages of {}",
                collector.max_pages, collector.per_page
            ),
        ];
        if collector.start_date.is_some() || collector.end_date.is_some() {
            report.push(format!(
                "✓ Date window: {} .. {}",
                collector.start_date.as_deref().unwrap_or("*"),
                collector.end_date.as_deref().unwrap_or("*")
            ));
        }
        report.push("Dry run completed successfully".to_string());
        Ok(report)
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_handler_new() {
        let handler = ServeCommandHandler::new(Settings::default());
        assert_eq!(handler.config(), &Settings::default());
    }

    #[test]
    fn test_dry_run_report() {
        let mut config = Settings::default();
        config.collector.start_date = Some("2025-09-01".to_string());

        let report = ServeCommandHandler::new(config).dry_run_report().unwrap();
        assert!(report.contains(&"✓ Server would bind to: 127.0.0.1:3000".to_string()));
        assert!(report.contains(&"✓ Date window: 2025-09-01 .. *".to_string()));
    }

    #[tokio::test]
    async fn test_dry_run_invalid_config() {
        let mut config = Settings::default();
        config.server.port = 0;

        let result = ServeCommandHandler::new(config).execute(true).await;
        assert!(result.is_err());
    }
}

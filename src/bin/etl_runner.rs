use anyhow::{Context, Result};
use reservation_etl::etl::run::{run_pipeline, Config};
use sqlx::postgres::PgPoolOptions;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("🚀 Starting reservation ETL runner...");

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // Connect to database
    info!("📦 Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    info!("✅ Database connected");

    // Run the pipeline once; retries belong to the external scheduler
    match run_pipeline(&pool, &config).await {
        Ok(report) => {
            info!("✅ ETL run completed successfully");
            info!("📊 Records processed: {}", report.processed_records);
            info!("📈 Data quality: {}%", report.quality_score);
            info!("📁 Log: {:?}", report.log_file);
            info!("💾 Backup: {:?}", report.backup_file);
            Ok(())
        }
        Err(e) => {
            error!("❌ ETL run failed: {}", e);
            Err(e.into())
        }
    }
}

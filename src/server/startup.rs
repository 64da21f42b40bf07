use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{config::Config, error::Error};

/// Install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise application debug
/// logs plus HTTP trace spans are enabled.
pub fn install_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "voltmarket=debug,tower_http=debug,info".into()),
        )
        .with(fmt::layer())
        .init();
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

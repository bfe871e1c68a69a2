use anyhow::{Context, Result, bail};
use sluggable::application::ports::{
    lifecycle::RecordObserver, time::Clock, util::Slugifier,
};
use sluggable::application::services::SlugServices;
use sluggable::config::AppConfig;
use sluggable::domain::article::{Article, ArticleRepository, ArticleTitle};
use sluggable::domain::slug::SlugRepository;
use sluggable::infrastructure::{
    database,
    repositories::{SqliteArticleRepository, SqliteSlugRepository},
    time::SystemClock,
    util::DefaultSlugifier,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

/// Saves one article per title argument and prints `id<TAB>slug` for each.
async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let titles: Vec<String> = std::env::args().skip(1).collect();
    if titles.is_empty() {
        bail!("usage: sluggable <title>...");
    }

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.max_connections())
        .await
        .with_context(|| format!("connecting to {}", config.database_url()))?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let slug_repo: Arc<dyn SlugRepository> = Arc::new(SqliteSlugRepository::new(Arc::clone(&pool)));
    let slugifier: Arc<dyn Slugifier> = Arc::new(DefaultSlugifier);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = SlugServices::new(slug_repo, slugifier);
    let observer: Arc<dyn RecordObserver<Article>> = services.lifecycle.clone();
    let articles = SqliteArticleRepository::new(Arc::clone(&pool), Arc::clone(&clock))
        .with_observer(observer)
        .with_slug_defaults(config.slug_defaults());

    for title in titles {
        let mut article = Article::draft(ArticleTitle::new(title)?, clock.now())
            .with_slug_defaults(config.slug_defaults());
        articles.save(&mut article).await?;

        let id = article.id.context("saved article has no id")?;
        println!("{id}\t{}", article.slug().unwrap_or_default());
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

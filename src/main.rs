use snipmove::prelude::*;

const BASE_URL_VAR: &str = "SNIPMOVE_BASE_URL";
const PRIVATE_TOKEN_VAR: &str = "SNIPMOVE_PRIVATE_TOKEN";

#[tokio::main]
async fn main() -> SnipmoveResult<()> {
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{EnvFilter, Layer};

    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(non_blocking_writer)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).init();
    tracing::debug!("running snipmove {}", full_version());

    let base_url = std::env::var(BASE_URL_VAR)
        .map_err(|_| SnipmoveError::from(format!("{BASE_URL_VAR} must be set")))?;

    let client = match std::env::var(PRIVATE_TOKEN_VAR) {
        Ok(token) => ApiClient::authenticated(&base_url, ApiAuth::PrivateToken(token))?,
        Err(_) => {
            tracing::warn!("{PRIVATE_TOKEN_VAR} isn't set, storage move endpoints require an administrator token");
            ApiClient::anonymous(&base_url)?
        }
    };

    let service = client.snippet_repository_storage_moves();
    let mut list_options = ListOptions::page(1, 100);

    loop {
        let (moves, response) = service
            .retrieve_all_snippet_storage_moves(list_options.clone(), &[])
            .await?;

        for storage_move in moves {
            tracing::info!(
                id = storage_move.id,
                snippet_id = storage_move.snippet.id,
                state = %storage_move.state,
                source = %storage_move.source_storage_name,
                destination = %storage_move.destination_storage_name,
                "snippet storage move"
            );
        }

        match response.pagination().next_page {
            Some(next_page) => list_options.page = Some(next_page),
            None => break,
        }
    }

    Ok(())
}

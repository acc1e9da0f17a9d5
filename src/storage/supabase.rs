/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::client::HttpClient;
use crate::application::config::SupabaseConfig;
use crate::constants::{ENV_SUPABASE_ANON_KEY, ENV_SUPABASE_URL, SUPABASE_REST_PREFIX};
use crate::error::AppError;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

/// Shared handle to the Supabase backend
///
/// Construction never fails because of missing settings: an empty URL or key
/// is reported with a warning and the handle is built anyway, so the failure
/// surfaces when the handle is first used. The handle is immutable and cheap
/// to clone; pass it by reference to whatever needs database access.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    config: SupabaseConfig,
    client: HttpClient,
}

impl SupabaseClient {
    /// Creates the handle from the project URL and anonymous key
    ///
    /// # Returns
    /// * `Ok(SupabaseClient)` - Always, unless the HTTP stack itself cannot be initialised
    pub fn new(config: &SupabaseConfig) -> Result<Self, AppError> {
        if config.is_incomplete() {
            warn!(
                "Supabase env not set: {} and {}",
                ENV_SUPABASE_URL, ENV_SUPABASE_ANON_KEY
            );
        }

        let client = HttpClient::new(format!(
            "{}/{}",
            config.url.trim_end_matches('/'),
            SUPABASE_REST_PREFIX
        ))?
        .with_default_header("apikey", config.anon_key.clone())
        .with_default_header("Authorization", format!("Bearer {}", config.anon_key));

        debug!("Supabase client created for '{}'", config.url);
        Ok(Self {
            config: config.clone(),
            client,
        })
    }

    /// Project URL the handle was built with
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Anonymous key the handle was built with
    pub fn anon_key(&self) -> &str {
        &self.config.anon_key
    }

    /// Reads rows from a table through the REST interface
    ///
    /// `GET {url}/rest/v1/{table}?select={columns}`
    ///
    /// # Arguments
    /// * `table` - Table or view name
    /// * `columns` - PostgREST column selector, e.g. `*` or `id,name`
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        columns: &str,
    ) -> Result<T, AppError> {
        if self.config.url.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "{ENV_SUPABASE_URL} is not set"
            )));
        }
        info!("Selecting '{}' from {}", columns, table);
        self.client
            .get_with_query(table, &[("select", columns)])
            .await
    }
}

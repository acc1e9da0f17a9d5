/// Base endpoint of the Polygon REST API
pub const POLYGON_BASE_URL: &str = "https://api.polygon.io";
/// Page size requested for every options chain listing
pub const OPTIONS_CHAIN_PAGE_SIZE: u32 = 1000;
/// Sort direction requested for every options chain listing
pub const OPTIONS_CHAIN_ORDER: &str = "asc";
/// Field the options chain listing is sorted by
pub const OPTIONS_CHAIN_SORT: &str = "expiration_date";
/// Query parameter carrying the Polygon API key
pub const POLYGON_API_KEY_PARAM: &str = "apiKey";

/// Environment variable holding the Polygon API key
pub const ENV_POLYGON_API_KEY: &str = "NEXT_PUBLIC_POLYGON_API_KEY";
/// Environment variable overriding the Polygon base endpoint
pub const ENV_POLYGON_BASE_URL: &str = "POLYGON_BASE_URL";
/// Environment variable holding the Supabase project URL
pub const ENV_SUPABASE_URL: &str = "NEXT_PUBLIC_SUPABASE_URL";
/// Environment variable holding the Supabase anonymous (public) key
pub const ENV_SUPABASE_ANON_KEY: &str = "NEXT_PUBLIC_SUPABASE_ANON_KEY";
/// Environment variable selecting the build mode of the web app
pub const ENV_NODE_ENV: &str = "NODE_ENV";

/// Path prefix of the Supabase REST (PostgREST) interface
pub const SUPABASE_REST_PREFIX: &str = "rest/v1";

/// Directory the installable web app assets are generated into
pub const DEFAULT_PWA_DEST: &str = "public";

/// User agent string sent with every HTTP request
pub const USER_AGENT: &str = "market-desk/0.1.0";

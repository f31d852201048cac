mod cache_error;
mod zone_cache;
mod zone_field;

pub use cache_error::CacheError;
pub use zone_cache::ZoneCache;
pub use zone_field::ZoneField;

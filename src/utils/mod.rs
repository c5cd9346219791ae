pub mod app_error;
pub mod json_fetcher;
pub mod validated_query;

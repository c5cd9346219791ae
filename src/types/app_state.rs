use crate::{services::stop_finder::StopFinder, templates::PageTemplates};

#[derive(Clone)]
pub struct AppState {
    pub stop_finder: StopFinder,
    pub map_display_key: Option<String>,
    pub templates: PageTemplates,
}

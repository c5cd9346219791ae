use std::sync::Arc;

use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

use crate::types::stop_location::StopLocation;

pub const INDEX_TEMPLATE: &str = "index.html";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template compilation failed: {0}")]
    Compile(String),

    #[error("Template rendering failed: {0}")]
    Render(String),
}

/// Values the index page reads; `None` fields render as absent.
#[derive(Serialize, Default)]
pub struct IndexPage<'a> {
    pub error: Option<&'a str>,
    pub place: Option<&'a str>,
    pub station_name: Option<&'a str>,
    pub wheelchair_accessible: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub map_display_key: Option<&'a str>,
}

impl<'a> IndexPage<'a> {
    pub fn error(message: &'a str) -> Self {
        Self {
            error: Some(message),
            ..Default::default()
        }
    }

    pub fn found(
        place: &'a str,
        location: &'a StopLocation,
        map_display_key: Option<&'a str>,
    ) -> Self {
        Self {
            place: Some(place),
            station_name: Some(location.stop.name.as_str()),
            wheelchair_accessible: location.stop.wheelchair_accessible,
            latitude: Some(location.coordinates.latitude),
            longitude: Some(location.coordinates.longitude),
            map_display_key,
            ..Default::default()
        }
    }
}

#[derive(Clone)]
pub struct PageTemplates {
    tera: Arc<Tera>,
}

impl PageTemplates {
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);

        tera.add_raw_template(INDEX_TEMPLATE, include_str!("index.html"))
            .map_err(|e| TemplateError::Compile(e.to_string()))?;

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    pub fn render_index(&self, page: &IndexPage) -> Result<String, TemplateError> {
        let context =
            Context::from_serialize(page).map_err(|e| TemplateError::Render(e.to_string()))?;

        self.tera
            .render(INDEX_TEMPLATE, &context)
            .map_err(|e| TemplateError::Render(e.to_string()))
    }
}

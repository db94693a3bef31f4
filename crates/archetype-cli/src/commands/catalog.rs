//! `catalog` and `dimensions`: reference data listings.

use archetype_classifier::ClassifierEngine;

use crate::render;

pub fn handle_catalog(engine: &ClassifierEngine) -> String {
    render::render_catalog(engine.catalog())
}

pub fn handle_dimensions() -> String {
    render::render_dimensions()
}

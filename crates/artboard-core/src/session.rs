//! Editing session: one design, its selection, and the slider preview.
//!
//! An [`EditorSession`] owns every piece of mutable editor state. Nothing is
//! global; independent sessions can coexist and are tested in isolation.
//!
//! # Preview and Persisted State
//!
//! UI handlers update two slices on every call:
//!
//! 1. The [`PreviewState`], which always takes the clamped value so sliders
//!    stay responsive with nothing selected
//! 2. The selected layer, through [`Design::update_layer`], when the layer's
//!    variant carries the attribute
//!
//! When a selection exists and the commit is rejected (a locked layer), the
//! preview is reloaded from the persisted layer, so the two slices agree
//! after every handler call that reaches a layer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::EditorConfig;
use crate::design::Design;
use crate::filter::{FilterKind, FilterRange, FilterValues};
use crate::layer::{BaseLayer, Layer, LayerError, LayerKind, LayerPatch, LayerType, ShapeType};
use crate::selection::Selection;
use crate::transform::normalize_rotation;

const OPACITY_RANGE: FilterRange = FilterRange::new(0.0, 1.0);

/// Transient slider values shown by the editor UI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewState {
    #[serde(flatten)]
    pub filters: FilterValues,
    pub rotation: f64,
    pub flip_h: bool,
    pub flip_v: bool,
    pub zoom: f64,
    pub opacity: f64,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self {
            filters: FilterValues::default(),
            rotation: 0.0,
            flip_h: false,
            flip_v: false,
            zoom: 1.0,
            opacity: 1.0,
        }
    }
}

impl PreviewState {
    /// Copy the persisted values of `layer` into the preview.
    ///
    /// Filter and zoom values exist only on image layers; for other variants
    /// those sliders keep their current position.
    pub fn load(&mut self, layer: &Layer) {
        self.rotation = layer.base.rotation;
        self.opacity = layer.opacity();
        (self.flip_h, self.flip_v) = layer.flips();

        if let LayerKind::Image(image) = &layer.kind {
            self.filters = image.filters;
            self.zoom = image.zoom;
        }
    }
}

/// What a handler did with the selected layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Commit {
    /// The selected layer was updated.
    Committed(Arc<Layer>),
    /// Nothing is selected; only the preview changed.
    PreviewOnly,
    /// The selected layer's variant does not carry the attribute.
    Skipped { layer_type: LayerType },
}

impl Commit {
    pub fn layer(&self) -> Option<&Arc<Layer>> {
        match self {
            Commit::Committed(layer) => Some(layer),
            _ => None,
        }
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, Commit::Committed(_))
    }
}

/// An explicitly owned editing session.
#[derive(Debug, Clone)]
pub struct EditorSession {
    design: Design,
    selection: Selection,
    preview: PreviewState,
    config: EditorConfig,
}

impl EditorSession {
    /// Start a session, applying the config's filter and zoom ranges to the
    /// design.
    ///
    /// # Errors
    ///
    /// `InvalidValue` if a layer of `design` falls outside those ranges.
    pub fn new(mut design: Design, config: EditorConfig) -> Result<Self, LayerError> {
        design.set_limits(config.limits())?;
        Ok(Self {
            design,
            selection: Selection::new(),
            preview: PreviewState::default(),
            config,
        })
    }

    pub fn design(&self) -> &Design {
        &self.design
    }

    /// Layers in insertion order.
    pub fn layers(&self) -> &[Arc<Layer>] {
        self.design.layers()
    }

    pub fn layer(&self, id: &str) -> Option<&Arc<Layer>> {
        self.design.layer(id)
    }

    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn add_layer(&mut self, layer: Layer) -> Result<Arc<Layer>, LayerError> {
        self.design.add_layer(layer)
    }

    /// Add a text layer styled with the configured text defaults.
    pub fn add_text_layer(
        &mut self,
        base: BaseLayer,
        text: impl Into<String>,
    ) -> Result<Arc<Layer>, LayerError> {
        let layer = self.config.defaults.text_layer(base, text);
        self.design.add_layer(layer)
    }

    /// Add a shape layer styled with the configured shape defaults.
    pub fn add_shape_layer(
        &mut self,
        base: BaseLayer,
        shape_type: ShapeType,
    ) -> Result<Arc<Layer>, LayerError> {
        let layer = self.config.defaults.shape_layer(base, shape_type);
        self.design.add_layer(layer)
    }

    pub fn add_image_layer(
        &mut self,
        base: BaseLayer,
        src: impl Into<String>,
    ) -> Result<Arc<Layer>, LayerError> {
        let layer = self.config.defaults.image_layer(base, src);
        self.design.add_layer(layer)
    }

    /// Remove a layer, clearing the selection if it pointed at that layer.
    pub fn remove_layer(&mut self, id: &str) -> Result<Arc<Layer>, LayerError> {
        let removed = self.design.remove_layer(id)?;
        if self.selection.is_selected(id) {
            self.selection.clear();
        }
        Ok(removed)
    }

    /// Validate and merge a partial update into one layer.
    ///
    /// See [`Design::update_layer`] for the error cases. Updating the
    /// selected layer also refreshes the preview from the new record.
    pub fn update_layer(&mut self, id: &str, patch: &LayerPatch) -> Result<Arc<Layer>, LayerError> {
        let updated = self.design.update_layer(id, patch)?;
        if self.selection.is_selected(id) {
            self.preview.load(&updated);
        }
        Ok(updated)
    }

    /// Set or clear the selection.
    ///
    /// An id that names no layer clears the selection. Selecting a layer
    /// loads its values into the preview.
    pub fn select(&mut self, id: Option<&str>) -> Option<Arc<Layer>> {
        let layer = id.and_then(|id| self.design.layer(id)).cloned();
        match &layer {
            Some(layer) => {
                self.selection.select(layer.id());
                self.preview.load(layer);
            }
            None => {
                if let Some(id) = id {
                    tracing::debug!(layer = id, "selected id not in design, clearing selection");
                }
                self.selection.clear();
            }
        }
        layer
    }

    /// The selected layer id, if any.
    pub fn current(&self) -> Option<&str> {
        self.selection.current()
    }

    pub fn selected_layer(&self) -> Option<&Arc<Layer>> {
        self.current().and_then(|id| self.design.layer(id))
    }

    /// Apply `patch` to the selected layer.
    ///
    /// Returns `Ok(None)` when nothing is selected.
    pub fn update_selected_layer(
        &mut self,
        patch: &LayerPatch,
    ) -> Result<Option<Arc<Layer>>, LayerError> {
        let Some(id) = self.current().map(str::to_owned) else {
            return Ok(None);
        };
        self.update_layer(&id, patch).map(Some)
    }

    /// Set one filter dimension.
    ///
    /// The value is clamped to the configured bounds; NaN becomes the
    /// dimension's neutral value. Only image layers take the commit.
    pub fn handle_filter(&mut self, kind: FilterKind, value: f64) -> Result<Commit, LayerError> {
        let value = self.config.filters.clamp(kind, value);
        self.preview.filters.set(kind, value);
        self.commit(&LayerPatch::filter(kind, value), &[LayerType::Image])
    }

    pub fn handle_brightness(&mut self, value: f64) -> Result<Commit, LayerError> {
        self.handle_filter(FilterKind::Brightness, value)
    }

    pub fn handle_contrast(&mut self, value: f64) -> Result<Commit, LayerError> {
        self.handle_filter(FilterKind::Contrast, value)
    }

    pub fn handle_saturation(&mut self, value: f64) -> Result<Commit, LayerError> {
        self.handle_filter(FilterKind::Saturation, value)
    }

    pub fn handle_hue(&mut self, value: f64) -> Result<Commit, LayerError> {
        self.handle_filter(FilterKind::Hue, value)
    }

    pub fn handle_sepia(&mut self, value: f64) -> Result<Commit, LayerError> {
        self.handle_filter(FilterKind::Sepia, value)
    }

    /// Set the rotation in degrees, normalized into `[0, 360)`.
    ///
    /// # Errors
    ///
    /// Non-finite angles are rejected with `InvalidValue` and change nothing.
    pub fn handle_rotation(&mut self, degrees: f64) -> Result<Commit, LayerError> {
        if !degrees.is_finite() {
            return Err(LayerError::InvalidValue {
                attribute: "rotation",
                reason: format!("expected a finite number, got {degrees}"),
            });
        }
        let rotation = normalize_rotation(degrees);
        self.preview.rotation = rotation;

        let patch = LayerPatch {
            rotation: Some(rotation),
            ..LayerPatch::default()
        };
        self.commit(&patch, &[LayerType::Image, LayerType::Text, LayerType::Shape])
    }

    /// Toggle horizontal mirroring.
    pub fn handle_flip_h(&mut self) -> Result<Commit, LayerError> {
        self.preview.flip_h = !self.preview.flip_h;
        let patch = LayerPatch {
            flip_h: Some(self.preview.flip_h),
            ..LayerPatch::default()
        };
        self.commit(&patch, &[LayerType::Image, LayerType::Text])
    }

    /// Toggle vertical mirroring.
    pub fn handle_flip_v(&mut self) -> Result<Commit, LayerError> {
        self.preview.flip_v = !self.preview.flip_v;
        let patch = LayerPatch {
            flip_v: Some(self.preview.flip_v),
            ..LayerPatch::default()
        };
        self.commit(&patch, &[LayerType::Image, LayerType::Text])
    }

    /// Set the zoom factor of an image layer, clamped to the configured range.
    pub fn handle_zoom(&mut self, zoom: f64) -> Result<Commit, LayerError> {
        let zoom = self.config.zoom.clamp(zoom, 1.0);
        self.preview.zoom = zoom;

        let patch = LayerPatch {
            zoom: Some(zoom),
            ..LayerPatch::default()
        };
        self.commit(&patch, &[LayerType::Image])
    }

    /// Set the opacity, clamped to `[0, 1]`.
    pub fn handle_opacity(&mut self, opacity: f64) -> Result<Commit, LayerError> {
        let opacity = OPACITY_RANGE.clamp(opacity, 1.0);
        self.preview.opacity = opacity;

        let patch = LayerPatch {
            opacity: Some(opacity),
            ..LayerPatch::default()
        };
        self.commit(&patch, &[LayerType::Image, LayerType::Text, LayerType::Shape])
    }

    fn commit(&mut self, patch: &LayerPatch, accepts: &[LayerType]) -> Result<Commit, LayerError> {
        let Some(layer) = self.selected_layer().cloned() else {
            return Ok(Commit::PreviewOnly);
        };

        let layer_type = layer.layer_type();
        if !accepts.contains(&layer_type) {
            tracing::debug!(
                layer = layer.id(),
                %layer_type,
                attributes = ?patch.attributes(),
                "handler skipped for layer variant"
            );
            return Ok(Commit::Skipped { layer_type });
        }

        match self.design.update_layer(layer.id(), patch) {
            Ok(updated) => Ok(Commit::Committed(updated)),
            Err(err) => {
                self.preview.load(&layer);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::Canvas;
    use crate::layer::{ImageLayer, LayerDefaults};

    fn image(id: &str, z_index: i32) -> Layer {
        Layer::new(
            BaseLayer::new(id, 0.0, 0.0, 100.0, 100.0).with_z_index(z_index),
            LayerKind::Image(ImageLayer::new(format!("{id}.png"))),
        )
    }

    fn session_with(layers: Vec<Layer>) -> EditorSession {
        let mut design = Design::new(Canvas::new(800.0, 600.0));
        for layer in layers {
            design.add_layer(layer).unwrap();
        }
        EditorSession::new(design, EditorConfig::default()).unwrap()
    }

    fn mixed_session() -> EditorSession {
        let defaults = LayerDefaults::default();
        session_with(vec![
            image("img", 0),
            defaults.text_layer(BaseLayer::new("txt", 10.0, 10.0, 200.0, 40.0), "Hello"),
            defaults.shape_layer(
                BaseLayer::new("shp", 20.0, 20.0, 50.0, 50.0),
                ShapeType::Circle,
            ),
        ])
    }

    fn lock(session: &mut EditorSession, id: &str) {
        let patch = LayerPatch {
            is_locked: Some(true),
            ..LayerPatch::default()
        };
        session.update_layer(id, &patch).unwrap();
    }

    #[test]
    fn test_two_layer_brightness_scenario() {
        let mut session = session_with(vec![image("a", 0), image("b", 1)]);
        let before_a = Arc::clone(&session.layers()[0]);

        session.select(Some("b"));
        let commit = session.handle_brightness(150.0).unwrap();
        assert!(commit.is_committed());

        let layers = session.layers();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].id(), "a");
        assert_eq!(layers[1].id(), "b");
        assert!(Arc::ptr_eq(&layers[0], &before_a));
        assert_eq!(layers[1].filters().unwrap().brightness, 150.0);
        assert_eq!(session.preview().filters.brightness, 150.0);
    }

    #[test]
    fn test_missing_id_leaves_sequence_unchanged() {
        let mut session = mixed_session();
        let before: Vec<_> = session.layers().to_vec();

        let patch = LayerPatch {
            opacity: Some(0.5),
            ..LayerPatch::default()
        };
        let result = session.update_layer("missing-id", &patch);

        assert_eq!(result, Err(LayerError::LayerNotFound("missing-id".to_string())));
        assert_eq!(session.layers().len(), before.len());
        for (after, before) in session.layers().iter().zip(&before) {
            assert!(Arc::ptr_eq(after, before));
        }
    }

    #[test]
    fn test_filter_without_selection_only_updates_preview() {
        let mut session = mixed_session();
        let before: Vec<_> = session.layers().to_vec();

        for kind in FilterKind::ALL {
            let commit = session.handle_filter(kind, 42.0).unwrap();
            assert_eq!(commit, Commit::PreviewOnly);
            assert_eq!(session.preview().filters.get(kind), 42.0);
        }

        for (after, before) in session.layers().iter().zip(&before) {
            assert!(Arc::ptr_eq(after, before));
        }
    }

    #[test]
    fn test_filter_clamps_before_commit() {
        let mut session = mixed_session();
        session.select(Some("img"));

        session.handle_brightness(250.0).unwrap();
        assert_eq!(session.preview().filters.brightness, 200.0);

        session.handle_hue(-10.0).unwrap();
        assert_eq!(session.preview().filters.hue, 0.0);

        session.handle_sepia(f64::NAN).unwrap();
        assert_eq!(session.preview().filters.sepia, 0.0);

        let filters = *session.layer("img").unwrap().filters().unwrap();
        assert_eq!(filters, session.preview().filters);
    }

    #[test]
    fn test_filter_on_text_and_shape_is_skipped() {
        let mut session = mixed_session();

        for (id, layer_type) in [("txt", LayerType::Text), ("shp", LayerType::Shape)] {
            session.select(Some(id));
            let before = Arc::clone(session.layer(id).unwrap());

            let commit = session.handle_saturation(180.0).unwrap();
            assert_eq!(commit, Commit::Skipped { layer_type });
            assert!(Arc::ptr_eq(session.layer(id).unwrap(), &before));
            assert_eq!(session.preview().filters.saturation, 180.0);
        }
    }

    #[test]
    fn test_locked_layer_rejects_and_resyncs_preview() {
        let mut session = mixed_session();
        lock(&mut session, "img");
        session.select(Some("img"));
        let before = Arc::clone(session.layer("img").unwrap());

        let result = session.handle_contrast(50.0);
        assert_eq!(result, Err(LayerError::LayerLocked("img".to_string())));
        assert!(Arc::ptr_eq(session.layer("img").unwrap(), &before));
        assert_eq!(session.preview().filters.contrast, 100.0);

        assert!(session.handle_rotation(45.0).is_err());
        assert_eq!(session.layer("img").unwrap().base.rotation, 0.0);
        assert_eq!(session.preview().rotation, 0.0);
    }

    #[test]
    fn test_locked_layer_can_be_unlocked() {
        let mut session = mixed_session();
        lock(&mut session, "txt");

        let unlock = LayerPatch {
            is_locked: Some(false),
            ..LayerPatch::default()
        };
        assert!(!session.update_layer("txt", &unlock).unwrap().is_locked());
    }

    #[test]
    fn test_rotation_normalization() {
        let mut session = mixed_session();

        let patch = LayerPatch {
            rotation: Some(450.0),
            ..LayerPatch::default()
        };
        assert_eq!(session.update_layer("shp", &patch).unwrap().base.rotation, 90.0);

        session.select(Some("shp"));
        let commit = session.handle_rotation(-30.0).unwrap();
        assert_eq!(commit.layer().unwrap().base.rotation, 330.0);
        assert_eq!(session.preview().rotation, 330.0);
    }

    #[test]
    fn test_rotation_rejects_non_finite() {
        let mut session = mixed_session();
        session.select(Some("img"));

        let result = session.handle_rotation(f64::INFINITY);
        assert!(matches!(result, Err(LayerError::InvalidValue { attribute: "rotation", .. })));
        assert_eq!(session.preview().rotation, 0.0);
    }

    #[test]
    fn test_select_missing_id_clears_selection() {
        let mut session = mixed_session();
        session.select(Some("img"));
        assert_eq!(session.current(), Some("img"));

        assert!(session.select(Some("nope")).is_none());
        assert_eq!(session.current(), None);

        session.select(Some("txt"));
        session.select(None);
        assert_eq!(session.current(), None);
    }

    #[test]
    fn test_select_loads_preview_from_image() {
        let mut session = mixed_session();
        let patch = LayerPatch {
            brightness: Some(130.0),
            zoom: Some(2.0),
            flip_v: Some(true),
            ..LayerPatch::default()
        };
        session.update_layer("img", &patch).unwrap();
        assert_eq!(session.preview().filters.brightness, 100.0);

        session.select(Some("img"));
        let preview = session.preview();
        assert_eq!(preview.filters.brightness, 130.0);
        assert_eq!(preview.zoom, 2.0);
        assert!(preview.flip_v);
    }

    #[test]
    fn test_update_selected_layer() {
        let mut session = mixed_session();
        let patch = LayerPatch {
            x: Some(5.0),
            ..LayerPatch::default()
        };

        assert_eq!(session.update_selected_layer(&patch), Ok(None));

        session.select(Some("shp"));
        let updated = session.update_selected_layer(&patch).unwrap().unwrap();
        assert_eq!(updated.id(), "shp");
        assert_eq!(updated.base.x, 5.0);
    }

    #[test]
    fn test_update_selected_layer_rejects_foreign_attribute() {
        let mut session = mixed_session();
        session.select(Some("shp"));

        let patch = LayerPatch {
            font_size: Some(12.0),
            ..LayerPatch::default()
        };
        assert!(matches!(
            session.update_selected_layer(&patch),
            Err(LayerError::InvalidAttribute {
                attribute: "fontSize",
                layer_type: LayerType::Shape
            })
        ));
    }

    #[test]
    fn test_update_selected_layer_rejects_out_of_range_filters() {
        let mut session = mixed_session();
        session.select(Some("img"));
        let before = Arc::clone(session.layer("img").unwrap());
        let preview = *session.preview();

        let patch = LayerPatch {
            brightness: Some(9999.0),
            sepia: Some(-50.0),
            ..LayerPatch::default()
        };
        assert!(matches!(
            session.update_selected_layer(&patch),
            Err(LayerError::InvalidValue { attribute: "brightness", .. })
        ));
        assert!(Arc::ptr_eq(&before, session.layer("img").unwrap()));
        assert_eq!(*session.preview(), preview);
    }

    #[test]
    fn test_config_bounds_apply_to_patches() {
        let mut config = EditorConfig::default();
        config.filters.brightness = FilterRange::new(50.0, 120.0);
        let mut design = Design::new(Canvas::new(100.0, 100.0));
        design.add_layer(image("img", 0)).unwrap();
        let mut session = EditorSession::new(design, config).unwrap();

        let patch = LayerPatch::filter(FilterKind::Brightness, 150.0);
        assert!(matches!(
            session.update_layer("img", &patch),
            Err(LayerError::InvalidValue { attribute: "brightness", .. })
        ));

        session.select(Some("img"));
        assert!(session.handle_brightness(150.0).unwrap().is_committed());
        assert_eq!(session.layer("img").unwrap().filters().unwrap().brightness, 120.0);
    }

    #[test]
    fn test_new_rejects_layers_outside_config_bounds() {
        let mut design = Design::new(Canvas::new(100.0, 100.0));
        design.add_layer(image("img", 0)).unwrap();
        design
            .update_layer("img", &LayerPatch::filter(FilterKind::Sepia, 80.0))
            .unwrap();

        let mut config = EditorConfig::default();
        config.filters.sepia = FilterRange::new(0.0, 50.0);
        assert!(matches!(
            EditorSession::new(design, config),
            Err(LayerError::InvalidValue { attribute: "sepia", .. })
        ));
    }

    #[test]
    fn test_add_layers_use_config_defaults() {
        let mut config = EditorConfig::default();
        config.defaults.text.font_size = 48.0;
        config.defaults.shape.stroke_width = Some(3.0);
        let mut session = EditorSession::new(Design::new(Canvas::new(100.0, 100.0)), config).unwrap();

        let text = session
            .add_text_layer(BaseLayer::new("t", 0.0, 0.0, 80.0, 20.0), "Title")
            .unwrap();
        match &text.kind {
            LayerKind::Text(text) => {
                assert_eq!(text.text, "Title");
                assert_eq!(text.font_size, 48.0);
            }
            other => panic!("expected text layer, got {other:?}"),
        }

        let shape = session
            .add_shape_layer(BaseLayer::new("s", 0.0, 0.0, 20.0, 20.0), ShapeType::Star)
            .unwrap();
        match &shape.kind {
            LayerKind::Shape(shape) => {
                assert_eq!(shape.shape_type, ShapeType::Star);
                assert_eq!(shape.stroke_width, Some(3.0));
            }
            other => panic!("expected shape layer, got {other:?}"),
        }

        let image = session
            .add_image_layer(BaseLayer::new("i", 0.0, 0.0, 20.0, 20.0), "photo.png")
            .unwrap();
        assert_eq!(image.filters(), Some(&FilterValues::default()));

        let ids: Vec<&str> = session.layers().iter().map(|l| l.id()).collect();
        assert_eq!(ids, vec!["t", "s", "i"]);
        assert!(matches!(
            session.add_text_layer(BaseLayer::new("t", 0.0, 0.0, 1.0, 1.0), "again"),
            Err(LayerError::DuplicateLayerId(_))
        ));
    }

    #[test]
    fn test_flip_toggles() {
        let mut session = mixed_session();
        session.select(Some("txt"));

        let commit = session.handle_flip_h().unwrap();
        assert_eq!(commit.layer().unwrap().flips(), (true, false));
        let commit = session.handle_flip_h().unwrap();
        assert_eq!(commit.layer().unwrap().flips(), (false, false));

        session.select(Some("shp"));
        let commit = session.handle_flip_v().unwrap();
        assert_eq!(
            commit,
            Commit::Skipped {
                layer_type: LayerType::Shape
            }
        );
    }

    #[test]
    fn test_zoom_clamped_and_image_only() {
        let mut session = mixed_session();
        session.select(Some("img"));

        session.handle_zoom(10.0).unwrap();
        assert_eq!(session.preview().zoom, 5.0);
        match &session.layer("img").unwrap().kind {
            LayerKind::Image(image) => assert_eq!(image.zoom, 5.0),
            other => panic!("expected image layer, got {other:?}"),
        }

        session.select(Some("txt"));
        assert!(!session.handle_zoom(2.0).unwrap().is_committed());
    }

    #[test]
    fn test_opacity_applies_to_every_variant() {
        let mut session = mixed_session();
        for id in ["img", "txt", "shp"] {
            session.select(Some(id));
            let commit = session.handle_opacity(1.5).unwrap();
            assert_eq!(commit.layer().unwrap().opacity(), 1.0);

            let commit = session.handle_opacity(0.25).unwrap();
            assert_eq!(commit.layer().unwrap().opacity(), 0.25);
        }
    }

    #[test]
    fn test_remove_selected_layer_clears_selection() {
        let mut session = mixed_session();
        session.select(Some("txt"));

        session.remove_layer("txt").unwrap();
        assert_eq!(session.current(), None);
        assert_eq!(session.layers().len(), 2);
        assert_eq!(session.handle_opacity(0.5).unwrap(), Commit::PreviewOnly);
    }

    #[test]
    fn test_preview_css_filter() {
        let mut session = mixed_session();
        session.handle_brightness(150.0).unwrap();
        assert_eq!(
            session.preview().filters.css_filter(),
            "brightness(150%) contrast(100%) saturate(100%) hue-rotate(0deg) sepia(0%)"
        );
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

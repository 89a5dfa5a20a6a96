//! The viewer session: everything the UI talks to.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use turntable_core::{LoadError, ParseError, SelectionError, Settings};
use turntable_engine::{TransformEngine, TransformState};
use turntable_io::{FormatRegistry, ReadOptions, SceneData};

use crate::display::{CameraEntry, CameraView, DisplaySnapshot};
use crate::loader::SceneLoader;
use crate::status::{self, StatusKind, StatusMessage};

/// Configuration for a [`ViewerSession`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionOptions {
    /// Width over height of the viewport, given to synthesized cameras.
    pub viewport_aspect: f32,
    /// Seconds a status message stays visible.
    pub status_duration: f64,
    /// Options passed to the scene readers.
    pub read: ReadOptions,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            viewport_aspect: 16.0 / 9.0,
            status_duration: 3.0,
            read: ReadOptions::default(),
        }
    }
}

impl SessionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewport_aspect(mut self, aspect: f32) -> Self {
        self.viewport_aspect = aspect;
        self
    }

    pub fn with_status_duration(mut self, seconds: f64) -> Self {
        self.status_duration = seconds;
        self
    }

    pub fn with_read_options(mut self, read: ReadOptions) -> Self {
        self.read = read;
        self
    }
}

/// Output of one [`ViewerSession::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Model transform to render this frame.
    pub transform: TransformState,
    /// Set on the first tick after a load or a camera selection; the render
    /// camera should adopt it once and then stay under user control.
    pub camera: Option<CameraView>,
}

/// State of one viewer: the loaded scene, the settings, the live transform
/// and the current status message.
///
/// Failed operations never leave partial updates behind: the scene, settings
/// and transform either change as a whole or not at all.
#[derive(Debug)]
pub struct ViewerSession {
    options: SessionOptions,
    registry: FormatRegistry,
    scene: Option<SceneData>,
    settings: Settings,
    engine: TransformEngine,
    status: Option<StatusMessage>,
    camera_pending: bool,
}

impl Default for ViewerSession {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}

impl ViewerSession {
    /// Create a session with the built-in scene readers.
    pub fn new(options: SessionOptions) -> Self {
        Self::with_registry(FormatRegistry::with_defaults(), options)
    }

    /// Create a session with a custom set of readers.
    pub fn with_registry(registry: FormatRegistry, options: SessionOptions) -> Self {
        Self {
            options,
            registry,
            scene: None,
            settings: Settings::default(),
            engine: TransformEngine::new(),
            status: None,
            camera_pending: false,
        }
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// A loader that can run while the session keeps ticking.
    pub fn loader(&self) -> SceneLoader {
        SceneLoader::new(
            self.registry.clone(),
            self.options.read,
            self.options.viewport_aspect,
        )
    }

    /// Commit the outcome of a load.
    ///
    /// A successful result replaces the scene wholesale and selects its
    /// default camera; when several loads overlap, the last one committed
    /// wins. A failure keeps the previous scene and shows the error; a later
    /// success clears that error.
    pub fn finish_load(&mut self, result: Result<SceneData, LoadError>) -> Result<(), LoadError> {
        match result {
            Ok(scene) => {
                if let Some(source) = scene.source() {
                    debug!("showing {} ({})", source.file_name, source.format);
                }
                self.scene = Some(scene);
                self.camera_pending = true;
                if self
                    .status
                    .as_ref()
                    .is_some_and(|status| status.kind == StatusKind::Error)
                {
                    self.status = None;
                }
                Ok(())
            }
            Err(err) => {
                warn!("load failed: {err}");
                self.set_status(StatusMessage::error(
                    err.to_string(),
                    self.options.status_duration,
                ));
                Err(err)
            }
        }
    }

    /// Load a file whose bytes are already in memory.
    pub fn ingest(&mut self, file_name: &str, bytes: &[u8]) -> Result<(), LoadError> {
        let result = self.loader().load_bytes(file_name, bytes);
        self.finish_load(result)
    }

    pub fn scene(&self) -> Option<&SceneData> {
        self.scene.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Apply a settings document on top of the current settings.
    ///
    /// Fields with the wrong type keep their current value. Text that is not
    /// a JSON object leaves the settings untouched.
    pub fn import_settings(&mut self, text: &str) -> Result<(), ParseError> {
        match Settings::import(text, &self.settings) {
            Ok(settings) => {
                self.settings = settings;
                info!("settings applied");
                self.set_status(StatusMessage::success(
                    status::SETTINGS_APPLIED,
                    self.options.status_duration,
                ));
                Ok(())
            }
            Err(err) => {
                warn!("rejected settings document: {err}");
                self.set_status(StatusMessage::error(
                    status::SETTINGS_INVALID,
                    self.options.status_duration,
                ));
                Err(err)
            }
        }
    }

    /// The current settings as pretty-printed JSON.
    pub fn export_settings(&mut self) -> serde_json::Result<String> {
        let json = self.settings.export()?;
        self.set_status(StatusMessage::success(
            status::SETTINGS_EXPORTED,
            self.options.status_duration,
        ));
        Ok(json)
    }

    /// Change individual settings, e.g. from a slider.
    pub fn update_settings(&mut self, update: impl FnOnce(&mut Settings)) {
        update(&mut self.settings);
    }

    /// Restore the default settings. The model eases back on later ticks.
    pub fn reset_settings(&mut self) {
        self.settings = Settings::default();
    }

    /// Select the camera at `index` of [`camera_entries`](Self::camera_entries).
    pub fn set_active_camera(&mut self, index: usize) -> Result<(), SelectionError> {
        let scene = self.scene.as_mut().ok_or(SelectionError::NoScene)?;
        scene.set_active_camera(index)?;
        self.camera_pending = true;
        Ok(())
    }

    /// The camera list, in scene order.
    pub fn camera_entries(&self) -> Vec<CameraEntry> {
        let Some(scene) = &self.scene else {
            return Vec::new();
        };
        scene
            .cameras()
            .iter()
            .enumerate()
            .map(|(i, camera)| CameraEntry::new(i, camera, i == scene.active_index()))
            .collect()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// The live transform.
    pub fn state(&self) -> TransformState {
        self.engine.state()
    }

    /// Live values and orbit limits for display.
    pub fn display(&self) -> DisplaySnapshot {
        DisplaySnapshot::new(self.engine.state(), &self.settings)
    }

    /// Advance one frame of `elapsed` seconds.
    pub fn tick(&mut self, elapsed: f64) -> Frame {
        let transform = self.engine.tick(&self.settings, elapsed);

        if let Some(status) = &mut self.status {
            status.age(elapsed);
            if status.is_expired() {
                self.status = None;
            }
        }

        let camera = if std::mem::take(&mut self.camera_pending) {
            self.scene
                .as_ref()
                .map(|scene| CameraView::new(scene.active_index(), scene.active_camera()))
        } else {
            None
        };

        Frame { transform, camera }
    }

    fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }
}

//! The ingestion and control boundary of the Turntable viewer.
//!
//! A [`ViewerSession`] owns the loaded scene, the [`Settings`] and the
//! transform engine. The host calls [`ViewerSession::tick`] once per frame
//! and renders the returned [`Frame`]; user actions (dropping a file,
//! importing settings, picking a camera) go through the session's methods
//! and report back through a transient [`StatusMessage`].
//!
//! ```ignore
//! use turntable_viewer::{SessionOptions, ViewerSession};
//!
//! let mut session = ViewerSession::new(SessionOptions::default());
//! let loader = session.loader();
//! let result = loader.load("robot.glb", read_dropped_file()).await;
//! session.finish_load(result)?;
//!
//! loop {
//!     let frame = session.tick(clock.delta());
//!     if let Some(view) = frame.camera {
//!         renderer.set_camera(view);
//!     }
//!     renderer.draw(frame.transform.model_matrix());
//! }
//! ```

pub mod display;
pub mod loader;
pub mod session;
pub mod status;

pub use display::{CameraEntry, CameraView, DisplaySnapshot};
pub use loader::SceneLoader;
pub use session::{Frame, SessionOptions, ViewerSession};
pub use status::{StatusKind, StatusMessage};
pub use turntable_core::Settings;

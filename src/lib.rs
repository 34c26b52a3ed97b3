#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod config;
pub mod document;
pub mod error;
pub mod geometry;
pub mod id_generator;
pub mod input;
pub mod painter;
pub mod palette;
pub mod panels;
pub mod renderer;
pub mod settings;
pub mod shape;
pub mod transform;

pub use app::VecyApp;
pub use canvas::Canvas;
pub use config::{CanvasConfig, ViewConfig};
pub use document::Document;
pub use error::{ConfigError, PaletteError};
pub use geometry::{ScreenPoint, ScreenRect, ScreenVector, WorldPoint, WorldRect, WorldVector};
pub use id_generator::{IdGenerator, ShapeId};
pub use input::{GestureMode, GestureState, InputEvent, InputHandler, InputLocation};
pub use painter::{Backend, DrawSink, LineStyle, Outline, Painter};
pub use settings::Settings;
pub use shape::{Shape, ShapeType};
pub use transform::CanvasTransform;

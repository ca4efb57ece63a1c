//! # stylescale
//!
//! Applies a theme configuration to the elements of component source files.
//!
//! A host (a build step or code transform) drives a [`StyleSession`] while
//! it walks each compilation unit:
//!
//! 1. [`StyleSession::begin_file`] with the unit's path
//! 2. [`StyleSession::enter_function`] / [`StyleSession::enter_binding`] for
//!    declarations that name a component
//! 3. [`StyleSession::style_element`] for every element, applying the
//!    returned [`ClassEdit`]
//!
//! Rule parsing, resolution order and class merging live in [`themerules`].
//!
//! ## Configuration
//!
//! [`load_config`] reads `theme.config.json` (or the path in
//! [`SessionOptions`]). A missing file is logged and treated as empty.
//!
//! ## Logging
//!
//! Everything goes through the [`log`] facade. [`init_logger`] installs a
//! simple file logger for hosts that have none.

pub mod component;
pub mod config;
mod error;
mod log_init;
pub mod session;

pub use log;
pub use themerules;

pub use component::{BindingValue, ComponentContext, component_name_from_path};
pub use config::{DEFAULT_CONFIG_PATH, SessionOptions, load_config, parse_config};
pub use error::{Result, StylescaleError};
pub use log_init::init_logger;
pub use session::{ElementAttributes, StyleSession};
pub use themerules::{ClassEdit, ClassValue, ThemeConfiguration};

//! Tracking which component an element belongs to.
//!
//! The component name starts as the source file's logical name and is
//! replaced whenever the traversal enters a named function, or a variable
//! bound to a function. The last one entered wins.

use std::path::Path;

/// The logical component name of a source file.
///
/// This is the file stem, except for `index` files, which take the name of
/// their directory.
///
/// ```
/// use std::path::Path;
/// use stylescale::component::component_name_from_path;
///
/// assert_eq!(component_name_from_path(Path::new("src/Clock.tsx")).as_deref(), Some("Clock"));
/// assert_eq!(
///     component_name_from_path(Path::new("src/UserCard/index.jsx")).as_deref(),
///     Some("UserCard")
/// );
/// ```
pub fn component_name_from_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    if stem == "index" {
        let dir = path.parent()?.file_name()?.to_str()?;
        Some(dir.to_string())
    } else {
        Some(stem.to_string())
    }
}

/// What a variable declaration is initialized with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingValue {
    /// A function or arrow-function expression.
    Function,
    /// Anything else.
    Other,
}

/// The component-name scalar for one compilation unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComponentContext {
    current: Option<String>,
}

impl ComponentContext {
    pub fn for_file(path: &Path) -> Self {
        Self {
            current: component_name_from_path(path),
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Resets the context to a new file's logical name.
    pub fn enter_file(&mut self, path: &Path) {
        self.current = component_name_from_path(path);
    }

    /// A named function declaration.
    pub fn enter_function(&mut self, name: &str) {
        if !name.is_empty() {
            self.current = Some(name.to_string());
        }
    }

    /// A variable declaration; only function-valued bindings name a component.
    pub fn enter_binding(&mut self, name: &str, value: BindingValue) {
        if value == BindingValue::Function {
            self.enter_function(name);
        }
    }
}

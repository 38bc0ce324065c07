//! Tera-backed template engine.
//!
//! Template files get the full tera language (expressions, conditionals,
//! loops, filters) plus the garden contract pieces:
//!
//! - `{{ plant_id }}`, `{{ plant_path }}`, `{{ vars.KEY }}` — direct
//!   context bindings from the resolved inventory.
//! - `{{ var(name="KEY") }}` — lookup that fails the render when `KEY` has
//!   no value.
//! - `... | notEmpty` — filter that fails the render on an empty string.
//! - `{{ isOne(value=N) }}` — numeric helper, true exactly for `1`.
//!
//! Each render builds a fresh [`Tera`] instance so the registered
//! functions close over exactly the inventory being evaluated. Templates
//! are registered under an extensionless name, which keeps tera's
//! HTML autoescaping out of the picture.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tera::{Context, Tera, Value};

use garden_core::{
    application::ports::{RenderError, TemplateEngine},
    domain::{TemplateInventory, VarMap},
};

/// Registration name for the single template each render evaluates.
const TEMPLATE_NAME: &str = "plant";

/// Production template engine backed by `tera`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeraEngine;

impl TeraEngine {
    /// Create a new tera template engine.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateEngine for TeraEngine {
    fn render(&self, content: &str, inventory: &TemplateInventory) -> Result<String, RenderError> {
        let fault = FaultCell::default();

        let mut tera = Tera::default();
        tera.register_function("var", var_lookup(inventory.vars.clone(), fault.clone()));
        tera.register_function("isOne", is_one);
        tera.register_filter("notEmpty", not_empty(fault.clone()));

        tera.add_raw_template(TEMPLATE_NAME, content)
            .map_err(|e| engine_error(&e))?;

        let context = Context::from_serialize(inventory).map_err(|e| engine_error(&e))?;

        match tera.render(TEMPLATE_NAME, &context) {
            Ok(rendered) => Ok(rendered),
            // A contract fault recorded by var/notEmpty outranks tera's
            // stringly wrapper around the same failure.
            Err(e) => Err(fault.take().unwrap_or_else(|| engine_error(&e))),
        }
    }
}

/// Records the first typed contract violation raised inside a template
/// function, so the render error keeps its variable-level identity instead
/// of collapsing into a generic engine message.
#[derive(Clone, Default)]
struct FaultCell(Arc<Mutex<Option<RenderError>>>);

impl FaultCell {
    fn record(&self, fault: RenderError) {
        let mut slot = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if slot.is_none() {
            *slot = Some(fault);
        }
    }

    fn take(&self) -> Option<RenderError> {
        self.0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
    }
}

/// `var(name="KEY")` — strict variable lookup against the resolved vars.
fn var_lookup(vars: VarMap, fault: FaultCell) -> impl tera::Function + 'static {
    move |args: &HashMap<String, Value>| -> tera::Result<Value> {
        let name = args
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| tera::Error::msg("var requires a string `name` argument"))?;

        match vars.get(name) {
            Some(value) => Ok(Value::String(value.clone())),
            None => {
                fault.record(RenderError::MissingVariable {
                    name: name.to_owned(),
                });
                Err(tera::Error::msg(format!(
                    "no value found for variable '{name}'"
                )))
            }
        }
    }
}

/// `| notEmpty` — passes non-empty strings through, fails the render on an
/// empty one.
fn not_empty(fault: FaultCell) -> impl tera::Filter + 'static {
    move |value: &Value, _args: &HashMap<String, Value>| -> tera::Result<Value> {
        match value.as_str() {
            Some(s) if !s.is_empty() => Ok(value.clone()),
            Some(_) => {
                fault.record(RenderError::EmptyValue);
                Err(tera::Error::msg("required value is empty"))
            }
            None => Err(tera::Error::msg("notEmpty expects a string value")),
        }
    }
}

/// `isOne(value=N)` — true exactly when `N` is the integer 1.
fn is_one(args: &HashMap<String, Value>) -> tera::Result<Value> {
    match args.get("value").and_then(Value::as_i64) {
        Some(n) => Ok(Value::Bool(n == 1)),
        None => Err(tera::Error::msg("isOne requires an integer `value` argument")),
    }
}

/// Flatten a tera error chain into one message; tera nests the useful part
/// one or two sources down.
fn engine_error(err: &tera::Error) -> RenderError {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    RenderError::Engine { message }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Resolved variable inventory for one plant operation.

use std::path::Path;

use serde::Serialize;

use crate::domain::VarMap;

/// Child-process environment variable naming the plant's absolute path.
pub const ENV_PLANT_PATH: &str = "_GARDEN_PLANT_PATH";

/// Child-process environment variable naming the plant's identifier.
pub const ENV_PLANT_ID: &str = "_GARDEN_PLANT_ID";

/// Prefix for one child-process environment variable per resolved var.
pub const ENV_VAR_PREFIX: &str = "_GARDENVAR_";

/// Everything a template, or a reaped child process, can see for one plant.
///
/// Created fresh per grow/reap operation and discarded afterwards, never
/// persisted. `vars` is the fully resolved set (zone overlays then
/// plant-local vars); `plant_id` and `plant_path` are the implicit bindings
/// every plant gets for free. Serialized field names are the template
/// context names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInventory {
    pub plant_id: String,
    /// Absolute, placeholder-expanded target path.
    pub plant_path: String,
    pub vars: VarMap,
}

impl TemplateInventory {
    pub fn new(plant_id: impl Into<String>, plant_path: &Path, vars: VarMap) -> Self {
        Self {
            plant_id: plant_id.into(),
            plant_path: plant_path.display().to_string(),
            vars,
        }
    }

    /// Environment pairs injected into a reap child process: the fixed
    /// path/id pair followed by one `_GARDENVAR_<KEY>` per resolved var, in
    /// key order.
    pub fn child_env(&self) -> Vec<(String, String)> {
        let mut env = vec![
            (ENV_PLANT_PATH.to_owned(), self.plant_path.clone()),
            (ENV_PLANT_ID.to_owned(), self.plant_id.clone()),
        ];
        env.extend(
            self.vars
                .iter()
                .map(|(key, value)| (format!("{ENV_VAR_PREFIX}{key}"), value.clone())),
        );
        env
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory() -> TemplateInventory {
        let vars: VarMap = [("A", "1"), ("NAME", "World")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TemplateInventory::new("p1", Path::new("/srv/p1"), vars)
    }

    #[test]
    fn child_env_includes_fixed_pair() {
        let env = inventory().child_env();
        assert!(env.contains(&("_GARDEN_PLANT_PATH".into(), "/srv/p1".into())));
        assert!(env.contains(&("_GARDEN_PLANT_ID".into(), "p1".into())));
    }

    #[test]
    fn child_env_prefixes_every_var() {
        let env = inventory().child_env();
        assert!(env.contains(&("_GARDENVAR_A".into(), "1".into())));
        assert!(env.contains(&("_GARDENVAR_NAME".into(), "World".into())));
        assert_eq!(env.len(), 4);
    }

    #[test]
    fn child_env_vars_come_in_key_order() {
        let env = inventory().child_env();
        let keys: Vec<&str> = env.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "_GARDEN_PLANT_PATH",
                "_GARDEN_PLANT_ID",
                "_GARDENVAR_A",
                "_GARDENVAR_NAME"
            ]
        );
    }
}

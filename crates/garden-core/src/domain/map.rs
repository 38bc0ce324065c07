//! Garden map: the declarative plant/zone inventory.
//!
//! Loaded once per invocation from the map document and read-only from then
//! on. The one subtle invariant the whole pipeline depends on lives here:
//! variable precedence is plant > last-listed zone > earlier zones.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::layout;

/// Variable bindings, keyed by name.
pub type VarMap = BTreeMap<String, String>;

/// A named group of plants; purely a source of inherited variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    #[serde(default)]
    pub vars: VarMap,
}

/// One managed project instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    /// Target filesystem path; may contain [`layout::PLANT_ID_TOKEN`].
    #[serde(default)]
    pub path: String,

    /// Seed directory, relative to `<garden>/seeds/`.
    #[serde(default)]
    pub seed: String,

    /// Plant-local variables (highest precedence).
    #[serde(default)]
    pub vars: VarMap,

    /// Zones this plant belongs to, in precedence order (later wins).
    /// Identifiers that match no declared zone are tolerated and skipped.
    #[serde(default)]
    pub zones: Vec<String>,
}

impl Plant {
    /// Declared path with every placeholder occurrence replaced by the
    /// plant's identifier. Paths without the token pass through unchanged;
    /// no other placeholders are recognized.
    pub fn expanded_path(&self, plant_id: &str) -> String {
        self.path.replace(layout::PLANT_ID_TOKEN, plant_id)
    }
}

/// Root aggregate: every plant and zone the garden declares.
///
/// Both mappings are `BTreeMap`s, so iteration (and therefore plant
/// processing order) is the lexicographic identifier order. Duplicate
/// identifiers in the document resolve last-write-wins; that is an explicit
/// contract of [`de::last_write_wins`], not an accident of the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GardenMap {
    #[serde(default, deserialize_with = "de::last_write_wins")]
    pub plants: BTreeMap<String, Plant>,

    #[serde(default, deserialize_with = "de::last_write_wins")]
    pub zones: BTreeMap<String, Zone>,
}

impl GardenMap {
    /// Look up a plant by identifier.
    pub fn plant(&self, plant_id: &str) -> Result<&Plant, DomainError> {
        self.plants
            .get(plant_id)
            .ok_or_else(|| DomainError::PlantNotFound {
                id: plant_id.to_owned(),
            })
    }

    /// Resolve the full variable set for one plant.
    ///
    /// Overlay order: each zone in the plant's declared list in turn (a
    /// later zone wins over an earlier one on key collision, identifiers
    /// with no matching zone are silently skipped), then the plant's own
    /// vars on top. Plant-level variables always take final precedence,
    /// regardless of declaration order.
    pub fn vars_for_plant(&self, plant_id: &str) -> Result<VarMap, DomainError> {
        let plant = self.plant(plant_id)?;

        let mut resolved = VarMap::new();
        for zone_id in &plant.zones {
            if let Some(zone) = self.zones.get(zone_id) {
                resolved.extend(zone.vars.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }
        resolved.extend(plant.vars.iter().map(|(k, v)| (k.clone(), v.clone())));
        Ok(resolved)
    }

    /// Plants selected by `filter`.
    ///
    /// A plant-ID filter wins over a zone filter: it yields a singleton set
    /// when the plant exists and an empty set otherwise, the zone filter is
    /// ignored either way. A zone filter selects by membership in the
    /// plant's declared zone list. With neither, every plant is selected.
    pub fn filtered_plants(&self, filter: &PlantFilter) -> BTreeMap<&str, &Plant> {
        if let Some(plant_id) = filter.plant.as_deref() {
            return match self.plants.get_key_value(plant_id) {
                Some((id, plant)) => BTreeMap::from([(id.as_str(), plant)]),
                None => BTreeMap::new(),
            };
        }

        if let Some(zone_id) = filter.zone.as_deref() {
            return self
                .plants
                .iter()
                .filter(|(_, plant)| plant.zones.iter().any(|z| z == zone_id))
                .map(|(id, plant)| (id.as_str(), plant))
                .collect();
        }

        self.plants
            .iter()
            .map(|(id, plant)| (id.as_str(), plant))
            .collect()
    }

    /// Identifiers of the plants selected by `filter`, in lexicographic
    /// order. Deterministic; callers and tests may rely on it.
    pub fn filtered_plant_ids(&self, filter: &PlantFilter) -> Vec<String> {
        self.filtered_plants(filter)
            .into_keys()
            .map(str::to_owned)
            .collect()
    }
}

// ── Plant selection ───────────────────────────────────────────────────────────

/// Which plants an invocation operates on.
///
/// Built from the selection flags at the CLI edge and threaded explicitly
/// into every lookup; never stored in process-global state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlantFilter {
    /// Select exactly this plant; takes precedence over `zone`.
    pub plant: Option<String>,
    /// Select every plant belonging to this zone.
    pub zone: Option<String>,
}

impl PlantFilter {
    /// Select every plant.
    pub fn all() -> Self {
        Self::default()
    }

    /// Select a single plant by identifier.
    pub fn by_plant(plant_id: impl Into<String>) -> Self {
        Self {
            plant: Some(plant_id.into()),
            zone: None,
        }
    }

    /// Select every plant belonging to a zone.
    pub fn by_zone(zone_id: impl Into<String>) -> Self {
        Self {
            plant: None,
            zone: Some(zone_id.into()),
        }
    }

    /// Build from optional CLI flags; empty strings count as unset.
    pub fn from_options(plant: Option<String>, zone: Option<String>) -> Self {
        Self {
            plant: plant.filter(|p| !p.is_empty()),
            zone: zone.filter(|z| !z.is_empty()),
        }
    }

    /// `true` when neither filter is set.
    pub fn is_unfiltered(&self) -> bool {
        self.plant.is_none() && self.zone.is_none()
    }
}

// ── Deserialization helpers ───────────────────────────────────────────────────

/// Map-document deserialization helpers.
pub mod de {
    use std::collections::BTreeMap;
    use std::fmt;
    use std::marker::PhantomData;

    use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

    /// Deserialize an identifier-keyed mapping with last-write-wins
    /// semantics on duplicate keys.
    ///
    /// Later entries plainly overwrite earlier ones, for any
    /// self-describing format. A null value (an empty `plants:` key in
    /// YAML) deserializes to an empty map.
    pub fn last_write_wins<'de, D, V>(deserializer: D) -> Result<BTreeMap<String, V>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        struct MapVisitor<V>(PhantomData<V>);

        impl<'de, V> Visitor<'de> for MapVisitor<V>
        where
            V: Deserialize<'de>,
        {
            type Value = BTreeMap<String, V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a mapping keyed by identifier, or null")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = BTreeMap::new();
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(BTreeMap::new())
            }
        }

        deserializer.deserialize_any(MapVisitor(PhantomData))
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

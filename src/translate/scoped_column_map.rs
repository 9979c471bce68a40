use indexmap::{map::Entry, IndexMap};
use serde_json::Value;
use tracing::{debug, trace};

use crate::{
    nodes::VarRef,
    translate::{AttributeKey, MapConfig, MappedColumn, PlanNodeKind, ResolvedColumn, TranslateError},
};

/// Maps every variable visible during the translation of one query to its
/// optimizer column.
///
/// All nested query levels share one map; entries are told apart by the
/// absolute scope level stored in their key. The map only grows: entries are
/// added by the `load_*` methods as range table entries are translated and
/// are never removed.
///
/// Inserting a key twice, using slot 0, or resolving with a level offset
/// deeper than the current level are translator bugs and panic. Resolving a
/// variable nobody loaded is an ordinary [`TranslateError`].
#[derive(Debug)]
pub struct ScopedColumnMap {
    entries: IndexMap<AttributeKey, MappedColumn>,
    config: MapConfig,
}

impl Default for ScopedColumnMap {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopedColumnMap {
    pub fn new() -> Self {
        Self::with_config(MapConfig::default())
    }

    /// Panics if `config.outer_slot` is 0.
    pub fn with_config(config: MapConfig) -> Self {
        assert!(config.outer_slot > 0, "outer slot must be positive");
        Self { entries: IndexMap::with_capacity(config.initial_capacity), config }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a single mapping.
    ///
    /// # Panics
    ///
    /// If `slot` is 0 or `(scope_level, slot, attribute_number)` is already mapped.
    pub fn insert(
        &mut self,
        scope_level: u32,
        slot: u32,
        attribute_number: i32,
        column_id: u32,
        display_name: impl Into<String>,
    ) {
        // aggregate nodes use slot 0 in their vars; the translator must have
        // rewritten those to the outer slot before loading
        assert!(slot > 0, "slot 0 is not a valid range table index");

        let key = AttributeKey::new(scope_level, slot, attribute_number);
        match self.entries.entry(key) {
            Entry::Occupied(_) => panic!("column mapping for {key} inserted twice"),
            Entry::Vacant(vacant) => {
                let column = ResolvedColumn::new(column_id, display_name);
                trace!(target: "varmap::translate", %key, column_id, name = %column.display_name, "insert");
                vacant.insert(MappedColumn::new(key, column));
            }
        }
    }

    /// Look up the optimizer column for a variable.
    ///
    /// `level_offset` counts query levels outward from `current_scope_level`.
    /// Under window, aggregate and materialize nodes the slot is replaced by
    /// the configured outer slot.
    ///
    /// # Panics
    ///
    /// If `level_offset > current_scope_level`.
    pub fn resolve(
        &self,
        current_scope_level: u32,
        level_offset: u32,
        slot: u32,
        attribute_number: i32,
        node_kind: PlanNodeKind,
    ) -> Result<&ResolvedColumn, TranslateError> {
        assert!(
            level_offset <= current_scope_level,
            "variable reaches {level_offset} levels out from level {current_scope_level}"
        );

        let scope_level = current_scope_level - level_offset;
        let slot = if node_kind.uses_outer_slot() { self.config.outer_slot } else { slot };
        let key = AttributeKey::new(scope_level, slot, attribute_number);

        match self.entries.get(&key) {
            Some(entry) => Ok(&entry.column),
            None => {
                debug!(target: "varmap::translate", %key, ?node_kind, "no variable");
                Err(TranslateError::NoVariable { scope_level, slot, attribute_number })
            }
        }
    }

    pub fn resolve_var(
        &self,
        current_scope_level: u32,
        var: &impl VarRef,
        node_kind: PlanNodeKind,
    ) -> Result<&ResolvedColumn, TranslateError> {
        self.resolve(current_scope_level, var.level_offset(), var.slot(), var.attribute_number(), node_kind)
    }

    /// Optimizer column name of a variable.
    pub fn col_name(
        &self,
        current_scope_level: u32,
        var: &impl VarRef,
        node_kind: PlanNodeKind,
    ) -> Result<&str, TranslateError> {
        self.resolve_var(current_scope_level, var, node_kind)
            .map(|c| c.display_name.as_str())
    }

    /// Optimizer column id of a variable.
    pub fn col_id(
        &self,
        current_scope_level: u32,
        var: &impl VarRef,
        node_kind: PlanNodeKind,
    ) -> Result<u32, TranslateError> {
        self.resolve_var(current_scope_level, var, node_kind)
            .map(|c| c.column_id)
    }

    pub fn contains(&self, key: &AttributeKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Exact key lookup, no level arithmetic or slot substitution.
    pub fn get(&self, key: &AttributeKey) -> Option<&MappedColumn> {
        self.entries.get(key)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &MappedColumn> {
        self.entries.values()
    }

    pub fn entries_at_scope(&self, scope_level: u32) -> impl Iterator<Item = &MappedColumn> {
        self.entries.values().filter(move |e| e.key.scope_level == scope_level)
    }

    /// Independent copy with the same entries and configuration, for forking
    /// a translation context.
    pub fn copy_map(&self) -> ScopedColumnMap {
        let capacity = self.config.initial_capacity.max(self.entries.len());
        let mut copy = ScopedColumnMap {
            entries: IndexMap::with_capacity(capacity),
            config: self.config,
        };
        for entry in self.entries.values() {
            let key = entry.key;
            copy.insert(
                key.scope_level,
                key.slot,
                key.attribute_number,
                entry.column.column_id,
                entry.column.display_name.as_str(),
            );
        }
        debug!(target: "varmap::translate", entries = copy.len(), "copied column map");
        copy
    }

    /// JSON array of all entries, for diagnostics.
    pub fn snapshot_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self.entries.values().collect::<Vec<_>>())
    }
}

impl Clone for ScopedColumnMap {
    fn clone(&self) -> Self {
        self.copy_map()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{nodes::Var, translate::OUTER_SLOT};

    fn map_with(entries: &[(u32, u32, i32, u32, &str)]) -> ScopedColumnMap {
        let mut map = ScopedColumnMap::with_config(MapConfig::new().with_capacity(8));
        for &(level, slot, attno, id, name) in entries {
            map.insert(level, slot, attno, id, name);
        }
        map
    }

    #[test]
    fn inserted_entries_resolve_to_their_values() {
        let map = map_with(&[(0, 1, 1, 10, "a"), (0, 1, 2, 11, "b"), (1, 1, 1, 20, "a"), (0, 2, 1, 30, "x")]);

        assert_eq!(map.len(), 4);
        assert_eq!(map.resolve(0, 0, 1, 2, PlanNodeKind::None), Ok(&ResolvedColumn::new(11, "b")));
        assert_eq!(map.resolve(1, 0, 1, 1, PlanNodeKind::None), Ok(&ResolvedColumn::new(20, "a")));
        assert_eq!(map.resolve(0, 0, 2, 1, PlanNodeKind::HashJoin), Ok(&ResolvedColumn::new(30, "x")));
    }

    #[test]
    fn level_offset_points_outward() {
        let map = map_with(&[(2, 5, 1, 42, "outer_col")]);

        let hit = map.resolve(3, 1, 5, 1, PlanNodeKind::None).unwrap();
        assert_eq!(hit.column_id, 42);

        let miss = map.resolve(3, 0, 5, 1, PlanNodeKind::None);
        assert_eq!(miss, Err(TranslateError::NoVariable { scope_level: 3, slot: 5, attribute_number: 1 }));
    }

    #[test]
    fn outer_slot_nodes_ignore_the_var_slot() {
        let map = map_with(&[(0, OUTER_SLOT, 1, 7, "sum"), (0, 3, 1, 8, "base")]);

        for kind in [PlanNodeKind::Window, PlanNodeKind::Agg, PlanNodeKind::Materialize] {
            let a = map.resolve(0, 0, 3, 1, kind).unwrap();
            let b = map.resolve(0, 0, 4, 1, kind).unwrap();
            assert_eq!(a, b);
            assert_eq!(a.display_name, "sum");
        }
        assert_eq!(map.resolve(0, 0, 3, 1, PlanNodeKind::Sort).unwrap().display_name, "base");
    }

    #[test]
    fn outer_slot_follows_configuration() {
        let mut map = ScopedColumnMap::with_config(MapConfig::new().with_outer_slot(99));
        map.insert(0, 99, 1, 5, "cnt");
        assert_eq!(map.resolve(0, 0, 1, 1, PlanNodeKind::Agg).unwrap().column_id, 5);
        assert!(map.resolve(0, 0, OUTER_SLOT, 1, PlanNodeKind::None).is_err());
    }

    #[test]
    fn misses_are_errors_on_empty_and_populated_maps() {
        let empty = ScopedColumnMap::new();
        assert!(empty.is_empty());
        assert!(matches!(
            empty.resolve(0, 0, 1, 1, PlanNodeKind::None),
            Err(TranslateError::NoVariable { .. })
        ));

        let map = map_with(&[(0, 1, 1, 10, "a"), (0, 1, 2, 11, "b")]);
        assert_eq!(
            map.resolve(0, 0, 1, 3, PlanNodeKind::None),
            Err(TranslateError::NoVariable { scope_level: 0, slot: 1, attribute_number: 3 })
        );
        assert_eq!(
            map.resolve(0, 0, 7, 1, PlanNodeKind::Agg),
            Err(TranslateError::NoVariable { scope_level: 0, slot: OUTER_SLOT, attribute_number: 1 })
        );
    }

    #[test]
    fn var_accessors_return_name_and_id() {
        let map = map_with(&[(0, 1, 1, 10, "a"), (0, 1, 2, 11, "b")]);
        let var = Var::outer(1, 2, 1);

        assert_eq!(map.col_name(1, &var, PlanNodeKind::None), Ok("b"));
        assert_eq!(map.col_id(1, &var, PlanNodeKind::None), Ok(11));
        assert!(map.col_id(0, &Var::new(1, 9), PlanNodeKind::None).is_err());
    }

    #[test]
    fn copy_is_independent_of_the_source() {
        let mut map = map_with(&[(0, 1, 1, 10, "a"), (1, 2, 3, 11, "b")]);
        let copy = map.copy_map();

        map.insert(0, 1, 2, 12, "c");

        assert_eq!(copy.len(), 2);
        assert_eq!(copy.config(), map.config());
        assert!(copy.resolve(0, 0, 1, 2, PlanNodeKind::None).is_err());
        for entry in copy.iter() {
            let original = map.get(&entry.key).unwrap();
            assert_eq!(original, entry);
            assert_ne!(original.display_name().as_ptr(), entry.display_name().as_ptr());
        }
    }

    #[test]
    fn clone_goes_through_copy() {
        let map = map_with(&[(0, 1, 1, 10, "a")]);
        let cloned = map.clone();
        assert_eq!(cloned.get(&AttributeKey::new(0, 1, 1)).map(|e| e.column_id()), Some(10));
    }

    #[test]
    fn scope_filter_and_iteration_keep_insertion_order() {
        let map = map_with(&[(1, 1, 1, 1, "p"), (0, 1, 1, 2, "q"), (1, 2, 1, 3, "r")]);

        let inner: Vec<u32> = map.entries_at_scope(1).map(|e| e.column_id()).collect();
        assert_eq!(inner, vec![1, 3]);
        assert!(map.contains(&AttributeKey::new(0, 1, 1)));
        assert!(!map.contains(&AttributeKey::new(0, 2, 1)));
    }

    #[test]
    fn snapshot_lists_keys_and_columns() {
        let map = map_with(&[(0, 1, 1, 10, "a")]);
        assert_eq!(
            map.snapshot_json().unwrap(),
            json!([{
                "key": { "scope_level": 0, "slot": 1, "attribute_number": 1 },
                "column": { "column_id": 10, "display_name": "a" }
            }])
        );
    }

    #[test]
    #[should_panic(expected = "inserted twice")]
    fn duplicate_insert_panics() {
        let _ = map_with(&[(0, 1, 1, 10, "a"), (0, 1, 1, 11, "b")]);
    }

    #[test]
    #[should_panic(expected = "slot 0")]
    fn slot_zero_panics() {
        let _ = map_with(&[(0, 0, 1, 10, "a")]);
    }

    #[test]
    #[should_panic(expected = "outer slot must be positive")]
    fn config_with_outer_slot_zero_panics() {
        let _ = ScopedColumnMap::with_config(MapConfig { initial_capacity: 4, outer_slot: 0 });
    }

    #[test]
    #[should_panic(expected = "levels out")]
    fn offset_beyond_current_level_panics() {
        let map = map_with(&[(0, 1, 1, 10, "a")]);
        let _ = map.resolve(0, 1, 1, 1, PlanNodeKind::None);
    }
}

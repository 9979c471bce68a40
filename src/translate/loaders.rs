use tracing::debug;

use crate::{
    nodes::{ColumnDescriptor, ProjectElement, ProjectList, ScalarIdent, TableDescriptor, TargetEntry},
    translate::ScopedColumnMap,
};

impl ScopedColumnMap {
    /// Load the columns of a base table range table entry.
    pub fn load_table_columns(&mut self, scope_level: u32, slot: u32, table: &impl TableDescriptor) {
        for col in table.columns() {
            self.insert(scope_level, slot, col.attribute_number(), col.column_id(), col.name());
        }
        debug!(target: "varmap::translate", scope_level, slot, columns = table.arity(), "loaded table columns");
    }

    /// Load an arbitrary list of column descriptors, keyed by their own
    /// attribute numbers.
    pub fn load_columns<C: ColumnDescriptor>(&mut self, scope_level: u32, slot: u32, columns: &[C]) {
        for col in columns {
            self.insert(scope_level, slot, col.attribute_number(), col.column_id(), col.name());
        }
        debug!(target: "varmap::translate", scope_level, slot, columns = columns.len(), "loaded columns");
    }

    /// Load the output columns of a derived table (subquery in FROM).
    ///
    /// `derived_columns` holds one resolved identifier per live entry of
    /// `target_list`, in order. Junk entries consume no identifier and get no
    /// mapping; live entries are keyed by their own target list position.
    ///
    /// # Panics
    ///
    /// If there are more identifiers than target entries, fewer identifiers
    /// than live entries, or a live entry has position 0.
    pub fn load_derived_table_columns<I, T>(
        &mut self,
        scope_level: u32,
        slot: u32,
        derived_columns: &[I],
        target_list: &[T],
    ) where
        I: ScalarIdent,
        T: TargetEntry,
    {
        assert!(
            target_list.len() >= derived_columns.len(),
            "derived table has {} columns for {} target entries",
            derived_columns.len(),
            target_list.len()
        );

        let mut idents = derived_columns.iter();
        for entry in target_list.iter().filter(|te| !te.is_junk()) {
            let ident = idents
                .next()
                .unwrap_or_else(|| panic!("no derived column left for target entry {}", entry.ordinal_position()));
            self.insert(scope_level, slot, live_position(entry), ident.column_id(), ident.name());
        }
        debug!(target: "varmap::translate", scope_level, slot, columns = derived_columns.len(), "loaded derived table columns");
    }

    /// Load the columns of a CTE reference.
    ///
    /// Same walk as [`load_derived_table_columns`](Self::load_derived_table_columns),
    /// but ids come from `cte_columns` and names from the target entries.
    ///
    /// # Panics
    ///
    /// If there are more CTE columns than target entries, fewer CTE columns
    /// than live entries, or a live entry has position 0.
    pub fn load_cte_columns<T: TargetEntry>(
        &mut self,
        scope_level: u32,
        slot: u32,
        cte_columns: &[u32],
        target_list: &[T],
    ) {
        assert!(
            target_list.len() >= cte_columns.len(),
            "CTE has {} columns for {} target entries",
            cte_columns.len(),
            target_list.len()
        );

        let mut ids = cte_columns.iter();
        for entry in target_list.iter().filter(|te| !te.is_junk()) {
            let &column_id = ids
                .next()
                .unwrap_or_else(|| panic!("no CTE column left for target entry {}", entry.ordinal_position()));
            self.insert(scope_level, slot, live_position(entry), column_id, entry.declared_name());
        }
        debug!(target: "varmap::translate", scope_level, slot, columns = cte_columns.len(), "loaded CTE columns");
    }

    /// Load a projection list built for a join or append; element `i` is
    /// attribute `i + 1`.
    pub fn load_project_elements(&mut self, scope_level: u32, slot: u32, project_list: &impl ProjectList) {
        let elements = project_list.elements();
        for (attno, elem) in (1..).zip(elements) {
            self.insert(scope_level, slot, attno, elem.column_id(), elem.alias_name());
        }
        debug!(target: "varmap::translate", scope_level, slot, columns = elements.len(), "loaded projection elements");
    }
}

fn live_position(entry: &impl TargetEntry) -> i32 {
    let resno = entry.ordinal_position();
    assert!(resno > 0, "live target entry without a position");
    i32::try_from(resno).unwrap_or_else(|_| panic!("target entry position {resno} out of range"))
}

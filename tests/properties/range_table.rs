//! Property tests for range table edits.

use proptest::prelude::*;

use tariff::{RangeField, RangeRow, RangeTable};

/// Contiguous tables: bounded rows of the given widths, then an open row.
fn contiguous_rows() -> impl Strategy<Value = Vec<RangeRow>> {
    proptest::collection::vec(0u64..50, 0..6).prop_map(|widths| {
        let mut rows = Vec::with_capacity(widths.len() + 1);
        let mut from = 0;
        for width in widths {
            rows.push(RangeRow::new(from, Some(from + width)));
            from += width + 1;
        }
        rows.push(RangeRow::new(from, None));
        rows
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: adding rows keeps the table contiguous and open-ended.
    #[test]
    fn property_add_range_keeps_table_valid(
        rows in contiguous_rows(),
        adds in 1usize..5
    ) {
        let mut rows = rows;
        for _ in 0..adds {
            let before = rows.len();
            rows = RangeTable::add_range(&rows);
            prop_assert_eq!(rows.len(), before + 1);
            prop_assert!(RangeTable::validate(&rows).is_empty(), "{:?}", rows);
        }
    }

    /// PROPERTY: raising or lowering an upper bound re-anchors every later row.
    #[test]
    fn property_to_value_update_cascades(
        rows in contiguous_rows().prop_filter("needs a bounded row", |r| r.len() > 1),
        pick in any::<prop::sample::Index>(),
        extra in 0u64..100
    ) {
        let index = pick.index(rows.len() - 1);
        let to_value = rows[index].from_value + extra;

        let next = RangeTable::handle_update(&rows, index, RangeField::ToValue, &to_value.to_string())
            .unwrap();

        prop_assert_eq!(next.len(), rows.len());
        prop_assert_eq!(next[index].to_value, Some(to_value));
        prop_assert!(next[..index] == rows[..index]);
        prop_assert!(RangeTable::validate(&next).is_empty(), "{:?}", next);
    }

    /// PROPERTY: deleting any deletable row leaves a valid table.
    #[test]
    fn property_delete_range_keeps_table_valid(
        rows in contiguous_rows().prop_filter("needs a deletable row", |r| r.len() > 1),
        pick in any::<prop::sample::Index>()
    ) {
        let index = 1 + pick.index(rows.len() - 1);

        let next = RangeTable::delete_range(&rows, index, false).unwrap();

        prop_assert_eq!(next.len(), rows.len() - 1);
        prop_assert_eq!(next[0].from_value, 0);
        prop_assert!(next.last().is_some_and(RangeRow::is_open_ended));
        prop_assert!(RangeTable::validate(&next).is_empty(), "{:?}", next);
    }

    /// PROPERTY: the first row and disabled tables are never deletable.
    #[test]
    fn property_protected_rows_are_never_deleted(
        rows in contiguous_rows(),
        pick in any::<prop::sample::Index>()
    ) {
        prop_assert!(RangeTable::delete_range(&rows, 0, false).is_err());
        let index = pick.index(rows.len());
        prop_assert!(RangeTable::delete_range(&rows, index, true).is_err());
    }

    /// PROPERTY: only the first row is flagged non-deletable in table data.
    #[test]
    fn property_table_datas_flag_first_row(rows in contiguous_rows()) {
        let table = RangeTable::table_datas(&rows, false);
        prop_assert_eq!(table.len(), rows.len());
        for (index, row) in table.iter().enumerate() {
            prop_assert_eq!(row.disabled_delete, index == 0);
        }
    }
}

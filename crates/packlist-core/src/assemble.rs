use crate::extraction::Table;
use crate::model::Order;
use crate::parsing::table::parse_table;
use crate::profile::schema::Profile;

/// Orders paired with their tables, plus every warning raised on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembled {
    pub orders: Vec<Order>,
    pub warnings: Vec<String>,
    /// 1-based numbers of tables with items that no order id reached.
    pub unassigned_tables: Vec<usize>,
}

/// Pair each order id with the next table that yields at least one item.
///
/// Single forward pass: a shared cursor walks the tables in document order
/// and never rewinds, so a table belongs to at most one order. Tables that
/// yield nothing are consumed by the id that was searching when they were
/// reached. An id that runs out of tables gets an empty order and a
/// warning. Documents are assumed to hold one order table per id; nothing
/// verifies that.
pub fn assemble_orders(order_ids: &[String], tables: &[Table], profile: &Profile) -> Assembled {
    let mut assembled = Assembled::default();
    let mut cursor = tables.iter().enumerate();

    for order_id in order_ids {
        let mut order = Order::empty(order_id.clone());

        for (index, table) in cursor.by_ref() {
            let parsed = parse_table(table, profile);
            assembled.warnings.extend(
                parsed
                    .warnings
                    .into_iter()
                    .map(|w| format!("{order_id}: table {}: {w}", index + 1)),
            );
            if !parsed.items.is_empty() {
                log::debug!(
                    "order {order_id}: {} item(s) from table {}",
                    parsed.items.len(),
                    index + 1
                );
                order.items = parsed.items;
                break;
            }
        }

        if order.items.is_empty() {
            assembled
                .warnings
                .push(format!("{order_id}: no item table found for this order"));
        }
        assembled.orders.push(order);
    }

    assembled.unassigned_tables = cursor
        .filter(|(_, t)| !parse_table(t, profile).items.is_empty())
        .map(|(index, _)| index + 1)
        .collect();
    if !assembled.unassigned_tables.is_empty() {
        log::warn!(
            "table(s) {:?} have items but come after the last order id; they were not assigned",
            assembled.unassigned_tables
        );
    }

    assembled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::builtin::default_profile;

    const HEADER: &[&str] = &["주문상품", "주문수량", "상품 바코드"];

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn order_table(rows: &[(&str, &str, &str)]) -> Table {
        let mut all = vec![HEADER.iter().map(|s| s.to_string()).collect::<Vec<_>>()];
        for (name, qty, barcode) in rows {
            all.push(vec![name.to_string(), qty.to_string(), barcode.to_string()]);
        }
        Table::new(all)
    }

    fn info_table() -> Table {
        Table::from_rows(&[&["거래처", "ABC"], &["출고일", "2024-01-01"]])
    }

    #[test]
    fn test_forward_pairing() {
        let t1 = order_table(&[("사과", "2", "880"), ("배", "1", "881")]);
        let t2 = order_table(&[("귤", "5", "882")]);
        let result = assemble_orders(&ids(&["A", "B"]), &[t1, t2], &default_profile().unwrap());

        assert_eq!(result.orders.len(), 2);
        assert_eq!(result.orders[0].order_id, "A");
        assert_eq!(result.orders[0].items.len(), 2);
        assert_eq!(result.orders[1].order_id, "B");
        assert_eq!(result.orders[1].items.len(), 1);
        assert_eq!(result.orders[1].items[0].name, "귤");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_unrecognized_tables_skipped() {
        let tables = vec![
            info_table(),
            order_table(&[("사과", "2", "880")]),
            info_table(),
            order_table(&[("배", "1", "881")]),
        ];
        let result = assemble_orders(&ids(&["A", "B"]), &tables, &default_profile().unwrap());
        assert_eq!(result.orders[0].items[0].name, "사과");
        assert_eq!(result.orders[1].items[0].name, "배");
    }

    #[test]
    fn test_unmatched_id_gets_empty_order_and_warning() {
        let tables = vec![order_table(&[("사과", "2", "880")])];
        let result = assemble_orders(&ids(&["A", "B"]), &tables, &default_profile().unwrap());

        assert_eq!(result.orders.len(), 2);
        assert_eq!(result.orders[0].items.len(), 1);
        assert!(result.orders[1].items.is_empty());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].starts_with("B:"));
    }

    #[test]
    fn test_table_never_reused() {
        let tables = vec![order_table(&[("사과", "2", "880")])];
        let result = assemble_orders(&ids(&["A", "A"]), &tables, &default_profile().unwrap());
        assert_eq!(result.orders[0].items.len(), 1);
        assert!(result.orders[1].items.is_empty());
    }

    #[test]
    fn test_table_without_valid_rows_is_consumed() {
        let tables = vec![
            order_table(&[("사과", "0", "880")]),
            order_table(&[("배", "1", "881")]),
        ];
        let result = assemble_orders(&ids(&["A", "B"]), &tables, &default_profile().unwrap());

        assert_eq!(result.orders[0].items[0].name, "배");
        assert!(result.orders[1].items.is_empty());
        // quantity warning from table 1, then B unmatched
        assert_eq!(result.warnings.len(), 2);
        assert!(result.warnings[0].starts_with("A: table 1:"));
        assert!(result.warnings[1].starts_with("B:"));
    }

    #[test]
    fn test_no_ids_no_orders() {
        let tables = vec![order_table(&[("사과", "2", "880")])];
        let result = assemble_orders(&[], &tables, &default_profile().unwrap());
        assert!(result.orders.is_empty());
        assert!(result.warnings.is_empty());
        assert_eq!(result.unassigned_tables, vec![1]);
    }

    #[test]
    fn test_tables_after_last_id_reported() {
        let tables = vec![
            order_table(&[("사과", "2", "880")]),
            info_table(),
            order_table(&[("배", "1", "881")]),
            order_table(&[("귤", "0", "882")]),
        ];
        let result = assemble_orders(&ids(&["A"]), &tables, &default_profile().unwrap());
        assert_eq!(result.orders[0].items[0].name, "사과");
        assert_eq!(result.unassigned_tables, vec![3]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_all_tables_assigned() {
        let t1 = order_table(&[("사과", "2", "880")]);
        let t2 = order_table(&[("배", "1", "881")]);
        let result = assemble_orders(&ids(&["A", "B"]), &[t1, t2], &default_profile().unwrap());
        assert!(result.unassigned_tables.is_empty());
    }
}

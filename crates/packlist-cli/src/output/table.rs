use std::io::{self, Write};

use packlist_core::extraction::Document;
use packlist_core::model::Conversion;

pub fn print(conversion: &Conversion) {
    println!("Date: {}\n", conversion.file.date.format("%Y-%m-%d"));

    for order in &conversion.file.orders {
        println!("=== {} ===\n", order.order_id);

        if order.items.is_empty() {
            println!("  (no items)\n");
            continue;
        }

        let max_barcode = order
            .items
            .iter()
            .map(|i| i.barcode.chars().count())
            .max()
            .unwrap_or(7)
            .max(7);

        println!("  {:<width$}  {:>5}  Name", "Barcode", "Qty", width = max_barcode);
        for item in &order.items {
            println!(
                "  {:<width$}  {:>5}  {}",
                item.barcode,
                item.qty,
                item.name,
                width = max_barcode
            );
        }
        println!(
            "\n  {} item(s), total quantity {}\n",
            order.items.len(),
            order.total_qty()
        );
    }

    print_warnings(&conversion.warnings);
}

pub fn print_warnings(warnings: &[String]) {
    // stderr closed: nothing left to report to
    let _ = write_warnings(&mut io::stderr().lock(), warnings);
}

pub fn write_warnings(err: &mut impl Write, warnings: &[String]) -> io::Result<()> {
    if warnings.is_empty() {
        return Ok(());
    }
    writeln!(err, "{} warning(s):", warnings.len())?;
    for w in warnings {
        writeln!(err, "  warning: {w}")?;
    }
    Ok(())
}

pub fn print_document(doc: &Document) {
    println!("Paragraphs ({}):", doc.paragraphs.len());
    for (i, p) in doc.paragraphs.iter().enumerate() {
        if p.text.trim().is_empty() {
            continue;
        }
        println!("  [{}] {}", i + 1, p.text.replace('\n', " / "));
    }
    println!();

    println!("Tables ({}):", doc.tables.len());
    for (i, table) in doc.tables.iter().enumerate() {
        println!("\n  --- Table {} ({} row(s)) ---", i + 1, table.rows.len());
        for (r, row) in table.rows.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|c| format!("\"{}\"", c.replace('\n', "\\n")))
                .collect();
            let marker = if r == 0 { "header" } else { "row" };
            println!("  {:>6} {:>3}: {}", marker, r + 1, cells.join(" | "));
        }
    }
}

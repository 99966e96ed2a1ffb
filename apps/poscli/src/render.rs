use pos_lib::{Category, Product, StockTransaction, Supplier, User};

/// Left-aligned plain text table, columns padded to their widest cell.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        format!("{}\n", padded.join("  ").trim_end())
    };

    let mut out = line(headers.to_vec());
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
    }
    if rows.is_empty() {
        out.push_str("(none)\n");
    }
    out
}

fn or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

pub fn users(users: &[User]) -> String {
    let rows: Vec<Vec<String>> = users
        .iter()
        .map(|u| {
            vec![
                u.id.to_string(),
                u.name.clone(),
                u.email.clone(),
                u.role.label().to_string(),
                or_dash(
                    u.created_by_name
                        .clone()
                        .or_else(|| u.created_by.map(|id| format!("#{id}"))),
                ),
            ]
        })
        .collect();
    table(&["ID", "NAME", "EMAIL", "ROLE", "OWNER"], &rows)
}

pub fn categories(categories: &[Category]) -> String {
    let rows: Vec<Vec<String>> = categories
        .iter()
        .map(|c| vec![c.id.to_string(), c.name.clone()])
        .collect();
    table(&["ID", "NAME"], &rows)
}

pub fn suppliers(suppliers: &[Supplier]) -> String {
    let rows: Vec<Vec<String>> = suppliers
        .iter()
        .map(|s| {
            vec![
                s.id.to_string(),
                s.name.clone(),
                s.contact.clone(),
                s.address.clone(),
                or_dash(s.created_at.map(|t| t.format("%Y-%m-%d").to_string())),
            ]
        })
        .collect();
    table(&["ID", "NAME", "CONTACT", "ADDRESS", "ADDED"], &rows)
}

pub fn products(products: &[Product]) -> String {
    let rows: Vec<Vec<String>> = products
        .iter()
        .map(|p| {
            vec![
                p.id.to_string(),
                p.name.clone(),
                or_dash(
                    p.category_name
                        .clone()
                        .or_else(|| p.category_id.map(|id| format!("#{id}"))),
                ),
                p.buy_price.to_string(),
                p.sell_price.to_string(),
                p.barcode.clone(),
                or_dash(p.stock.map(|s| s.to_string())),
            ]
        })
        .collect();
    table(
        &["ID", "NAME", "CATEGORY", "BUY", "SELL", "BARCODE", "STOCK"],
        &rows,
    )
}

pub fn stock_levels(products: &[Product]) -> String {
    let rows: Vec<Vec<String>> = products
        .iter()
        .map(|p| {
            vec![
                p.id.to_string(),
                p.name.clone(),
                p.stock.unwrap_or(0).to_string(),
            ]
        })
        .collect();
    table(&["ID", "PRODUCT", "STOCK"], &rows)
}

pub fn stock_history(transactions: &[StockTransaction]) -> String {
    let rows: Vec<Vec<String>> = transactions
        .iter()
        .map(|t| {
            vec![
                t.id.to_string(),
                t.product_name
                    .clone()
                    .unwrap_or_else(|| format!("#{}", t.product_id)),
                t.direction.to_string(),
                t.quantity.to_string(),
                or_dash(t.created_at.map(|at| at.format("%Y-%m-%d %H:%M").to_string())),
            ]
        })
        .collect();
    table(&["ID", "PRODUCT", "TYPE", "QTY", "AT"], &rows)
}

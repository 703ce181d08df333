use serde::Serialize;
use terminal_size::{terminal_size, Height, Width};

// Render typed rows as an ASCII table on stdout.
// Returns true if a table was printed, false if the JSON override was taken
// or there was nothing to show.
pub fn print_table<R: Serialize>(columns: &[&str], rows: &[R], cells: impl Fn(&R) -> Vec<String>) -> bool {
    // Honor env override to force JSON output
    if std::env::var("OPTIQUEUE_OUTPUT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
    {
        match serde_json::to_string_pretty(rows) {
            Ok(s) => println!("{}", s),
            Err(e) => println!("{{\"error\": \"{}\"}}", e),
        }
        return false;
    }

    if rows.is_empty() {
        println!("(no rows)");
        return false;
    }

    let grid: Vec<Vec<String>> = rows.iter().map(&cells).collect();

    let termw = get_terminal_width();
    crate::tprintln!("[cli.tablefmt] detected terminal width={} columns", termw);

    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count().min(termw)).collect();
    for r in &grid {
        for (i, cell) in r.iter().enumerate().take(columns.len()) {
            let w = cell.chars().count();
            if w > widths[i] {
                widths[i] = w.min(termw);
            }
        }
    }

    let sep = build_separator(&widths);
    println!("{}", sep);
    println!("{}", build_header(columns, &widths));
    println!("{}", sep);
    for r in &grid {
        println!("{}", build_row(r, &widths));
    }
    println!("{}", sep);
    println!("rows: {}", grid.len());

    true
}

fn build_separator(widths: &[usize]) -> String {
    let mut s = String::new();
    s.push('+');
    for w in widths {
        s.push_str(&"-".repeat(*w + 2));
        s.push('+');
    }
    s
}

fn build_row(cells: &[String], widths: &[usize]) -> String {
    let mut s = String::new();
    s.push('|');
    for (i, w) in widths.iter().enumerate() {
        let cell = cells.get(i).cloned().unwrap_or_default();
        let text = truncate(&cell, *w);
        let align_right = is_numeric_like(&cell);
        s.push(' ');
        if align_right {
            let pad = w.saturating_sub(text.chars().count());
            s.push_str(&" ".repeat(pad));
            s.push_str(&text);
        } else {
            s.push_str(&text);
            let pad = w.saturating_sub(text.chars().count());
            s.push_str(&" ".repeat(pad));
        }
        s.push(' ');
        s.push('|');
    }
    s
}

// Header row with column names colored green; padding uses the visible width.
fn build_header(cells: &[&str], widths: &[usize]) -> String {
    let mut s = String::new();
    s.push('|');
    for (i, w) in widths.iter().enumerate() {
        let cell = cells.get(i).copied().unwrap_or_default();
        let text = truncate(cell, *w);
        s.push(' ');
        s.push_str(&format!("\x1b[32m{}\x1b[0m", text));
        let pad = w.saturating_sub(text.chars().count());
        s.push_str(&" ".repeat(pad));
        s.push(' ');
        s.push('|');
    }
    s
}

fn truncate(s: &str, max: usize) -> String {
    let len = s.chars().count();
    if len <= max {
        return s.to_string();
    }
    if max <= 1 {
        return "…".to_string();
    }
    let take = max - 1;
    s.chars().take(take).collect::<String>() + "…"
}

fn is_numeric_like(s: &str) -> bool {
    // crude detection for aligning numbers to right
    let st = s.trim();
    if st.is_empty() {
        return false;
    }
    let mut has_digit = false;
    for ch in st.chars() {
        if ch.is_ascii_digit() {
            has_digit = true;
            continue;
        }
        if ".-+eE,_".contains(ch) {
            continue;
        }
        return false;
    }
    has_digit
}

fn get_terminal_width() -> usize {
    if let Some((Width(w), Height(_h))) = terminal_size() {
        return (w.saturating_sub(4)) as usize;
    }
    80
}

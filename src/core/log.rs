use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

/// Color for an operation in the log print-out
fn color_for_operation(op: &str) -> Colour {
    match op {
        "init" => Colour::RGB(255, 153, 51), // orange
        "add_activity" => Colour::Green,
        "start" => Colour::Cyan,
        "stop" => Colour::Yellow,
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");
        for line in Self::render(&entries) {
            println!("{}", line);
        }

        Ok(())
    }

    fn render(entries: &[LogEntry]) -> Vec<String> {
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);
        let op_w = entries
            .iter()
            .map(|e| e.operation.len())
            .max()
            .unwrap_or(0);

        entries
            .iter()
            .map(|e| {
                // pad before painting so escape codes don't skew widths
                let op = format!("{:<op_w$}", e.operation, op_w = op_w);
                let target = if e.target.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", e.target)
                };
                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    e.id,
                    e.date,
                    color_for_operation(&e.operation).paint(op),
                    target,
                    e.message,
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_lines_carry_target_and_message() {
        let entries = vec![LogEntry {
            id: 7,
            date: "2024-01-01T10:00:00+01:00".into(),
            operation: "start".into(),
            target: "writing".into(),
            message: "Interval #3 started".into(),
        }];
        let lines = LogLogic::render(&entries);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("7: 2024-01-01T10:00:00+01:00 | "));
        assert!(lines[0].contains("(writing) => Interval #3 started"));
    }
}

use chrono::NaiveDate;
use chrono_humanize::HumanTime;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use sked_core::date::parse_date;
use sked_core::models::Task;

pub fn display_tasks(tasks: &[Task], today: NaiveDate) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Date", "Due", "Repeat", "Comment"]);

    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(task.id));

        let mut title = String::new();
        if task.is_recurring() {
            title.push('↻');
            title.push(' ');
        }
        title.push_str(&task.title);
        row.add_cell(Cell::new(title));

        row.add_cell(Cell::new(&task.date));
        row.add_cell(due_cell(&task.date, today));
        row.add_cell(Cell::new(if task.is_recurring() {
            task.repeat.as_str()
        } else {
            "-"
        }));
        row.add_cell(Cell::new(&task.comment).fg(Color::DarkGrey));
        table.add_row(row);
    }

    println!("{table}");
}

pub fn display_task(task: &Task, today: NaiveDate) {
    let mut table = Table::new();
    table.add_row(vec![Cell::new("ID").add_attribute(Attribute::Bold), Cell::new(task.id)]);
    table.add_row(vec![
        Cell::new("Title").add_attribute(Attribute::Bold),
        Cell::new(&task.title),
    ]);
    table.add_row(vec![
        Cell::new("Date").add_attribute(Attribute::Bold),
        Cell::new(&task.date),
    ]);
    table.add_row(vec![
        Cell::new("Due").add_attribute(Attribute::Bold),
        due_cell(&task.date, today),
    ]);
    table.add_row(vec![
        Cell::new("Repeat").add_attribute(Attribute::Bold),
        Cell::new(if task.is_recurring() {
            task.repeat.as_str()
        } else {
            "None"
        }),
    ]);
    table.add_row(vec![
        Cell::new("Comment").add_attribute(Attribute::Bold),
        Cell::new(&task.comment),
    ]);

    println!("{table}");
}

fn due_cell(date: &str, today: NaiveDate) -> Cell {
    match parse_date(date) {
        Ok(due) if due < today => Cell::new(relative_due(due, today)).fg(Color::Red),
        Ok(due) if due == today => Cell::new(relative_due(due, today))
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold),
        Ok(due) => Cell::new(relative_due(due, today)),
        Err(_) => Cell::new("?"),
    }
}

fn relative_due(due: NaiveDate, today: NaiveDate) -> String {
    if due == today {
        return "today".to_string();
    }
    HumanTime::from(due - today).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_relative_due() {
        let today = ymd(2024, 3, 1);
        assert_eq!(relative_due(today, today), "today");

        let future = relative_due(ymd(2024, 3, 4), today);
        assert!(future.contains("3 days"), "{}", future);
        assert!(future.starts_with("in"), "{}", future);

        let past = relative_due(ymd(2024, 2, 27), today);
        assert!(past.contains("ago"), "{}", past);
    }
}

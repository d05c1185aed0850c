//! Calendar view commands.

use chrono::{Datelike, NaiveDate};
use clap::Subcommand;
use tomate_core::{calendar, Clock, CalendarCell, SnapshotStore, SystemClock};

#[derive(Subcommand)]
pub enum CalAction {
    /// Render the month grid
    Show {
        /// Month as YYYY-MM (default: current month)
        #[arg(long)]
        month: Option<String>,
        /// Highlight a selected date
        #[arg(long)]
        selected: Option<NaiveDate>,
    },
}

pub fn run(action: CalAction) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = SnapshotStore::open()?.load();
    let today = SystemClock.today();

    match action {
        CalAction::Show { month, selected } => {
            let month = match month {
                Some(m) => parse_month(&m)?,
                None => calendar::month_start(today),
            };
            let cells = calendar::render_month(month, today, selected, |d| {
                snapshot.tasks.has_task_on(d)
            });
            print_grid(month, &cells);
        }
    }
    Ok(())
}

fn parse_month(s: &str) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    Ok(NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")?)
}

fn print_grid(month: NaiveDate, cells: &[CalendarCell]) {
    println!("{:^35}", month.format("%B %Y"));
    println!("  Su   Mo   Tu   We   Th   Fr   Sa");
    for week in cells.chunks(7) {
        let row: Vec<String> = week.iter().map(format_cell).collect();
        println!("{}", row.join(" "));
    }
    println!("\n[d]=today (d)=selected *=has task .=other month");
}

fn format_cell(cell: &CalendarCell) -> String {
    let day = cell.date.day();
    let marker = if cell.has_task { '*' } else { ' ' };
    let body = if cell.is_today {
        format!("[{day:>2}]")
    } else if cell.is_selected {
        format!("({day:>2})")
    } else if cell.in_current_month {
        format!(" {day:>2} ")
    } else {
        format!(" {day:>2}.")
    };
    format!("{body}{marker}")
}

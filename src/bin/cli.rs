use std::fs;
use std::io::{self, Write};

use timetable_tool::{
    ClassSession, GridConfig, Timetable, load_timetable_from_csv, load_timetable_from_json,
    save_timetable_to_csv, save_timetable_to_json, week,
};

const CELL_WIDTH: usize = 22;

fn render_class_table(classes: &[&ClassSession]) -> String {
    let headers = [
        "id",
        "name",
        "subject",
        "day",
        "time_slot",
        "teacher_name",
        "max_students",
    ];
    let rows: Vec<Vec<String>> = classes
        .iter()
        .map(|class| {
            vec![
                class.id.to_string(),
                class.name.clone(),
                class.subject.clone(),
                week::day_name(class.day_of_week).to_string(),
                class.time_slot.clone(),
                class.teacher_name.clone(),
                class.max_students.to_string(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (ci, cell) in row.iter().enumerate() {
            if cell.len() > widths[ci] {
                widths[ci] = cell.len();
            }
        }
    }

    let mut sep = String::new();
    sep.push('+');
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');

    out.push('|');
    for (i, name) in headers.iter().enumerate() {
        out.push(' ');
        out.push_str(name);
        let pad = widths[i] - name.len();
        if pad > 0 {
            out.push_str(&" ".repeat(pad));
        }
        out.push(' ');
        out.push('|');
    }
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');

    for row in &rows {
        out.push('|');
        for (ci, cell) in row.iter().enumerate() {
            out.push(' ');
            out.push_str(cell);
            let pad = widths[ci].saturating_sub(cell.len());
            if pad > 0 {
                out.push_str(&" ".repeat(pad));
            }
            out.push(' ');
            out.push('|');
        }
        out.push('\n');
    }

    out.push_str(&sep);
    out.push('\n');
    out
}

fn pad_cell(text: &str, width: usize) -> String {
    let text: String = text.chars().take(width).collect();
    let pad = width.saturating_sub(text.chars().count());
    format!(" {}{} ", text, " ".repeat(pad))
}

/// Render the weekly grid as text. A class block is printed only in its start
/// row; the rows it spans below stay blank and the block text carries the
/// span instead.
fn render_week_grid(timetable: &Timetable, day_filter: Option<u8>) -> String {
    let grid = timetable.grid();
    let layout = timetable.week_layout();
    let days: Vec<u8> = week::ALL_DAYS
        .iter()
        .copied()
        .filter(|day| day_filter.is_none_or(|wanted| wanted == *day))
        .collect();

    let label_width = grid
        .rows()
        .iter()
        .map(|row| row.label().len())
        .max()
        .unwrap_or(0)
        .max("time".len());

    let mut sep = String::new();
    sep.push('+');
    sep.push_str(&"-".repeat(label_width + 2));
    sep.push('+');
    for _ in &days {
        sep.push_str(&"-".repeat(CELL_WIDTH + 2));
        sep.push('+');
    }

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');

    out.push('|');
    out.push_str(&pad_cell("time", label_width));
    out.push('|');
    for day in &days {
        out.push_str(&pad_cell(week::day_name(*day), CELL_WIDTH));
        out.push('|');
    }
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');

    for row in grid.rows() {
        out.push('|');
        out.push_str(&pad_cell(&row.label(), label_width));
        out.push('|');
        for day in &days {
            let mut parts = Vec::new();
            for block in layout.blocks_at(*day, row.index) {
                if let Some(class) = timetable.find_class(block.class_id) {
                    if block.position.span_slots > 1 {
                        parts.push(format!(
                            "{} [{} rows]",
                            class.name, block.position.span_slots
                        ));
                    } else {
                        parts.push(class.name.clone());
                    }
                }
            }
            out.push_str(&pad_cell(&parts.join(" / "), CELL_WIDTH));
            out.push('|');
        }
        out.push('\n');
    }

    out.push_str(&sep);
    out.push('\n');
    out
}

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  show                               Show the class list\n  list <day|all>                     List classes for one day (1=Mon..7=Sun)\n  schedule [day]                     Render the weekly grid (optionally one day)\n  add <id> <name> <subject> <day> <HH:mm-HH:mm> <teacher> <max_students>\n                                     Upsert a class\n  delete <id>                        Delete a class\n  summary                            Show the layout summary line\n  meta show                          Show center metadata\n  meta name <text...>                Update center name\n  meta desc <text...>                Update center description\n  grid show                          Display grid configuration\n  grid set <start_hour> <end_hour>   Set grid hour bounds (inclusive)\n  grid default                       Reset grid to 06:00-23:00 rows\n  grid save <json_path>              Save grid config to JSON file\n  grid load <json_path>              Load grid config from JSON file\n  save <json|csv> <path>             Export the timetable to disk\n  load <json|csv> <path>             Import a timetable from disk\n  quit|exit                          Exit"
    );
}

fn print_metadata(timetable: &Timetable) {
    let metadata = timetable.metadata();
    println!("Center name        : {}", metadata.center_name);
    println!("Center description : {}", metadata.description);
}

fn print_grid_info(timetable: &Timetable) {
    let config = timetable.grid_config();
    let grid = timetable.grid();
    println!("Grid custom        : {}", timetable.grid_is_custom());
    println!("Start hour         : {}", config.start_hour);
    println!("End hour           : {}", config.end_hour);
    println!("Rows               : {}", grid.len());
}

fn parse_day(input: &str) -> Option<u8> {
    input
        .parse::<u8>()
        .ok()
        .filter(|day| week::is_valid_day(*day))
}

fn main() {
    let mut timetable = Timetable::new();

    println!("Timetable Tool (CLI) - type 'help' for commands\n");
    println!(
        "{}",
        render_class_table(&timetable.classes().iter().collect::<Vec<_>>())
    );

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        if stdin.read_line(&mut line).is_err() {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => {
                print_help();
            }
            "quit" | "exit" => break,
            "show" => {
                println!(
                    "{}",
                    render_class_table(&timetable.classes().iter().collect::<Vec<_>>())
                );
            }
            "list" => match parts.next() {
                Some("all") => {
                    println!(
                        "{}",
                        render_class_table(&timetable.classes().iter().collect::<Vec<_>>())
                    );
                }
                Some(day_s) => match day_s.parse::<u8>() {
                    Ok(day) => match timetable.classes_by_day(Some(day)) {
                        Ok(classes) => println!("{}", render_class_table(&classes)),
                        Err(e) => println!("Error: {}", e),
                    },
                    Err(_) => println!("Invalid day (1-7)"),
                },
                None => println!("Usage: list <day|all>"),
            },
            "schedule" => match parts.next() {
                Some(day_s) => match parse_day(day_s) {
                    Some(day) => println!("{}", render_week_grid(&timetable, Some(day))),
                    None => println!("Invalid day (1-7)"),
                },
                None => println!("{}", render_week_grid(&timetable, None)),
            },
            "add" => {
                let id_s = parts.next();
                let name = parts.next();
                let subject = parts.next();
                let day_s = parts.next();
                let slot = parts.next();
                let teacher = parts.next();
                let max_s = parts.next();
                match (id_s, name, subject, day_s, slot, teacher, max_s) {
                    (
                        Some(id_s),
                        Some(name),
                        Some(subject),
                        Some(day_s),
                        Some(slot),
                        Some(teacher),
                        Some(max_s),
                    ) => {
                        let id: i64 = match id_s.parse() {
                            Ok(v) => v,
                            Err(_) => {
                                println!("Invalid id");
                                continue;
                            }
                        };
                        let day: u8 = match day_s.parse() {
                            Ok(v) => v,
                            Err(_) => {
                                println!("Invalid day (1-7)");
                                continue;
                            }
                        };
                        let max_students: u32 = match max_s.parse() {
                            Ok(v) => v,
                            Err(_) => {
                                println!("Invalid max_students");
                                continue;
                            }
                        };
                        let class =
                            ClassSession::new(id, name, subject, day, slot, teacher, max_students);
                        match timetable.upsert_class(class) {
                            Ok(_) => {
                                println!("Class upserted.");
                                println!(
                                    "{}",
                                    render_class_table(
                                        &timetable.classes().iter().collect::<Vec<_>>()
                                    )
                                );
                            }
                            Err(e) => println!("Error: {}", e),
                        }
                    }
                    _ => {
                        println!(
                            "Usage: add <id> <name> <subject> <day> <HH:mm-HH:mm> <teacher> <max_students>"
                        );
                    }
                }
            }
            "delete" => match parts.next() {
                Some(id_s) => match id_s.parse::<i64>() {
                    Ok(id) => {
                        if timetable.delete_class(id) {
                            println!("Deleted class {id}.");
                            println!(
                                "{}",
                                render_class_table(
                                    &timetable.classes().iter().collect::<Vec<_>>()
                                )
                            );
                        } else {
                            println!("Class {id} not found.");
                        }
                    }
                    Err(_) => println!("Invalid id"),
                },
                None => println!("Usage: delete <id>"),
            },
            "summary" => {
                println!("{}", timetable.week_layout().summary().to_cli_summary());
            }
            "meta" => match parts.next() {
                Some("show") | None => print_metadata(&timetable),
                Some("name") => {
                    let rest: Vec<&str> = parts.collect();
                    if rest.is_empty() {
                        println!("Usage: meta name <text...>");
                        continue;
                    }
                    timetable.set_center_name(rest.join(" "));
                    println!("Center name updated.");
                    print_metadata(&timetable);
                }
                Some("desc") => {
                    let rest: Vec<&str> = parts.collect();
                    if rest.is_empty() {
                        println!("Usage: meta desc <text...>");
                        continue;
                    }
                    timetable.set_description(rest.join(" "));
                    println!("Center description updated.");
                    print_metadata(&timetable);
                }
                Some(other) => {
                    println!("Unknown meta command '{}'.", other);
                    println!("Usage: meta show|name|desc ...");
                }
            },
            "grid" => match parts.next() {
                Some("show") | None => print_grid_info(&timetable),
                Some("default") => {
                    timetable.reset_grid_to_default();
                    println!("Grid reset to default.");
                    print_grid_info(&timetable);
                }
                Some("set") => {
                    let start_s = parts.next();
                    let end_s = parts.next();
                    match (start_s, end_s) {
                        (Some(start_s), Some(end_s)) => {
                            match (start_s.parse::<u8>(), end_s.parse::<u8>()) {
                                (Ok(start_hour), Ok(end_hour)) => {
                                    timetable.set_grid_config(GridConfig {
                                        start_hour,
                                        end_hour,
                                    });
                                    println!("Grid updated.");
                                    print_grid_info(&timetable);
                                }
                                _ => println!("Invalid hours (0-23)"),
                            }
                        }
                        _ => println!("Usage: grid set <start_hour> <end_hour>"),
                    }
                }
                Some("save") => match parts.next() {
                    Some(path) => {
                        let config = timetable.grid_config();
                        match serde_json::to_string_pretty(&config) {
                            Ok(json) => match fs::write(path, json) {
                                Ok(_) => println!("Grid config saved to {}.", path),
                                Err(e) => println!("Error writing {}: {}", path, e),
                            },
                            Err(e) => println!("Error serializing grid config: {}", e),
                        }
                    }
                    None => println!("Usage: grid save <json_path>"),
                },
                Some("load") => match parts.next() {
                    Some(path) => match fs::read_to_string(path) {
                        Ok(contents) => match serde_json::from_str::<GridConfig>(&contents) {
                            Ok(config) => {
                                timetable.set_grid_config(config);
                                println!("Grid config loaded from {}.", path);
                                print_grid_info(&timetable);
                            }
                            Err(e) => println!("Invalid grid config JSON: {}", e),
                        },
                        Err(e) => println!("Error reading {}: {}", path, e),
                    },
                    None => println!("Usage: grid load <json_path>"),
                },
                Some(other) => {
                    println!("Unknown grid command '{}'.", other);
                    println!("Usage: grid show|set <start> <end>|default|save <path>|load <path>");
                }
            },
            "save" => {
                let fmt = parts.next();
                let path = parts.next();
                match (fmt, path) {
                    (Some("json"), Some(path)) => match save_timetable_to_json(&timetable, path) {
                        Ok(_) => println!("Timetable saved to {}.", path),
                        Err(e) => println!("Error saving timetable: {}", e),
                    },
                    (Some("csv"), Some(path)) => match save_timetable_to_csv(&timetable, path) {
                        Ok(_) => println!("Timetable saved to {}.", path),
                        Err(e) => println!("Error saving timetable: {}", e),
                    },
                    _ => println!("Usage: save <json|csv> <path>"),
                }
            }
            "load" => {
                let fmt = parts.next();
                let path = parts.next();
                match (fmt, path) {
                    (Some("json"), Some(path)) => match load_timetable_from_json(path) {
                        Ok(loaded) => {
                            timetable = loaded;
                            println!("Timetable loaded from {}.", path);
                            println!(
                                "{}",
                                render_class_table(
                                    &timetable.classes().iter().collect::<Vec<_>>()
                                )
                            );
                        }
                        Err(e) => println!("Error loading timetable: {}", e),
                    },
                    (Some("csv"), Some(path)) => match load_timetable_from_csv(path) {
                        Ok(loaded) => {
                            timetable = loaded;
                            println!("Timetable loaded from {}.", path);
                            println!(
                                "{}",
                                render_class_table(
                                    &timetable.classes().iter().collect::<Vec<_>>()
                                )
                            );
                        }
                        Err(e) => println!("Error loading timetable: {}", e),
                    },
                    _ => println!("Usage: load <json|csv> <path>"),
                }
            }
            _ => {
                println!("Unknown command. Type 'help'.");
            }
        }
    }
}

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use roster_model::{GridField, Roster, Shift};

/// Human-readable roster: header block, occupied rooms, footer lists.
pub fn render_summary(roster: &Roster) -> String {
    let mut out = String::new();
    out.push_str(&format!("Date: {}\n", roster.date));
    for shift in Shift::ALL {
        out.push_str(&format!(
            "Charge nurse ({shift}): {}\n",
            or_dash(roster.charge_nurses.get(shift))
        ));
    }
    for shift in Shift::ALL {
        out.push_str(&format!(
            "PCTs ({shift}): {}\n",
            or_dash(&roster.pcts(shift).replace('\n', ", "))
        ));
    }

    let mut table = Table::new();
    table.set_header(GridField::ALL.iter().map(|field| header_cell(field.label())));
    apply_summary_table_style(&mut table);
    let mut occupied = 0usize;
    for row in roster.occupied() {
        occupied += 1;
        table.add_row(GridField::ALL.iter().map(|field| match field {
            GridField::Room => Cell::new(row.get(*field))
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            _ => value_cell(row.get(*field)),
        }));
    }
    out.push_str(&format!("{table}\n"));
    out.push_str(&format!(
        "Occupied: {occupied} of {} rooms\n",
        roster.assignments.len()
    ));

    for shift in Shift::ALL {
        out.push_str(&format!(
            "Float ({shift}): {}\n",
            or_dash(&roster.floats.get(shift).join(", "))
        ));
    }
    out.push_str(&format!(
        "Respiratory: {}\n",
        or_dash(&roster.respiratory.join(", "))
    ));
    out
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

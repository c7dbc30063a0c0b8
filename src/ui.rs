use crate::models::{TableResponse, WeekRowView};

pub fn render_index(view: &TableResponse) -> String {
    let header: String = view
        .weekdays
        .iter()
        .map(|day| format!("<th>{day}</th>"))
        .collect();
    let rows: String = view.weeks.iter().map(render_row).collect();

    INDEX_HTML
        .replace("{{START_DATE}}", &view.start_date)
        .replace("{{NUM_WEEKS}}", &view.num_weeks.to_string())
        .replace("{{HEADER}}", &header)
        .replace("{{ROWS}}", &rows)
}

fn render_row(row: &WeekRowView) -> String {
    let cells: String = row
        .checked
        .iter()
        .enumerate()
        .map(|(day, checked)| render_cell(row.index, day, *checked))
        .collect();

    let top8 = match row.top8_of_12 {
        Some(total) => format!("<td class=\"top8\">Top 8 of past 12 weeks: {total}</td>"),
        None => "<td class=\"top8 muted\">Not enough data</td>".to_string(),
    };

    format!(
        "<tr><td class=\"week\">{label}</td>{cells}\
         <td><form method=\"post\" action=\"/midweek/{week}\">\
         <button class=\"bulk\" type=\"submit\">Check Tue/Wed/Thu</button></form></td>\
         {top8}</tr>\n",
        label = row.label,
        week = row.index,
    )
}

fn render_cell(week: usize, day: usize, checked: bool) -> String {
    let (class, mark) = if checked { ("cell on", "&#10003;") } else { ("cell", "") };
    format!(
        "<td><form method=\"post\" action=\"/toggle/{week}/{day}\">\
         <button class=\"{class}\" type=\"submit\" aria-pressed=\"{checked}\">{mark}</button>\
         </form></td>"
    )
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Week Table</title>
  <style>
    :root {
      --bg: #f8f3e6;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
    }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 32px 18px;
    }

    .app {
      max-width: 1100px;
      margin: 0 auto;
      background: var(--card);
      border-radius: 20px;
      padding: 28px;
    }

    .settings {
      display: flex;
      flex-wrap: wrap;
      gap: 16px;
      align-items: center;
      margin-bottom: 20px;
    }

    table {
      border-collapse: collapse;
      width: 100%;
    }

    th, td {
      padding: 6px 8px;
      text-align: center;
      border-bottom: 1px solid rgba(47, 72, 88, 0.1);
    }

    td.week {
      text-align: left;
      font-variant-numeric: tabular-nums;
    }

    form {
      margin: 0;
    }

    button {
      cursor: pointer;
      border-radius: 8px;
      border: 1px solid rgba(47, 72, 88, 0.3);
      background: white;
    }

    .cell {
      width: 28px;
      height: 28px;
    }

    .cell.on {
      background: var(--accent);
      color: white;
    }

    .bulk {
      padding: 6px 10px;
      color: var(--accent-2);
    }

    .muted {
      color: #888;
    }
  </style>
</head>
<body>
  <main class="app">
    <h1>Week Table</h1>
    <form class="settings" method="post" action="/settings">
      <label>Start date of first week:
        <input type="date" name="start_date" value="{{START_DATE}}" />
      </label>
      <label>Number of weeks:
        <input type="number" name="num_weeks" min="1" value="{{NUM_WEEKS}}" />
      </label>
      <button type="submit">Apply</button>
    </form>
    <table>
      <thead>
        <tr><th>Week</th>{{HEADER}}<th></th><th></th></tr>
      </thead>
      <tbody>
{{ROWS}}      </tbody>
    </table>
  </main>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::build_table_view;
    use crate::table::WeekTable;

    #[test]
    fn renders_every_week_with_placeholders() {
        let mut table = WeekTable::new(12, "2026-01-05");
        table.toggle(0, 0);
        let html = render_index(&build_table_view(&table));

        assert_eq!(html.matches("<tr><td class=\"week\">").count(), 12);
        assert_eq!(html.matches("Not enough data").count(), 11);
        assert!(html.contains("Top 8 of past 12 weeks: 1"));
        assert!(html.contains("action=\"/toggle/11/4\""));
        assert!(html.contains("value=\"2026-01-05\""));
        assert!(html.contains("<th>Friday</th>"));
    }

    #[test]
    fn unset_start_date_shows_week_numbers() {
        let table = WeekTable::new(3, "");
        let html = render_index(&build_table_view(&table));
        assert!(html.contains(">Week 3</td>"));
        assert!(html.contains("value=\"\""));
    }
}

//! Declarative table rendering: column specs in, template-ready rows out.

use serde::Serialize;
use serde_json::Value;

/// Where a column's cell text comes from.
pub enum ColumnSource<T> {
    /// A serialized field, named as it appears on the wire (camelCase).
    /// Absent and null fields render as empty cells.
    Field(&'static str),
    /// A display string computed from the whole record.
    Computed(fn(&T) -> String),
}

/// One column of a resource table.
pub struct ColumnSpec<T> {
    pub label: &'static str,
    pub source: ColumnSource<T>,
}

/// One action link rendered at the end of every row: label, icon name and
/// the target the row navigates to.
pub struct RowAction<T> {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: fn(&T) -> String,
}

/// Everything the shared list template needs for one table.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<RowView>,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct RowView {
    pub cells: Vec<String>,
    pub actions: Vec<ActionView>,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ActionView {
    pub label: String,
    pub icon: String,
    pub href: String,
}

/// Renders `items` against the column spec, one row per item in input order.
pub fn render_table<T: Serialize>(
    items: &[T],
    columns: &[ColumnSpec<T>],
    actions: &[RowAction<T>],
) -> TableView {
    let headers = columns.iter().map(|c| c.label.to_string()).collect();

    let rows = items
        .iter()
        .map(|item| {
            let record = serde_json::to_value(item).unwrap_or(Value::Null);
            let cells = columns
                .iter()
                .map(|column| match &column.source {
                    ColumnSource::Field(name) => display_value(record.get(*name)),
                    ColumnSource::Computed(render) => render(item),
                })
                .collect();
            let actions = actions
                .iter()
                .map(|action| ActionView {
                    label: action.label.to_string(),
                    icon: action.icon.to_string(),
                    href: (action.href)(item),
                })
                .collect();
            RowView { cells, actions }
        })
        .collect();

    TableView { headers, rows }
}

fn display_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Row {
        row_id: i32,
        name: String,
        amount: Option<f64>,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                row_id: 1,
                name: "First".into(),
                amount: Some(12.5),
            },
            Row {
                row_id: 2,
                name: "Second".into(),
                amount: None,
            },
        ]
    }

    fn columns() -> Vec<ColumnSpec<Row>> {
        vec![
            ColumnSpec {
                label: "ID",
                source: ColumnSource::Field("rowId"),
            },
            ColumnSpec {
                label: "Nombre",
                source: ColumnSource::Field("name"),
            },
            ColumnSpec {
                label: "Monto",
                source: ColumnSource::Computed(|row| {
                    row.amount.map(|a| format!("${a}")).unwrap_or_default()
                }),
            },
        ]
    }

    #[test]
    fn renders_one_row_per_item_in_input_order() {
        let table = render_table(&rows(), &columns(), &[]);
        assert_eq!(table.headers, vec!["ID", "Nombre", "Monto"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].cells, vec!["1", "First", "$12.5"]);
        assert_eq!(table.rows[1].cells, vec!["2", "Second", ""]);
    }

    #[test]
    fn missing_and_null_fields_render_empty() {
        let specs = vec![
            ColumnSpec {
                label: "Monto",
                source: ColumnSource::Field("amount"),
            },
            ColumnSpec {
                label: "Otro",
                source: ColumnSource::Field("doesNotExist"),
            },
        ];
        let table = render_table(&rows(), &specs, &[]);
        assert_eq!(table.rows[1].cells, vec!["", ""]);
    }

    #[test]
    fn actions_render_in_declared_order_with_row_targets() {
        let actions = vec![
            RowAction {
                label: "Editar",
                icon: "edit",
                href: |row: &Row| format!("/rows/edit/{}", row.row_id),
            },
            RowAction {
                label: "Eliminar",
                icon: "trash",
                href: |row: &Row| format!("/rows/delete/{}", row.row_id),
            },
        ];
        let table = render_table(&rows(), &columns(), &actions);
        let row = &table.rows[0];
        assert_eq!(row.actions.len(), 2);
        assert_eq!(row.actions[0].label, "Editar");
        assert_eq!(row.actions[0].href, "/rows/edit/1");
        assert_eq!(row.actions[1].icon, "trash");
        assert_eq!(row.actions[1].href, "/rows/delete/1");
    }
}

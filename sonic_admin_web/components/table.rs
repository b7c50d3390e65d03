use dioxus::prelude::*;

/// Renders one cell from the column's raw value and the whole row.
pub type CellRenderer<T> = Box<dyn Fn(Option<String>, &T) -> Element>;
/// Builds the navigation target of a clickable row.
pub type RowUrl<T> = Box<dyn Fn(&T) -> String>;

const DEFAULT_TABLE_ID: &str = "data-table";
const DEFAULT_EMPTY_MESSAGE: &str = "No data available";
/// Row click navigation; the target is read from the row's `data-href`.
const ROW_CLICK_HANDLER: &str = "window.location.href = this.dataset.href";

/// Accessor used by columns without a custom renderer.
pub trait TableRow {
    fn cell_value(&self, key: &str) -> Option<String>;

    /// Identifier used for row selection checkboxes.
    fn row_id(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortType {
    #[default]
    String,
    Number,
    Date,
    Boolean,
}

impl SortType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortType::String => "string",
            SortType::Number => "number",
            SortType::Date => "date",
            SortType::Boolean => "boolean",
        }
    }
}

pub struct TableColumn<T> {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    pub sort_type: SortType,
    pub class_name: Option<String>,
    render: Option<CellRenderer<T>>,
}

impl<T> TableColumn<T> {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            sort_type: SortType::String,
            class_name: None,
            render: None,
        }
    }

    pub fn sortable(mut self, sort_type: SortType) -> Self {
        self.sortable = true;
        self.sort_type = sort_type;
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn render(mut self, render: impl Fn(Option<String>, &T) -> Element + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    fn cell(&self, row: &T) -> Element
    where
        T: TableRow,
    {
        let value = row.cell_value(&self.key);
        match &self.render {
            Some(render) => render(value, row),
            None => {
                let text = value.unwrap_or_default();
                rsx! { "{text}" }
            }
        }
    }
}

/// Table configuration: columns, borrowed rows and optional behaviours.
pub struct TableData<'a, T> {
    pub table_id: String,
    pub title: Option<String>,
    pub columns: Vec<TableColumn<T>>,
    pub rows: &'a [T],
    pub selectable: bool,
    pub row_click_url: Option<RowUrl<T>>,
    pub empty_message: Option<String>,
    pub class_name: Option<String>,
}

impl<'a, T> TableData<'a, T> {
    pub fn new(columns: Vec<TableColumn<T>>, rows: &'a [T]) -> Self {
        Self {
            table_id: DEFAULT_TABLE_ID.to_string(),
            title: None,
            columns,
            rows,
            selectable: false,
            row_click_url: None,
            empty_message: None,
            class_name: None,
        }
    }

    pub fn with_id(mut self, table_id: impl Into<String>) -> Self {
        self.table_id = table_id.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn selectable(mut self) -> Self {
        self.selectable = true;
        self
    }

    pub fn row_click(mut self, url: impl Fn(&T) -> String + 'static) -> Self {
        self.row_click_url = Some(Box::new(url));
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = Some(message.into());
        self
    }
}

struct RenderedRow {
    id: String,
    class: &'static str,
    href: Option<String>,
    onclick: Option<&'static str>,
    cells: Vec<(String, bool, Element)>,
}

/// Renders the table, or its empty-state box when there are no rows.
pub fn render_table<T: TableRow>(data: &TableData<'_, T>) -> Element {
    let table_id = data.table_id.as_str();
    let wrapper_class = format!(
        "backdrop-blur-md bg-black/20 rounded-xl border border-white/10 shadow-xl overflow-hidden {}",
        data.class_name.as_deref().unwrap_or_default()
    );

    if data.rows.is_empty() {
        let message = data.empty_message.as_deref().unwrap_or(DEFAULT_EMPTY_MESSAGE);
        return rsx! {
            div { class: "{wrapper_class}",
                div { class: "px-6 py-12 text-center",
                    svg {
                        class: "mx-auto h-12 w-12 text-gray-400",
                        "fill": "none",
                        "stroke": "currentColor",
                        "viewBox": "0 0 24 24",
                        path {
                            "stroke-linecap": "round",
                            "stroke-linejoin": "round",
                            "stroke-width": "2",
                            "d": "M20 13V6a2 2 0 00-2-2H6a2 2 0 00-2 2v7m16 0v5a2 2 0 01-2 2H6a2 2 0 01-2-2v-5m16 0h-2.586a1 1 0 00-.707.293l-2.414 2.414a1 1 0 01-.707.293h-3.172a1 1 0 01-.707-.293l-2.414-2.414A1 1 0 006.586 13H4",
                        }
                    }
                    p { class: "mt-2 text-sm text-gray-400", "{message}" }
                }
            }
        };
    }

    let rows: Vec<RenderedRow> = data
        .rows
        .iter()
        .map(|row| {
            let click_url = data.row_click_url.as_ref().map(|url| url(row));
            RenderedRow {
                id: row.row_id().unwrap_or_default(),
                class: if click_url.is_some() {
                    "hover:bg-white/5 transition-colors cursor-pointer"
                } else {
                    "hover:bg-white/5 transition-colors"
                },
                onclick: click_url.as_ref().map(|_| ROW_CLICK_HANDLER),
                href: click_url,
                cells: data
                    .columns
                    .iter()
                    .map(|column| {
                        let class = format!(
                            "px-6 py-4 whitespace-nowrap text-sm text-gray-300 {}",
                            column.class_name.as_deref().unwrap_or_default()
                        );
                        (class, column.key == "actions", column.cell(row))
                    })
                    .collect(),
            }
        })
        .collect();

    let select_all_id = format!("select-all-{table_id}");
    let sort_script = sort_script();

    rsx! {
        div { class: "{wrapper_class}",
            if let Some(title) = &data.title {
                div { class: "px-6 py-4 border-b border-white/10",
                    h3 { class: "text-lg font-semibold text-white", "{title}" }
                }
            }
            div { class: "overflow-x-auto",
                table { id: "{table_id}", class: "w-full",
                    thead { class: "bg-white/5",
                        tr {
                            if data.selectable {
                                th { class: "px-6 py-3 w-12",
                                    input {
                                        r#type: "checkbox",
                                        id: "{select_all_id}",
                                        class: "rounded border-white/20 bg-white/10",
                                        "onchange": "document.querySelectorAll('#{table_id} .row-checkbox').forEach(cb => cb.checked = this.checked)",
                                    }
                                }
                            }
                            for column in data.columns.iter() {
                                th { class: "px-6 py-3 text-left text-xs font-medium text-gray-300 uppercase tracking-wider",
                                    if column.sortable {
                                        button {
                                            r#type: "button",
                                            class: "flex items-center gap-x-1 uppercase hover:text-white transition-colors",
                                            "data-column": "{column.key}",
                                            "data-sort-type": "{column.sort_type.as_str()}",
                                            "data-sort-direction": "none",
                                            "onclick": "sortTable('{table_id}', '{column.key}', '{column.sort_type.as_str()}')",
                                            "{column.label}"
                                            svg {
                                                class: "h-3 w-3 opacity-60",
                                                "fill": "none",
                                                "stroke": "currentColor",
                                                "viewBox": "0 0 24 24",
                                                path {
                                                    "stroke-linecap": "round",
                                                    "stroke-linejoin": "round",
                                                    "stroke-width": "2",
                                                    "d": "M8 9l4-4 4 4m0 6l-4 4-4-4",
                                                }
                                            }
                                        }
                                    } else {
                                        "{column.label}"
                                    }
                                }
                            }
                        }
                    }
                    tbody { class: "divide-y divide-white/10",
                        for RenderedRow { id, class, href, onclick, cells } in rows {
                            tr {
                                class: "{class}",
                                "data-href": href,
                                "onclick": onclick,
                                if data.selectable {
                                    td { class: "px-6 py-4 w-12",
                                        input {
                                            r#type: "checkbox",
                                            class: "row-checkbox rounded border-white/20 bg-white/10",
                                            value: "{id}",
                                            "onclick": "event.stopPropagation()",
                                        }
                                    }
                                }
                                for (cell_class, is_actions, cell) in cells {
                                    td {
                                        class: "{cell_class}",
                                        "onclick": if is_actions { "event.stopPropagation()" },
                                        {cell}
                                    }
                                }
                            }
                        }
                    }
                }
            }
            script { dangerous_inner_html: "{sort_script}" }
        }
    }
}

/// Client-side column sort toggled from the header buttons.
fn sort_script() -> &'static str {
    r#"
if (typeof window.sortTable !== 'function') {
  window.sortTable = function (tableId, column, sortType) {
    const table = document.getElementById(tableId);
    if (!table) return;
    const button = table.querySelector('[data-column="' + column + '"]');
    const headers = Array.from(table.querySelectorAll('thead th'));
    const index = headers.findIndex(th => th.contains(button));
    const direction = button.dataset.sortDirection === 'asc' ? 'desc' : 'asc';
    table.querySelectorAll('[data-sort-direction]').forEach(b => b.dataset.sortDirection = 'none');
    button.dataset.sortDirection = direction;
    const parse = (text) => {
      if (sortType === 'number') return parseFloat(text.replace(/[^0-9.-]/g, '')) || 0;
      if (sortType === 'date') return new Date(text).getTime() || 0;
      if (sortType === 'boolean') return /true|yes|published|active/i.test(text) ? 1 : 0;
      return text.toLowerCase();
    };
    const tbody = table.querySelector('tbody');
    const rows = Array.from(tbody.querySelectorAll('tr'));
    rows.sort((a, b) => {
      const x = parse(a.children[index].textContent.trim());
      const y = parse(b.children[index].textContent.trim());
      const order = x < y ? -1 : x > y ? 1 : 0;
      return direction === 'asc' ? order : -order;
    });
    rows.forEach(r => tbody.appendChild(r));
  };
}
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Fruit {
        id: u32,
        name: String,
        color: Option<String>,
    }

    impl TableRow for Fruit {
        fn cell_value(&self, key: &str) -> Option<String> {
            match key {
                "name" => Some(self.name.clone()),
                "color" => self.color.clone(),
                _ => None,
            }
        }

        fn row_id(&self) -> Option<String> {
            Some(self.id.to_string())
        }
    }

    fn fruits() -> Vec<Fruit> {
        vec![
            Fruit {
                id: 1,
                name: "Apple".to_string(),
                color: Some("red".to_string()),
            },
            Fruit {
                id: 2,
                name: "<Kiwi>".to_string(),
                color: None,
            },
        ]
    }

    fn columns() -> Vec<TableColumn<Fruit>> {
        vec![
            TableColumn::new("name", "Name").sortable(SortType::String),
            TableColumn::new("color", "Color").render(|value, _| {
                let color = value.unwrap_or_else(|| "-".to_string());
                rsx! { span { class: "badge", "{color}" } }
            }),
            TableColumn::new("actions", "Actions").render(|_, fruit: &Fruit| {
                rsx! { a { href: "/fruits/{fruit.id}", "Edit" } }
            }),
        ]
    }

    #[test]
    fn test_empty_table_shows_message_without_table() {
        let rows: Vec<Fruit> = vec![];
        let data = TableData::new(columns(), &rows).empty_message("No fruit yet.");
        let html = dioxus_ssr::render_element(render_table(&data));

        assert!(html.contains("No fruit yet."));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_empty_table_default_message() {
        let rows: Vec<Fruit> = vec![];
        let data = TableData::new(columns(), &rows);
        let html = dioxus_ssr::render_element(render_table(&data));

        assert!(html.contains("No data available"));
    }

    #[test]
    fn test_rows_and_custom_cells() {
        let rows = fruits();
        let data = TableData::new(columns(), &rows).with_id("fruit-table");
        let html = dioxus_ssr::render_element(render_table(&data));

        assert!(html.contains("id=\"fruit-table\""));
        assert!(html.contains("Apple"));
        assert!(html.contains("&lt;Kiwi&gt;"));
        assert!(html.contains("<span class=\"badge\">red</span>"));
        assert!(html.contains("<span class=\"badge\">-</span>"));
        assert!(html.contains("/fruits/2"));
        assert_eq!(html.matches("<tr").count(), 3);
    }

    #[test]
    fn test_sortable_header_hints() {
        let rows = fruits();
        let data = TableData::new(columns(), &rows).with_id("fruit-table");
        let html = dioxus_ssr::render_element(render_table(&data));

        assert!(html.contains("data-column=\"name\""));
        assert!(html.contains("data-sort-type=\"string\""));
        assert!(html.contains("data-sort-direction=\"none\""));
        assert!(!html.contains("data-column=\"color\""));
        assert!(html.contains("window.sortTable"));
    }

    #[test]
    fn test_selectable_and_clickable_rows() {
        let rows = fruits();
        let data = TableData::new(columns(), &rows)
            .with_id("fruit-table")
            .selectable()
            .row_click(|fruit: &Fruit| format!("/fruits/{}", fruit.id));
        let html = dioxus_ssr::render_element(render_table(&data));

        assert!(html.contains("select-all-fruit-table"));
        assert_eq!(html.matches("row-checkbox").count(), 2 + 1);
        assert!(html.contains("cursor-pointer"));
        assert!(html.contains("data-href=\"/fruits/1\""));
        assert!(html.contains("onclick=\"window.location.href = this.dataset.href\""));
    }

    #[test]
    fn test_row_click_url_is_not_spliced_into_script() {
        let rows = fruits();
        let data = TableData::new(columns(), &rows)
            .row_click(|fruit: &Fruit| format!("/fruits/{}?q=o'clock\"", fruit.id));
        let html = dioxus_ssr::render_element(render_table(&data));

        assert!(html.contains("data-href=\"/fruits/1?q=o"));
        assert!(!html.contains("clock\"\""));
        assert!(!html.contains("window.location.href='"));
        assert_eq!(html.matches(ROW_CLICK_HANDLER).count(), rows.len());
    }
}

use console::Style;

/// Style names understood by the `style` template filter.
pub mod names {
    pub const HEADER: &str = "header";
    pub const KEY: &str = "key";
    pub const TITLE: &str = "title";
    pub const LABEL: &str = "label";
    pub const PARAM: &str = "param";
    pub const INFO: &str = "info";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

/// Unknown names render unstyled.
pub fn style_for(name: &str) -> Style {
    match name {
        names::HEADER | names::TITLE | names::LABEL => Style::new().bold(),
        names::KEY => Style::new().cyan(),
        names::PARAM => Style::new().yellow(),
        names::INFO => Style::new().dim(),
        names::WARNING => Style::new().yellow(),
        names::ERROR => Style::new().red(),
        _ => Style::new(),
    }
}

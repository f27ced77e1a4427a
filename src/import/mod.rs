pub mod templates;
pub mod tsv;

pub use templates::{Template, write_templates};
pub use tsv::{load_or_report, parse_tsv, read_tsv};

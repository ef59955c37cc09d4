use serde::Serialize;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::analysis::ContactBookAnalysis;
use crate::config::RenderConfig;
use crate::error::GraphResult;
use crate::node_identification::Category;
use crate::output::write_atomically;

/// One unregistered number worth reaching out to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetRow {
    pub phone: String,
    pub degree: usize,
    pub category: Category,
}

/// Every unregistered number from the contact books, most connected first.
pub fn advertising_targets(analysis: &ContactBookAnalysis, config: &RenderConfig) -> Vec<TargetRow> {
    let mut rows: Vec<TargetRow> = analysis
        .degrees
        .iter()
        .map(|(phone, degree)| TargetRow {
            phone: phone.clone(),
            degree,
            category: if degree >= config.connectivity_threshold {
                Category::Popular
            } else {
                Category::Sparse
            },
        })
        .collect();
    rows.sort_by(|a, b| b.degree.cmp(&a.degree).then_with(|| a.phone.cmp(&b.phone)));
    rows
}

pub fn write_targets<W: Write>(rows: &[TargetRow], sink: W) -> GraphResult<()> {
    let mut writer = csv::Writer::from_writer(sink);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!(targets = rows.len(), "wrote advertising targets");
    Ok(())
}

/// Writes the CSV to `path` only once every row has been written.
pub fn write_targets_file(rows: &[TargetRow], path: impl AsRef<Path>) -> GraphResult<()> {
    write_atomically(path.as_ref(), |file| write_targets(rows, BufWriter::new(file)))
}

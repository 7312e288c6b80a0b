//! `--resultTypes` implementation

use crate::api::ApiClient;
use crate::error::Result;
use iprscan_common::types::{JobId, ResultType};
use std::fmt::Write;

/// Print the result types offered for a job
pub async fn run(client: &ApiClient, job_id: &JobId) -> Result<()> {
    let types = client.result_types(job_id).await?;
    print!("{}", render(&types));
    Ok(())
}

/// Identifier on its own line, then each known attribute indented by a tab
pub fn render(types: &[ResultType]) -> String {
    let mut out = String::new();

    for result_type in types {
        let _ = writeln!(out, "{}", result_type.identifier);

        let attributes = [
            &result_type.label,
            &result_type.description,
            &result_type.media_type,
            &result_type.file_suffix,
        ];
        for attribute in attributes.into_iter().flatten() {
            let _ = writeln!(out, "\t{}", attribute);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_skips_missing_attributes() {
        let mut tsv = ResultType::new("tsv").with_suffix("tsv");
        tsv.label = Some("Tab Separated Values".to_string());
        tsv.media_type = Some("text/tab-separated-values".to_string());
        let log = ResultType::new("log");

        assert_eq!(
            render(&[tsv, log]),
            "tsv\n\tTab Separated Values\n\ttext/tab-separated-values\n\ttsv\nlog\n"
        );
    }
}

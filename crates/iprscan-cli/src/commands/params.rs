//! `--params` and `--paramDetail` implementation
//!
//! Lists the parameters the service accepts and describes one of them.

use crate::api::ApiClient;
use crate::error::Result;
use iprscan_common::types::ParameterDetail;
use std::fmt::Write;

/// Print every parameter name, one per line
pub async fn list(client: &ApiClient) -> Result<()> {
    for name in client.list_parameter_names().await? {
        println!("{}", name);
    }
    Ok(())
}

/// Print the description of one parameter
pub async fn detail(client: &ApiClient, name: &str) -> Result<()> {
    let detail = client.describe_parameter(name).await?;
    print!("{}", render_detail(&detail));
    Ok(())
}

/// Layout:
///
/// ```text
/// name<TAB>type
/// description
/// value [default]
/// <TAB>label
/// <TAB>key<TAB>value
/// ```
pub fn render_detail(detail: &ParameterDetail) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}\t{}", detail.name, detail.param_type);
    let _ = writeln!(out, "{}", detail.description);

    for value in &detail.values {
        if value.is_default {
            let _ = writeln!(out, "{} default", value.value);
        } else {
            let _ = writeln!(out, "{}", value.value);
        }
        let _ = writeln!(out, "\t{}", value.label);
        for (key, prop) in &value.properties {
            let _ = writeln!(out, "\t{}\t{}", key, prop);
        }
    }

    out
}

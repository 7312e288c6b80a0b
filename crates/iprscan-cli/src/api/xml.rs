//! XML response decoding
//!
//! The service answers discovery and result-type queries with small XML
//! documents. They are deserialized into private wire structs and then
//! converted into the shared domain types, so the in-memory shape does not
//! follow the wire format.

use crate::error::Result;
use iprscan_common::types::{ParameterDetail, ParameterValue, ResultType};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;

/// `<parameters><id>..</id>...</parameters>`
#[derive(Debug, Deserialize)]
struct WireParameterList {
    #[serde(rename = "id", default)]
    ids: Vec<String>,
}

/// `<parameter>` detail document
#[derive(Debug, Deserialize)]
struct WireParameterDetail {
    name: String,
    #[serde(rename = "type", default)]
    param_type: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    values: Option<WireValues>,
}

#[derive(Debug, Deserialize)]
struct WireValues {
    #[serde(rename = "value", default)]
    items: Vec<WireValue>,
}

#[derive(Debug, Deserialize)]
struct WireValue {
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    value: Option<String>,
    #[serde(rename = "defaultValue", default)]
    default_value: Option<String>,
    #[serde(default)]
    properties: Option<WireProperties>,
}

#[derive(Debug, Deserialize)]
struct WireProperties {
    #[serde(rename = "property", default)]
    items: Vec<WireProperty>,
}

#[derive(Debug, Deserialize)]
struct WireProperty {
    key: String,
    #[serde(default)]
    value: Option<String>,
}

/// `<types><type>..</type>...</types>`
#[derive(Debug, Deserialize)]
struct WireResultTypes {
    #[serde(rename = "type", default)]
    types: Vec<WireResultType>,
}

#[derive(Debug, Deserialize)]
struct WireResultType {
    identifier: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "mediaType", default)]
    media_type: Option<String>,
    #[serde(rename = "fileSuffix", default)]
    file_suffix: Option<String>,
}

impl From<WireValue> for ParameterValue {
    fn from(wire: WireValue) -> Self {
        Self {
            value: wire.value.unwrap_or_default(),
            label: wire.label.unwrap_or_default(),
            is_default: wire
                .default_value
                .is_some_and(|v| v.trim().eq_ignore_ascii_case("true")),
            properties: wire
                .properties
                .map(|p| {
                    p.items
                        .into_iter()
                        .map(|prop| (prop.key, prop.value.unwrap_or_default()))
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

impl From<WireResultType> for ResultType {
    fn from(wire: WireResultType) -> Self {
        Self {
            identifier: wire.identifier,
            label: wire.label,
            description: wire.description,
            media_type: wire.media_type,
            file_suffix: wire.file_suffix,
        }
    }
}

/// True when the document carries no payload: empty, or an `<error>` root
pub fn is_empty_or_error(xml: &str) -> bool {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => return e.name().as_ref() == b"error",
            Ok(Event::Eof) => return true,
            Err(_) => return false,
            _ => {},
        }
    }
}

/// Parse the parameter-name list, in document order
pub fn parse_parameter_names(xml: &str) -> Result<Vec<String>> {
    let doc: WireParameterList = quick_xml::de::from_str(xml)?;
    Ok(doc.ids)
}

/// Parse a parameter detail document
pub fn parse_parameter_detail(xml: &str) -> Result<ParameterDetail> {
    let doc: WireParameterDetail = quick_xml::de::from_str(xml)?;

    Ok(ParameterDetail {
        name: doc.name,
        param_type: doc.param_type,
        description: doc.description.unwrap_or_default(),
        values: doc
            .values
            .map(|v| v.items.into_iter().map(ParameterValue::from).collect())
            .unwrap_or_default(),
    })
}

/// Parse the result types offered for a job, in document order
pub fn parse_result_types(xml: &str) -> Result<Vec<ResultType>> {
    let doc: WireResultTypes = quick_xml::de::from_str(xml)?;
    Ok(doc.types.into_iter().map(ResultType::from).collect())
}

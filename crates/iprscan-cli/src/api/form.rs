//! Submission body encoding
//!
//! The service expects `application/x-www-form-urlencoded` bodies in which
//! the signature-method list is sent as repeated `appl=<method>` pairs at the
//! end of the body.

use iprscan_common::types::{JobParameters, ParamValue};
use url::form_urlencoded;

/// Multi-valued parameter carrying the signature methods
pub const APPL_PARAM: &str = "appl";

/// Merge the dedicated `email` / `title` options into the parameters.
///
/// The dedicated options replace same-named keys already in the map; an
/// unset title leaves any caller-supplied `title` untouched.
pub fn merge_submission_fields(
    email: &str,
    title: Option<&str>,
    mut parameters: JobParameters,
) -> JobParameters {
    parameters.insert("email", ParamValue::text(email));
    if let Some(title) = title {
        parameters.insert("title", ParamValue::text(title));
    }
    parameters
}

/// Encode parameters as a form body, with `appl` values appended last.
pub fn encode_submission(parameters: &JobParameters) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    for (name, value) in parameters.iter().filter(|(name, _)| *name != APPL_PARAM) {
        for wire in value.to_wire_values() {
            serializer.append_pair(name, &wire);
        }
    }

    if let Some(appl) = parameters.get(APPL_PARAM) {
        for method in appl.to_wire_values() {
            serializer.append_pair(APPL_PARAM, &method);
        }
    }

    serializer.finish()
}

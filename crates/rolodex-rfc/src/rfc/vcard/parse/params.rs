//! Parameter decoders (RFC 6350 §5).
//!
//! Each decoder reads one parameter from a lexed content line, matching
//! parameter names without regard to case, and validates its cardinality
//! and values. [`decode_params`] runs the decoders a [`ParamSpec`] selects.

use std::collections::BTreeMap;

use super::error::{ParseError, ParseResult};
use super::lexer::ContentLine;
use crate::rfc::vcard::core::{ParamSpec, Parameters, ValueType, is_x_name};

const MAX_PREF: u8 = 100;

/// Decodes the parameters of `line` that `spec` lists.
///
/// Parameters `spec` does not list are ignored, except `x-` parameters which
/// every property keeps.
///
/// ## Errors
/// Returns an error if a decoder rejects its parameter.
pub fn decode_params(
    line: &ContentLine,
    spec: &ParamSpec,
    line_num: usize,
) -> ParseResult<Parameters> {
    let mut params = Parameters::default();

    if !spec.value.is_empty() {
        params.value = decode_value(line, spec.value, line_num)?;
    }
    let effective = params.value.or_else(|| spec.default_value());

    if let Some(allowed) = spec.types {
        params.types = decode_types(line, allowed);
    }
    if spec.language.applies(effective) {
        params.language = decode_single(line, "LANGUAGE", line_num)?;
    }
    if spec.pref.applies(effective) {
        params.pref = decode_pref(line, line_num)?;
    }
    if spec.altid.applies(effective) {
        params.altid = decode_single(line, "ALTID", line_num)?;
    }
    if spec.pid.applies(effective) {
        params.pid = decode_single(line, "PID", line_num)?;
    }
    if spec.media_type.applies(effective) {
        params.media_type = decode_single(line, "MEDIATYPE", line_num)?;
    }
    if spec.calscale.applies(effective) {
        params.calscale = decode_calscale(line, line_num)?;
    }
    if spec.sort_as.applies(effective) {
        params.sort_as = decode_sort_as(line);
    }
    if spec.geo.applies(effective) {
        params.geo = decode_single(line, "GEO", line_num)?;
    }
    if spec.tz.applies(effective) {
        params.tz = decode_single(line, "TZ", line_num)?;
    }
    if spec.label.applies(effective) {
        params.label = decode_single(line, "LABEL", line_num)?;
    }
    params.extensions = decode_extensions(line);

    Ok(params)
}

/// Decodes VALUE against the property's allowed types.
///
/// ## Errors
/// Returns an error if VALUE is repeated or names a type not in `allowed`.
pub fn decode_value(
    line: &ContentLine,
    allowed: &[ValueType],
    line_num: usize,
) -> ParseResult<Option<ValueType>> {
    let values: Vec<&str> = line.param_values("VALUE").collect();
    match values.as_slice() {
        [] => Ok(None),
        [value] => ValueType::from_name(value)
            .filter(|vt| allowed.contains(vt))
            .map(Some)
            .ok_or_else(|| {
                let names: Vec<String> = allowed.iter().map(ToString::to_string).collect();
                ParseError::invalid_value(
                    line_num,
                    format!("VALUE must be one of {}, got {value}", names.join(", ")),
                )
            }),
        _ => Err(ParseError::duplicate(line_num, "only one VALUE allowed")),
    }
}

/// Decodes a parameter that may appear at most once.
///
/// ## Errors
/// Returns an error if the parameter has more than one value.
pub fn decode_single(
    line: &ContentLine,
    key: &'static str,
    line_num: usize,
) -> ParseResult<Option<String>> {
    let mut values = line.param_values(key);
    let first = values.next();
    if values.next().is_some() {
        return Err(ParseError::duplicate(
            line_num,
            format!("only one {key} allowed"),
        ));
    }
    Ok(first.map(String::from))
}

/// Decodes PREF as an integer between 0 and 100.
///
/// ## Errors
/// Returns an error if PREF is repeated, non-numeric or out of range.
pub fn decode_pref(line: &ContentLine, line_num: usize) -> ParseResult<Option<u8>> {
    let Some(raw) = decode_single(line, "PREF", line_num)? else {
        return Ok(None);
    };

    raw.parse::<u8>()
        .ok()
        .filter(|pref| *pref <= MAX_PREF)
        .map(Some)
        .ok_or_else(|| {
            ParseError::invalid_value(
                line_num,
                format!("PREF must be an integer between 0 and {MAX_PREF}, got {raw}"),
            )
        })
}

/// Decodes CALSCALE, which must be `gregorian` or an `x-` name.
///
/// ## Errors
/// Returns an error if CALSCALE is repeated or has any other value.
pub fn decode_calscale(line: &ContentLine, line_num: usize) -> ParseResult<Option<String>> {
    match decode_single(line, "CALSCALE", line_num)? {
        Some(scale) if !scale.eq_ignore_ascii_case("gregorian") && !is_x_name(&scale) => {
            Err(ParseError::invalid_value(
                line_num,
                format!("CALSCALE must be gregorian or an x-name, got {scale}"),
            ))
        }
        scale => Ok(scale),
    }
}

/// Keeps the TYPE tokens in `allowed` plus `x-` tokens, lowercased.
///
/// Anything else is dropped without error; an empty result is `None`.
#[must_use]
pub fn decode_types(line: &ContentLine, allowed: &[&str]) -> Option<Vec<String>> {
    let kept: Vec<String> = line
        .param_values("TYPE")
        .filter(|token| allowed.iter().any(|a| a.eq_ignore_ascii_case(token)) || is_x_name(token))
        .map(str::to_ascii_lowercase)
        .collect();

    (!kept.is_empty()).then_some(kept)
}

/// Joins every SORT-AS value with commas.
#[must_use]
pub fn decode_sort_as(line: &ContentLine) -> Option<String> {
    let values: Vec<&str> = line.param_values("SORT-AS").collect();
    (!values.is_empty()).then(|| values.join(","))
}

/// Copies every `x-` parameter verbatim.
#[must_use]
pub fn decode_extensions(line: &ContentLine) -> BTreeMap<String, Vec<String>> {
    line.params
        .iter()
        .filter(|p| p.is_extension())
        .map(|p| (p.name.clone(), p.values.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::core::{PropertyName, types};
    use crate::rfc::vcard::parse::{ParseErrorKind, parse_content_line};

    fn line(s: &str) -> ContentLine {
        parse_content_line(s, 1).unwrap()
    }

    #[test]
    fn value_absent() {
        assert_eq!(decode_value(&line("FN:x"), &[ValueType::Text], 1), Ok(None));
    }

    #[test]
    fn value_allowed_ignores_case() {
        let l = line("TEL;VALUE=URI:tel:+1");
        assert_eq!(
            decode_value(&l, &[ValueType::Text, ValueType::Uri], 1),
            Ok(Some(ValueType::Uri))
        );
    }

    #[test]
    fn value_not_allowed() {
        let err = decode_value(&line("FN;VALUE=uri:x"), &[ValueType::Text], 3).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Value);
        assert_eq!(err.line, 3);
        assert!(err.message.contains("VALUE must be one of text"));
    }

    #[test]
    fn value_repeated() {
        let err = decode_value(&line("FN;VALUE=text;value=text:x"), &[ValueType::Text], 1)
            .unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Duplicate);
        assert_eq!(err.message, "only one VALUE allowed");
    }

    #[test]
    fn single_rejects_repeats() {
        let err = decode_single(&line("FN;LANGUAGE=en;LANGUAGE=fr:x"), "LANGUAGE", 1)
            .unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Duplicate);
        assert_eq!(err.message, "only one LANGUAGE allowed");
    }

    #[test]
    fn single_ignores_key_case() {
        assert_eq!(
            decode_single(&line("FN;altid=1:x"), "ALTID", 1),
            Ok(Some("1".to_string()))
        );
    }

    #[test]
    fn pref_in_range() {
        assert_eq!(decode_pref(&line("TEL;PREF=1:x"), 1), Ok(Some(1)));
        assert_eq!(decode_pref(&line("TEL;PREF=0:x"), 1), Ok(Some(0)));
        assert_eq!(decode_pref(&line("TEL;PREF=100:x"), 1), Ok(Some(100)));
        assert_eq!(decode_pref(&line("TEL:x"), 1), Ok(None));
    }

    #[test]
    fn pref_reads_its_own_key() {
        assert_eq!(decode_pref(&line("TEL;PID=7:x"), 1), Ok(None));
    }

    #[test]
    fn pref_out_of_range_or_non_numeric() {
        for input in ["TEL;PREF=101:x", "TEL;PREF=-1:x", "TEL;PREF=high:x", "TEL;PREF=:x"] {
            let err = decode_pref(&line(input), 1).unwrap_err();
            assert_eq!(err.kind, ParseErrorKind::Value, "{input}");
        }
    }

    #[test]
    fn calscale_values() {
        assert_eq!(
            decode_calscale(&line("BDAY;CALSCALE=gregorian:x"), 1),
            Ok(Some("gregorian".to_string()))
        );
        assert_eq!(
            decode_calscale(&line("BDAY;CALSCALE=X-Lunar:x"), 1),
            Ok(Some("X-Lunar".to_string()))
        );
        let err = decode_calscale(&line("BDAY;CALSCALE=julian:x"), 1).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Value);
    }

    #[test]
    fn types_filter_unknown_tokens() {
        let l = line("EMAIL;TYPE=home,internet,X-Custom;Pref:a@b.c");
        assert_eq!(
            decode_types(&l, types::GENERAL),
            Some(vec!["home".to_string(), "x-custom".to_string()])
        );
    }

    #[test]
    fn types_all_dropped_is_none() {
        assert_eq!(decode_types(&line("EMAIL;TYPE=internet:a@b.c"), types::GENERAL), None);
    }

    #[test]
    fn tel_types() {
        let l = line("TEL;TYPE=cell,voice,work:+1");
        assert_eq!(
            decode_types(&l, types::TEL),
            Some(vec!["cell".into(), "voice".into(), "work".into()])
        );
        assert_eq!(decode_types(&l, types::GENERAL), Some(vec!["work".into()]));
    }

    #[test]
    fn sort_as_joins_values() {
        assert_eq!(
            decode_sort_as(&line("N;SORT-AS=Doe;sort-as=John:Doe;John;;;")),
            Some("Doe,John".to_string())
        );
        assert_eq!(decode_sort_as(&line("N:Doe;John;;;")), None);
    }

    #[test]
    fn extensions_copied_verbatim() {
        let ext = decode_extensions(&line("FN;X-Service=Skype;x-a=1;LANGUAGE=en:x"));
        assert_eq!(ext.len(), 2);
        assert_eq!(ext["X-Service"], vec!["Skype"]);
        assert_eq!(ext["x-a"], vec!["1"]);
    }

    #[test]
    fn spec_excludes_inapplicable_parameters() {
        let l = line("VERSION;LANGUAGE=en;PREF=1;X-A=b:4.0");
        let params = decode_params(&l, &PropertyName::Version.param_spec(), 1).unwrap();
        assert_eq!(params.language, None);
        assert_eq!(params.pref, None);
        assert_eq!(params.extensions["X-A"], vec!["b"]);
    }

    #[test]
    fn inapplicable_parameters_are_not_validated() {
        let l = line("VERSION;PREF=banana:4.0");
        assert!(decode_params(&l, &PropertyName::Version.param_spec(), 1).is_ok());
    }

    #[test]
    fn language_depends_on_effective_value() {
        let spec = PropertyName::Bday.param_spec();

        let date = decode_params(&line("BDAY;LANGUAGE=en:19700101"), &spec, 1).unwrap();
        assert_eq!(date.language, None);

        let text =
            decode_params(&line("BDAY;VALUE=text;LANGUAGE=en:circa 1800"), &spec, 1).unwrap();
        assert_eq!(text.value, Some(ValueType::Text));
        assert_eq!(text.language.as_deref(), Some("en"));
    }

    #[test]
    fn generic_spec_accepts_every_builtin_value_type() {
        let params = decode_params(
            &line("X-CUSTOM;VALUE=boolean:true"),
            &crate::rfc::vcard::core::ParamSpec::GENERIC,
            1,
        )
        .unwrap();
        assert_eq!(params.value, Some(ValueType::Boolean));
    }
}

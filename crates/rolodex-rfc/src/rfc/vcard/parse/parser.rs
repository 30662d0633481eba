//! vCard document parser.
//!
//! Cards are assembled by a two-state machine over the lexed lines: idle
//! between cards, open between `BEGIN:VCARD` and `END:VCARD`. Every other
//! line is decoded by the handler for its property name.

use std::borrow::Cow;

use rolodex_core::config::ParserConfig;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{ContentLine, lex, normalize_line_endings};
use super::params::decode_params;
use super::values::{
    parse_address, parse_client_pid_map, parse_gender, parse_organization, parse_structured_name,
    parse_version, split_component, text_or_verbatim,
};
use crate::rfc::vcard::core::{
    Kind, ParamSpec, Property, PropertyName, VCard, VCardBuilder, ValueType,
};

const VCARD: &str = "VCARD";

/// Parses a vCard document into one or more vCards.
///
/// ## Summary
/// Parses the input string as a vCard 4.0 document and returns all vCards
/// found, in the order they were closed.
///
/// ## Errors
/// Returns a parse error if any line is malformed, cards are not properly
/// delimited, a required property is missing, or a property value or
/// parameter is invalid. Nothing is returned for a partially valid document.
pub fn parse(input: &str) -> ParseResult<Vec<VCard>> {
    parse_with(input, &ParserConfig::default())
}

/// Parses a vCard document with explicit parser configuration.
///
/// ## Errors
/// Same as [`parse`]; additionally fails if the input exceeds
/// `config.max_input_bytes`.
#[tracing::instrument(skip(input, config), fields(input_len = input.len()))]
pub fn parse_with(input: &str, config: &ParserConfig) -> ParseResult<Vec<VCard>> {
    tracing::debug!("Parsing vCard document");

    if !config.accepts_len(input.len()) {
        tracing::warn!(max = ?config.max_input_bytes, "vCard document exceeds size limit");
        return Err(ParseError::new(
            ParseErrorKind::TooLarge,
            0,
            format!("input is {} bytes", input.len()),
        ));
    }

    let input = if config.normalize_newlines {
        normalize_line_endings(input)
    } else {
        Cow::Borrowed(input)
    };

    let lines = lex(&input)?;

    let mut assembler = Assembler::default();
    for (idx, line) in lines.iter().enumerate() {
        assembler.feed(line, idx + 1)?;
    }
    let cards = assembler.finish(lines.len())?;

    tracing::debug!(count = cards.len(), "Parsed vCards");

    Ok(cards)
}

/// Parses a single vCard from input.
///
/// ## Summary
/// Convenience function for documents holding one vCard. Cards after the
/// first are validated and discarded.
///
/// ## Errors
/// Returns an error if the document contains no vCards or is malformed.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_single(input: &str) -> ParseResult<VCard> {
    tracing::debug!("Parsing single vCard");

    let cards = parse(input)?;
    cards.into_iter().next().ok_or_else(|| {
        tracing::warn!("No vCard found in document");
        ParseError::structural(0, "no vCard found in document")
    })
}

#[derive(Default)]
struct Assembler {
    /// The open card, if any.
    current: Option<VCardBuilder>,
    cards: Vec<VCard>,
}

impl Assembler {
    fn feed(&mut self, line: &ContentLine, line_num: usize) -> ParseResult<()> {
        match line.name.as_str() {
            "BEGIN" => self.begin(line, line_num),
            "END" => self.end(line, line_num),
            _ => {
                let Some(card) = self.current.as_mut() else {
                    return Err(ParseError::structural(
                        line_num,
                        format!("no card in progress for {}", line.name),
                    ));
                };
                apply_property(card, line, line_num)
            }
        }
    }

    fn begin(&mut self, line: &ContentLine, line_num: usize) -> ParseResult<()> {
        if self.current.is_some() {
            return Err(ParseError::structural(
                line_num,
                "cannot begin before previous closed",
            ));
        }
        expect_vcard(line, line_num)?;

        tracing::trace!(line = line_num, "Opening vCard");
        self.current = Some(VCardBuilder::new());
        Ok(())
    }

    fn end(&mut self, line: &ContentLine, line_num: usize) -> ParseResult<()> {
        let Some(card) = self.current.take() else {
            return Err(ParseError::structural(line_num, "no card in progress for END"));
        };
        expect_vcard(line, line_num)?;

        let card = card.build().map_err(|missing| {
            let names: Vec<&str> = missing.iter().map(|name| name.as_str()).collect();
            tracing::warn!(line = line_num, ?names, "vCard closed without required properties");
            ParseError::structural(
                line_num,
                format!("incomplete vCard: missing {}", names.join(", ")),
            )
        })?;

        self.cards.push(card);
        Ok(())
    }

    fn finish(self, last_line: usize) -> ParseResult<Vec<VCard>> {
        if self.current.is_some() {
            tracing::warn!("vCard not closed before end of input");
            return Err(ParseError::structural(
                last_line,
                "incomplete vCard: missing END:VCARD",
            ));
        }
        Ok(self.cards)
    }
}

fn expect_vcard(line: &ContentLine, line_num: usize) -> ParseResult<()> {
    if line.value.eq_ignore_ascii_case(VCARD) {
        Ok(())
    } else {
        Err(ParseError::structural(
            line_num,
            format!("{} must be followed by VCARD, got {}", line.name, line.value),
        ))
    }
}

/// Decodes `line` with the handler for its property and stores the result.
fn apply_property(card: &mut VCardBuilder, line: &ContentLine, line_num: usize) -> ParseResult<()> {
    let Some(name) = PropertyName::from_name(&line.name) else {
        tracing::trace!(name = %line.name, "Keeping unrecognized property");
        let prop = decode(line, &ParamSpec::GENERIC, line_num, |raw, _| Ok(raw.to_string()))?;
        card.push_extension(&line.name, prop);
        return Ok(());
    };

    let spec = name.param_spec();
    let string = || decode(line, &spec, line_num, text_value);

    match name {
        PropertyName::Version => set_once(&mut card.version, name, line_num, || {
            decode(line, &spec, line_num, |raw, _| parse_version(raw, line_num))
        }),
        PropertyName::Fn => set_once(&mut card.formatted_name, name, line_num, string),
        PropertyName::N => set_once(&mut card.n, name, line_num, || {
            decode(line, &spec, line_num, |raw, _| {
                parse_structured_name(raw, line_num)
            })
        }),
        PropertyName::Kind => set_once(&mut card.kind, name, line_num, || {
            decode(line, &spec, line_num, |raw, vt| {
                Ok(Kind::from_value(&text_or_verbatim(raw, vt)))
            })
        }),
        PropertyName::Gender => set_once(&mut card.gender, name, line_num, || {
            decode(line, &spec, line_num, |raw, _| parse_gender(raw, line_num))
        }),
        PropertyName::Bday => set_once(&mut card.bday, name, line_num, string),
        PropertyName::Anniversary => set_once(&mut card.anniversary, name, line_num, string),
        PropertyName::Prodid => set_once(&mut card.prodid, name, line_num, string),
        PropertyName::Rev => set_once(&mut card.rev, name, line_num, string),
        PropertyName::Uid => set_once(&mut card.uid, name, line_num, string),
        PropertyName::Adr => {
            card.adr
                .push(decode(line, &spec, line_num, |raw, _| Ok(parse_address(raw)))?);
            Ok(())
        }
        PropertyName::Org => {
            card.org
                .push(decode(line, &spec, line_num, |raw, _| Ok(parse_organization(raw)))?);
            Ok(())
        }
        PropertyName::Nickname => {
            card.nickname
                .push(decode(line, &spec, line_num, |raw, _| Ok(split_component(raw)))?);
            Ok(())
        }
        PropertyName::Categories => {
            card.categories
                .push(decode(line, &spec, line_num, |raw, _| Ok(split_component(raw)))?);
            Ok(())
        }
        PropertyName::Clientpidmap => {
            card.clientpidmap.push(decode(line, &spec, line_num, |raw, _| {
                parse_client_pid_map(raw, line_num)
            })?);
            Ok(())
        }
        PropertyName::Source => push(&mut card.source, string),
        PropertyName::Xml => push(&mut card.xml, string),
        PropertyName::Photo => push(&mut card.photo, string),
        PropertyName::Tel => push(&mut card.tel, string),
        PropertyName::Email => push(&mut card.email, string),
        PropertyName::Impp => push(&mut card.impp, string),
        PropertyName::Lang => push(&mut card.lang, string),
        PropertyName::Tz => push(&mut card.tz, string),
        PropertyName::Geo => push(&mut card.geo, string),
        PropertyName::Title => push(&mut card.title, string),
        PropertyName::Role => push(&mut card.role, string),
        PropertyName::Logo => push(&mut card.logo, string),
        PropertyName::Member => push(&mut card.member, string),
        PropertyName::Related => push(&mut card.related, string),
        PropertyName::Note => push(&mut card.note, string),
        PropertyName::Sound => push(&mut card.sound, string),
        PropertyName::Url => push(&mut card.url, string),
        PropertyName::Key => push(&mut card.key, string),
        PropertyName::Fburl => push(&mut card.fburl, string),
        PropertyName::Caladruri => push(&mut card.caladruri, string),
        PropertyName::Caluri => push(&mut card.caluri, string),
    }
}

/// Decodes parameters per `spec`, then the value with the effective VALUE
/// type.
fn decode<T>(
    line: &ContentLine,
    spec: &ParamSpec,
    line_num: usize,
    value: impl FnOnce(&str, Option<ValueType>) -> ParseResult<T>,
) -> ParseResult<Property<T>> {
    let params = decode_params(line, spec, line_num)?;
    let effective = params.value.or_else(|| spec.default_value());
    let value = value(&line.value, effective)?;

    Ok(Property {
        group: line.group.clone(),
        params,
        value,
    })
}

fn text_value(raw: &str, effective: Option<ValueType>) -> ParseResult<String> {
    Ok(text_or_verbatim(raw, effective))
}

fn set_once<T>(
    slot: &mut Option<Property<T>>,
    name: PropertyName,
    line_num: usize,
    decode: impl FnOnce() -> ParseResult<Property<T>>,
) -> ParseResult<()> {
    if slot.is_some() {
        return Err(ParseError::duplicate(
            line_num,
            format!("duplicate property: {}", name.as_str()),
        ));
    }
    *slot = Some(decode()?);
    Ok(())
}

fn push<T>(
    list: &mut Vec<Property<T>>,
    decode: impl FnOnce() -> ParseResult<Property<T>>,
) -> ParseResult<()> {
    list.push(decode()?);
    Ok(())
}

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, space1},
    combinator::{all_consuming, map},
    multi::many0,
    sequence::{preceded, separated_pair, tuple},
    IResult,
};
use scribe_protocol::{
    Gender, Inflection, LexicalCategory, LexicalFlags, NumberAgreement, Person, WordEntry, WordId,
};

use crate::error::LexiconError;

/// One whitespace-separated field after the category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<'a> {
    Pair(&'a str, &'a str),
    Bare(&'a str),
}

/// A lexicon line split into its parts, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry<'a> {
    pub base: &'a str,
    pub category: &'a str,
    pub fields: Vec<Field<'a>>,
}

fn is_token_char(c: char) -> bool {
    !c.is_whitespace() && c != '=' && c != '#'
}

fn token(input: &str) -> IResult<&str, &str> {
    take_while1(is_token_char)(input)
}

fn field(input: &str) -> IResult<&str, Field<'_>> {
    alt((
        map(separated_pair(token, char('='), token), |(key, value)| {
            Field::Pair(key, value)
        }),
        map(token, Field::Bare),
    ))(input)
}

fn raw_entry(input: &str) -> IResult<&str, RawEntry<'_>> {
    map(
        all_consuming(tuple((
            token,
            preceded(space1, token),
            many0(preceded(space1, field)),
        ))),
        |(base, category, fields)| RawEntry {
            base,
            category,
            fields,
        },
    )(input)
}

/// Strips the comment and surrounding blanks; `None` for lines with no entry.
fn content(line: &str) -> Option<&str> {
    let line = match line.find('#') {
        Some(at) => &line[..at],
        None => line,
    };
    let line = line.trim();
    (!line.is_empty()).then_some(line)
}

/// Splits a line into its raw fields. `line_no` is 1-based and only used for errors.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<RawEntry<'_>>, LexiconError> {
    let Some(line) = content(line) else {
        return Ok(None);
    };
    match raw_entry(line) {
        Ok((_, entry)) => Ok(Some(entry)),
        Err(_) => Err(LexiconError::parse(
            line_no,
            format!("expected `base category [fields...]`, found '{line}'"),
        )),
    }
}

/// Builds a `WordEntry` from a raw line.
pub fn interpret(raw: &RawEntry<'_>, id: WordId, line_no: usize) -> Result<WordEntry, LexiconError> {
    let category: LexicalCategory = raw
        .category
        .parse()
        .map_err(|e| LexiconError::parse(line_no, format!("{e} (category)")))?;
    let mut entry = WordEntry::new(id, raw.base, category);

    for field in &raw.fields {
        match *field {
            Field::Bare(word) => {
                if let Ok(inflection) = word.parse::<Inflection>() {
                    entry.inflection = inflection;
                } else if let Ok(flag) = word.parse::<LexicalFlags>() {
                    entry = entry.with_flags(flag);
                } else {
                    return Err(LexiconError::parse(
                        line_no,
                        format!("'{word}' is neither an inflection pattern nor a flag"),
                    ));
                }
            }
            Field::Pair(key, value) => apply_pair(&mut entry, key, value)
                .map_err(|message| LexiconError::parse(line_no, message))?,
        }
    }
    Ok(entry)
}

fn apply_pair(entry: &mut WordEntry, key: &str, value: &str) -> Result<(), String> {
    let forms = &mut entry.forms;
    let slot = match key {
        "plural" => &mut forms.plural,
        "past" => &mut forms.past,
        "past_participle" => &mut forms.past_participle,
        "present_participle" => &mut forms.present_participle,
        "present3s" => &mut forms.present3s,
        "comparative" => &mut forms.comparative,
        "superlative" => &mut forms.superlative,
        "spelling" => &mut entry.spelling,
        "gender" => {
            entry.gender = Some(value.parse::<Gender>().map_err(|e| e.to_string())?);
            return Ok(());
        }
        "person" => {
            entry.person = Some(value.parse::<Person>().map_err(|e| e.to_string())?);
            return Ok(());
        }
        "number" => {
            entry.number = Some(value.parse::<NumberAgreement>().map_err(|e| e.to_string())?);
            return Ok(());
        }
        other => return Err(format!("unknown key '{other}'")),
    };
    *slot = Some(value.to_string());
    Ok(())
}

// Word Wheel – A letter wheel word game
// Copyright (C) 2025  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Reads the word list from CSV. The first record is a header and
//! the columns are, in order: text, rarity, part of speech,
//! definition, example sentence, average sub-word length, number of
//! sub-words of at least 3, 4 and 5 letters, and the number of valid
//! sub-words for easy, medium and hard puzzles.

use std::fmt;
use std::io;
use std::path::Path;
use log::warn;
use super::dictionary::{Dictionary, WordRecord};

#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    InvalidUtf8,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "{}", e),
            LoadError::InvalidUtf8 => {
                write!(f, "the dictionary contains invalid UTF-8")
            },
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> LoadError {
        LoadError::Io(e)
    }
}

pub struct ParseReport {
    pub dictionary: Dictionary,
    /// Line numbers of records that were dropped.
    pub skipped_lines: Vec<usize>,
}

struct CsvRecord {
    line_num: usize,
    fields: Vec<String>,
}

fn push_record(
    records: &mut Vec<CsvRecord>,
    line_num: usize,
    fields: Vec<String>,
) {
    if fields.len() == 1 && fields[0].trim().is_empty() {
        return;
    }

    records.push(CsvRecord {
        line_num,
        fields: fields.into_iter().map(|f| f.trim().to_string()).collect(),
    });
}

fn split_records(text: &str) -> Vec<CsvRecord> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line_num = 1;
    let mut record_line = 1;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            },
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => (),
            '\n' => {
                line_num += 1;

                if in_quotes {
                    field.push('\n');
                } else {
                    fields.push(std::mem::take(&mut field));
                    push_record(
                        &mut records,
                        record_line,
                        std::mem::take(&mut fields),
                    );
                    record_line = line_num;
                }
            },
            ch => field.push(ch),
        }
    }

    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        push_record(&mut records, record_line, fields);
    }

    records
}

fn field(fields: &[String], index: usize) -> &str {
    fields.get(index).map(String::as_str).unwrap_or("")
}

/// Reads the digits at the start of the field so that “3.0” or
/// “12abc” still count. Anything without leading digits or with a
/// minus sign is 0.
fn integer(fields: &[String], index: usize) -> u32 {
    let text = field(fields, index).trim_start();
    let text = text.strip_prefix('+').unwrap_or(text);

    text.chars()
        .map_while(|ch| ch.to_digit(10))
        .fold(0u32, |total, digit| {
            total.saturating_mul(10).saturating_add(digit)
        })
}

/// The longest prefix of the field that is a number, or 0.
fn float(fields: &[String], index: usize) -> f32 {
    let text = field(fields, index).trim();

    (1..=text.len())
        .rev()
        .filter(|&end| text.is_char_boundary(end))
        .find_map(|end| text[..end].parse::<f32>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

fn parse_record(fields: &[String]) -> Option<WordRecord> {
    let text = field(fields, 0).to_lowercase();

    if text.is_empty() {
        return None;
    }

    Some(WordRecord {
        text,
        rarity: integer(fields, 1),
        part_of_speech: field(fields, 2).to_string(),
        definition: field(fields, 3).to_string(),
        example_sentence: field(fields, 4).to_string(),
        avg_sub_length: float(fields, 5),
        count_ge3: integer(fields, 6),
        count_ge4: integer(fields, 7),
        count_ge5: integer(fields, 8),
        easy_valid_count: integer(fields, 9),
        medium_valid_count: integer(fields, 10),
        hard_valid_count: integer(fields, 11),
    })
}

pub fn parse_dictionary(text: &str) -> ParseReport {
    let mut dictionary = Dictionary::new();
    let mut skipped_lines = Vec::new();

    for record in split_records(text).into_iter().skip(1) {
        let Some(word) = parse_record(&record.fields)
        else {
            warn!(
                "line {}: skipping record with an empty word",
                record.line_num,
            );
            skipped_lines.push(record.line_num);
            continue;
        };

        let text = word.text.clone();

        if !dictionary.push(word) {
            warn!(
                "line {}: skipping duplicate word “{}”",
                record.line_num,
                text,
            );
            skipped_lines.push(record.line_num);
        }
    }

    ParseReport { dictionary, skipped_lines }
}

pub fn load_dictionary<P: AsRef<Path>>(
    filename: P,
) -> Result<ParseReport, LoadError> {
    let data = std::fs::read(filename)?;

    let Ok(text) = String::from_utf8(data)
    else {
        return Err(LoadError::InvalidUtf8);
    };

    Ok(parse_dictionary(&text))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::difficulty::Difficulty;

    static WORD_LIST: &str =
        "text,rarity,pos,definition,sentence,avg,ge3,ge4,ge5,e,m,h\n\
         garden,1,noun,\"A plot, of \"\"land\"\"\",\"We dug\n\
         the garden.\",3.5,10,6,2,5,6,4\n\
         \n\
         ,2,noun,nothing,,,,,,,,\n\
         Den, x ,noun,A lair,,bad,1,,,,,\r\n\
         garden,2,verb,To garden,,,,,,,,\n\
         rag";

    #[test]
    fn fields() {
        let report = parse_dictionary(WORD_LIST);
        let dictionary = &report.dictionary;

        assert_eq!(dictionary.len(), 3);

        let garden = dictionary.get("garden").unwrap();
        assert_eq!(garden.rarity, 1);
        assert_eq!(garden.part_of_speech, "noun");
        assert_eq!(garden.definition, "A plot, of \"land\"");
        assert_eq!(garden.example_sentence, "We dug\nthe garden.");
        assert_eq!(garden.avg_sub_length, 3.5);
        assert_eq!(garden.count_ge3, 10);
        assert_eq!(garden.count_ge4, 6);
        assert_eq!(garden.count_ge5, 2);
        assert_eq!(garden.easy_valid_count, 5);
        assert_eq!(garden.medium_valid_count, 6);
        assert_eq!(garden.hard_valid_count, 4);

        let den = dictionary.get("den").unwrap();
        assert_eq!(den.text, "den");
        assert_eq!(den.rarity, 0);
        assert_eq!(den.definition, "A lair");
        assert_eq!(den.avg_sub_length, 0.0);
        assert_eq!(den.count_ge3, 1);
        assert_eq!(den.hard_valid_count, 0);

        let rag = dictionary.get("rag").unwrap();
        assert_eq!(rag.rarity, 0);
        assert_eq!(rag.definition, "");
    }

    #[test]
    fn leading_numbers() {
        let report = parse_dictionary(
            "text,rarity,pos,definition,sentence,avg,ge3,ge4,ge5,e,m,h\n\
             gardens,1.0,noun,,,4.25x,12abc,6.0, 5 ,6.0,4.0,+3\n\
             den,-2,noun,,,.5,,,,,,\n"
        );

        let gardens = report.dictionary.get("gardens").unwrap();
        assert_eq!(gardens.rarity, 1);
        assert_eq!(gardens.avg_sub_length, 4.25);
        assert_eq!(gardens.count_ge3, 12);
        assert_eq!(gardens.count_ge4, 6);
        assert_eq!(gardens.count_ge5, 5);
        assert_eq!(gardens.easy_valid_count, 6);
        assert_eq!(gardens.medium_valid_count, 4);
        assert_eq!(gardens.hard_valid_count, 3);
        assert!(Difficulty::Easy.base_criteria(false).matches(gardens));

        let den = report.dictionary.get("den").unwrap();
        assert_eq!(den.rarity, 0);
        assert_eq!(den.avg_sub_length, 0.5);
    }

    #[test]
    fn skipped_lines() {
        let report = parse_dictionary(WORD_LIST);

        assert_eq!(&report.skipped_lines, &[5, 7]);
    }

    #[test]
    fn header_only() {
        assert!(parse_dictionary("").dictionary.is_empty());
        assert!(parse_dictionary("text,rarity\n").dictionary.is_empty());
        assert!(parse_dictionary("\n\ntext\n\n").dictionary.is_empty());
    }

    #[test]
    fn unterminated_quote() {
        let report = parse_dictionary("text\n\"den,1\nrag,2\n");

        assert_eq!(report.dictionary.len(), 1);
        assert_eq!(report.dictionary.words()[0].text, "den,1\nrag,2");
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            load_dictionary("/this/file/does/not/exist.csv"),
            Err(LoadError::Io(_)),
        ));
    }
}

//!
//! The delimited text encoding.
//!

use std::fmt::Write;

/// The field delimiter.
pub const DELIMITER: char = ',';

/// The quote character.
pub const QUOTE: char = '"';

///
/// Appends one record, quoting only the fields that need it.
///
pub fn write_record<S>(content: &mut String, fields: &[S])
where
    S: AsRef<str>,
{
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            content.push(DELIMITER);
        }
        let field = field.as_ref();
        if field.contains([DELIMITER, QUOTE, '\n', '\r']) {
            write!(content, "{QUOTE}{}{QUOTE}", field.replace(QUOTE, "\"\""))
                .expect("Always valid");
        } else {
            content.push_str(field);
        }
    }
    content.push_str("\r\n");
}

///
/// Splits the text into records of fields.
///
/// Quoted fields may contain delimiters, doubled quotes and line breaks.
/// Both `\n` and `\r\n` end a record, and empty lines are skipped.
///
pub fn parse(text: &str) -> Result<Vec<Vec<String>>, String> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut is_quoted = false;
    let mut is_dirty = false;

    let mut chars = text.chars().peekable();
    while let Some(character) = chars.next() {
        if is_quoted {
            match character {
                QUOTE if chars.peek() == Some(&QUOTE) => {
                    chars.next();
                    field.push(QUOTE);
                }
                QUOTE => is_quoted = false,
                character => field.push(character),
            }
            continue;
        }

        match character {
            QUOTE if field.is_empty() => {
                is_quoted = true;
                is_dirty = true;
            }
            DELIMITER => {
                record.push(std::mem::take(&mut field));
                is_dirty = true;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                if is_dirty || !field.is_empty() {
                    record.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut record));
                }
                is_dirty = false;
            }
            character => {
                field.push(character);
                is_dirty = true;
            }
        }
    }

    if is_quoted {
        return Err("unterminated quoted field".to_owned());
    }
    if is_dirty || !field.is_empty() {
        record.push(field);
        records.push(record);
    }
    Ok(records)
}

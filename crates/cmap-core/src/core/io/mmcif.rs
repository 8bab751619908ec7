use crate::core::io::traits::StructureFile;
use crate::core::models::atom::AtomSiteRecord;
use std::io::{self, BufRead};
use thiserror::Error;

const ATOM_SITE_FIELDS: [&str; 6] = [
    "_atom_site.group_PDB",
    "_atom_site.label_atom_id",
    "_atom_site.label_asym_id",
    "_atom_site.Cartn_x",
    "_atom_site.Cartn_y",
    "_atom_site.Cartn_z",
];

#[derive(Debug, Error)]
pub enum MmcifError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: MmcifParseErrorKind,
    },
    #[error("No data block found in file")]
    MissingDataBlock,
    #[error("Multiple data blocks (second block begins on line {line})")]
    MultipleDataBlocks { line: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MmcifParseErrorKind {
    #[error("Unterminated quoted value")]
    UnterminatedQuote,
    #[error("Unterminated text field (no closing ';')")]
    UnterminatedTextField,
    #[error("Content before the first data block")]
    ContentOutsideBlock,
    #[error("Loop has no column tags")]
    EmptyLoopHeader,
    #[error("Loop body ended mid-row ({found} of {columns} values)")]
    IncompleteLoopRow { columns: usize, found: usize },
    #[error("Data item '{tag}' has no value")]
    MissingPairValue { tag: String },
    #[error("Value '{value}' outside any loop or data item")]
    UnexpectedValue { value: String },
    #[error("Unsupported CIF construct '{token}'")]
    Unsupported { token: String },
}

#[derive(Debug)]
enum Token {
    Data,
    Loop,
    Tag(String),
    Value(String),
    Unsupported(String),
}

fn classify(word: &str) -> Token {
    let lower = word.to_ascii_lowercase();
    if lower.starts_with("data_") {
        Token::Data
    } else if lower == "loop_" {
        Token::Loop
    } else if lower == "global_" || lower == "stop_" || lower.starts_with("save_") {
        Token::Unsupported(word.to_string())
    } else if word.starts_with('_') {
        Token::Tag(word.to_string())
    } else {
        Token::Value(word.to_string())
    }
}

fn scan_line(line: &str, line_num: usize, tokens: &mut Vec<Token>) -> Result<(), MmcifError> {
    let mut rest = line;
    loop {
        rest = rest.trim_start();
        let first = match rest.chars().next() {
            Some(c) => c,
            None => return Ok(()),
        };
        match first {
            '#' => return Ok(()),
            '\'' | '"' => {
                // A quote only closes when followed by whitespace or end of line.
                let body = &rest[first.len_utf8()..];
                let mut iter = body.char_indices().peekable();
                let mut close = None;
                while let Some((idx, ch)) = iter.next() {
                    if ch == first {
                        match iter.peek() {
                            None => {
                                close = Some(idx);
                                break;
                            }
                            Some(&(_, next)) if next.is_whitespace() => {
                                close = Some(idx);
                                break;
                            }
                            _ => {}
                        }
                    }
                }
                match close {
                    Some(idx) => {
                        tokens.push(Token::Value(body[..idx].to_string()));
                        rest = &body[idx + first.len_utf8()..];
                    }
                    None => {
                        return Err(MmcifError::Parse {
                            line: line_num,
                            kind: MmcifParseErrorKind::UnterminatedQuote,
                        });
                    }
                }
            }
            _ => {
                let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
                tokens.push(classify(&rest[..end]));
                rest = &rest[end..];
            }
        }
    }
}

struct LoopState {
    tags: Vec<String>,
    header_line: usize,
    in_header: bool,
    capture: Option<[usize; 6]>,
    values: Vec<String>,
    value_count: usize,
}

impl LoopState {
    fn new(header_line: usize) -> Self {
        Self {
            tags: Vec::new(),
            header_line,
            in_header: true,
            capture: None,
            values: Vec::new(),
            value_count: 0,
        }
    }

    fn close_header(&mut self) -> Result<(), MmcifError> {
        if self.tags.is_empty() {
            return Err(MmcifError::Parse {
                line: self.header_line,
                kind: MmcifParseErrorKind::EmptyLoopHeader,
            });
        }
        self.in_header = false;
        self.capture = find_atom_site_columns(&self.tags);
        Ok(())
    }

    fn push_value(&mut self, value: String) {
        if self.capture.is_some() {
            self.values.push(value);
        }
        self.value_count += 1;
    }
}

fn find_atom_site_columns(tags: &[String]) -> Option<[usize; 6]> {
    let mut columns = [0usize; 6];
    for (slot, field) in ATOM_SITE_FIELDS.iter().enumerate() {
        columns[slot] = tags.iter().position(|t| t.eq_ignore_ascii_case(field))?;
    }
    Some(columns)
}

fn finish_loop(
    state: LoopState,
    records: &mut Vec<AtomSiteRecord>,
    end_line: usize,
) -> Result<(), MmcifError> {
    if state.in_header {
        if state.tags.is_empty() {
            return Err(MmcifError::Parse {
                line: state.header_line,
                kind: MmcifParseErrorKind::EmptyLoopHeader,
            });
        }
        return Ok(());
    }
    let columns = state.tags.len();
    let leftover = state.value_count % columns;
    if leftover != 0 {
        return Err(MmcifError::Parse {
            line: end_line,
            kind: MmcifParseErrorKind::IncompleteLoopRow {
                columns,
                found: leftover,
            },
        });
    }
    if let Some(cols) = state.capture {
        for row in state.values.chunks(columns) {
            records.push(AtomSiteRecord::new(
                &row[cols[0]],
                &row[cols[1]],
                &row[cols[2]],
                &row[cols[3]],
                &row[cols[4]],
                &row[cols[5]],
            ));
        }
    }
    Ok(())
}

/// Reader for mmCIF structure files.
///
/// Only the `_atom_site` loop is extracted; every other loop and data item is
/// validated for well-formedness and discarded. The file must contain exactly
/// one `data_` block.
pub struct MmcifFile;

impl StructureFile for MmcifFile {
    type Error = MmcifError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<AtomSiteRecord>, Self::Error> {
        let mut records = Vec::new();
        let mut tokens: Vec<Token> = Vec::new();

        let mut data_blocks = 0usize;
        let mut current_loop: Option<LoopState> = None;
        let mut pending_tag: Option<String> = None;
        let mut text_field: Option<(String, usize)> = None;
        let mut last_line = 0usize;

        for (line_idx, line_res) in reader.lines().enumerate() {
            let mut line = line_res?;
            let line_num = line_idx + 1;
            last_line = line_num;
            if line_num == 1 && line.starts_with('\u{feff}') {
                line = line.trim_start_matches('\u{feff}').to_string();
            }

            // Semicolon text fields span whole lines and bypass normal tokenization.
            match text_field.take() {
                Some((buffer, _)) if line.starts_with(';') => {
                    tokens.push(Token::Value(buffer));
                    scan_line(&line[1..], line_num, &mut tokens)?;
                }
                Some((mut buffer, start_line)) => {
                    if !buffer.is_empty() {
                        buffer.push('\n');
                    }
                    buffer.push_str(&line);
                    text_field = Some((buffer, start_line));
                    continue;
                }
                None if line.starts_with(';') => {
                    text_field = Some((line[1..].to_string(), line_num));
                    continue;
                }
                None => scan_line(&line, line_num, &mut tokens)?,
            }

            for token in tokens.drain(..) {
                match token {
                    Token::Data => {
                        if let Some(tag) = pending_tag.take() {
                            return Err(MmcifError::Parse {
                                line: line_num,
                                kind: MmcifParseErrorKind::MissingPairValue { tag },
                            });
                        }
                        if let Some(state) = current_loop.take() {
                            finish_loop(state, &mut records, line_num)?;
                        }
                        data_blocks += 1;
                        if data_blocks > 1 {
                            return Err(MmcifError::MultipleDataBlocks { line: line_num });
                        }
                    }
                    Token::Loop => {
                        if data_blocks == 0 {
                            return Err(MmcifError::Parse {
                                line: line_num,
                                kind: MmcifParseErrorKind::ContentOutsideBlock,
                            });
                        }
                        if let Some(tag) = pending_tag.take() {
                            return Err(MmcifError::Parse {
                                line: line_num,
                                kind: MmcifParseErrorKind::MissingPairValue { tag },
                            });
                        }
                        if let Some(state) = current_loop.take() {
                            finish_loop(state, &mut records, line_num)?;
                        }
                        current_loop = Some(LoopState::new(line_num));
                    }
                    Token::Tag(tag) => {
                        if data_blocks == 0 {
                            return Err(MmcifError::Parse {
                                line: line_num,
                                kind: MmcifParseErrorKind::ContentOutsideBlock,
                            });
                        }
                        let in_header = current_loop.as_ref().is_some_and(|s| s.in_header);
                        if in_header {
                            if let Some(state) = &mut current_loop {
                                state.tags.push(tag);
                            }
                        } else {
                            if let Some(state) = current_loop.take() {
                                finish_loop(state, &mut records, line_num)?;
                            }
                            if let Some(prev) = pending_tag.take() {
                                return Err(MmcifError::Parse {
                                    line: line_num,
                                    kind: MmcifParseErrorKind::MissingPairValue { tag: prev },
                                });
                            }
                            pending_tag = Some(tag);
                        }
                    }
                    Token::Value(value) => {
                        if data_blocks == 0 {
                            return Err(MmcifError::Parse {
                                line: line_num,
                                kind: MmcifParseErrorKind::ContentOutsideBlock,
                            });
                        }
                        if let Some(state) = &mut current_loop {
                            if state.in_header {
                                state.close_header()?;
                            }
                            state.push_value(value);
                        } else if pending_tag.is_some() {
                            pending_tag = None;
                        } else {
                            return Err(MmcifError::Parse {
                                line: line_num,
                                kind: MmcifParseErrorKind::UnexpectedValue { value },
                            });
                        }
                    }
                    Token::Unsupported(word) => {
                        return Err(MmcifError::Parse {
                            line: line_num,
                            kind: MmcifParseErrorKind::Unsupported { token: word },
                        });
                    }
                }
            }
        }

        if let Some((_, start_line)) = text_field {
            return Err(MmcifError::Parse {
                line: start_line,
                kind: MmcifParseErrorKind::UnterminatedTextField,
            });
        }
        if let Some(tag) = pending_tag {
            return Err(MmcifError::Parse {
                line: last_line,
                kind: MmcifParseErrorKind::MissingPairValue { tag },
            });
        }
        if let Some(state) = current_loop {
            finish_loop(state, &mut records, last_line)?;
        }
        if data_blocks == 0 {
            return Err(MmcifError::MissingDataBlock);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn read_str(input: &str) -> Result<Vec<AtomSiteRecord>, MmcifError> {
        MmcifFile::read_from(&mut input.as_bytes())
    }

    const REALISTIC_SNIPPET: &str = "\
data_1TST
#
_entry.id   1TST
_struct.title  'A test structure'
#
loop_
_atom_site.group_PDB
_atom_site.id
_atom_site.type_symbol
_atom_site.label_atom_id
_atom_site.label_comp_id
_atom_site.label_asym_id
_atom_site.label_seq_id
_atom_site.Cartn_x
_atom_site.Cartn_y
_atom_site.Cartn_z
_atom_site.occupancy
_atom_site.B_iso_or_equiv
ATOM   1  N  N   MET A 1 16.204 -11.692 31.419 1.00 24.36
ATOM   2  C  CA  MET A 1 17.023 -10.577 32.291 1.00 23.10
ATOM   3  C  C   MET A 1 18.244 -11.169 32.996 1.00 22.58
ATOM   4  C  CA  GLY A 2 20.843 -10.577 32.291 1.00 21.44
HETATM 5  O  O   HOH B 1 30.101 -2.457  38.882 1.00 30.15
ATOM   6  C  CA  ALA B 2 25.188 -3.109  40.102 1.00 20.90
#
";

    #[test]
    fn extracts_all_atom_site_rows_in_file_order() {
        let records = read_str(REALISTIC_SNIPPET).unwrap();
        assert_eq!(records.len(), 6);
        assert_eq!(
            records[1],
            AtomSiteRecord::new("ATOM", "CA", "A", "17.023", "-10.577", "32.291")
        );
        assert_eq!(records[4].group, "HETATM");
        assert_eq!(records[4].chain_id, "B");
        assert_eq!(records[5].atom_name, "CA");
    }

    #[test]
    fn filtering_is_not_the_readers_job() {
        // HETATM and non-CA rows come through as records; selection happens later.
        let records = read_str(REALISTIC_SNIPPET).unwrap();
        assert!(records.iter().any(|r| r.group == "HETATM"));
        assert!(records.iter().any(|r| r.atom_name == "N"));
    }

    #[test]
    fn quoted_values_are_unwrapped() {
        let input = "\
data_q
loop_
_atom_site.group_PDB
_atom_site.label_atom_id
_atom_site.label_asym_id
_atom_site.Cartn_x
_atom_site.Cartn_y
_atom_site.Cartn_z
ATOM 'CA' \"A\" 1.0 2.0 3.0
";
        let records = read_str(input).unwrap();
        assert_eq!(records, vec![AtomSiteRecord::new("ATOM", "CA", "A", "1.0", "2.0", "3.0")]);
    }

    #[test]
    fn null_tokens_pass_through_verbatim() {
        let input = "\
data_n
loop_
_atom_site.group_PDB
_atom_site.label_atom_id
_atom_site.label_asym_id
_atom_site.Cartn_x
_atom_site.Cartn_y
_atom_site.Cartn_z
. CA A ? 2.0 3.0
";
        let records = read_str(input).unwrap();
        assert_eq!(records[0].group, ".");
        assert_eq!(records[0].x, "?");
    }

    #[test]
    fn tag_matching_is_case_insensitive() {
        let input = "\
DATA_CASED
LOOP_
_Atom_Site.Group_PDB
_ATOM_SITE.label_atom_id
_atom_site.LABEL_ASYM_ID
_atom_site.cartn_x
_atom_site.Cartn_Y
_atom_site.Cartn_z
ATOM CA A 1.0 2.0 3.0
";
        let records = read_str(input).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].atom_name, "CA");
    }

    #[test]
    fn rows_may_wrap_across_lines() {
        let input = "\
data_wrap
loop_
_atom_site.group_PDB
_atom_site.label_atom_id
_atom_site.label_asym_id
_atom_site.Cartn_x
_atom_site.Cartn_y
_atom_site.Cartn_z
ATOM CA A
1.0 2.0 3.0
ATOM CA A 4.0
5.0 6.0
";
        let records = read_str(input).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].x, "4.0");
        assert_eq!(records[1].z, "6.0");
    }

    #[test]
    fn comments_are_ignored_mid_line_and_whole_line() {
        let input = "\
data_c
# whole-line comment
loop_
_atom_site.group_PDB
_atom_site.label_atom_id
_atom_site.label_asym_id
_atom_site.Cartn_x
_atom_site.Cartn_y
_atom_site.Cartn_z
ATOM CA A 1.0 2.0 3.0 # trailing comment
";
        let records = read_str(input).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn file_without_atom_site_loop_yields_no_records() {
        let input = "\
data_empty
_entry.id empty
loop_
_citation.id
_citation.title
primary 'Some paper'
";
        assert!(read_str(input).unwrap().is_empty());
    }

    #[test]
    fn atom_site_loop_missing_a_required_tag_yields_no_records() {
        let input = "\
data_partial
loop_
_atom_site.group_PDB
_atom_site.label_atom_id
_atom_site.label_asym_id
_atom_site.Cartn_x
_atom_site.Cartn_y
ATOM CA A 1.0 2.0
";
        assert!(read_str(input).unwrap().is_empty());
    }

    #[test]
    fn semicolon_text_fields_in_other_items_are_consumed() {
        let input = "\
data_t
_struct.pdbx_descriptor
;A long description
spanning two lines
;
loop_
_atom_site.group_PDB
_atom_site.label_atom_id
_atom_site.label_asym_id
_atom_site.Cartn_x
_atom_site.Cartn_y
_atom_site.Cartn_z
ATOM CA A 1.0 2.0 3.0
";
        let records = read_str(input).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn empty_input_reports_missing_data_block() {
        assert!(matches!(read_str(""), Err(MmcifError::MissingDataBlock)));
        assert!(matches!(
            read_str("# only a comment\n"),
            Err(MmcifError::MissingDataBlock)
        ));
    }

    #[test]
    fn second_data_block_is_rejected_with_its_line() {
        let input = "data_one\n_entry.id one\ndata_two\n";
        match read_str(input) {
            Err(MmcifError::MultipleDataBlocks { line }) => assert_eq!(line, 3),
            other => panic!("expected MultipleDataBlocks, got {:?}", other),
        }
    }

    #[test]
    fn garbage_before_first_block_is_a_parse_error() {
        match read_str("hello world\ndata_x\n") {
            Err(MmcifError::Parse { line, kind }) => {
                assert_eq!(line, 1);
                assert_eq!(kind, MmcifParseErrorKind::ContentOutsideBlock);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn incomplete_loop_row_is_a_parse_error() {
        let input = "\
data_bad
loop_
_atom_site.group_PDB
_atom_site.label_atom_id
_atom_site.label_asym_id
_atom_site.Cartn_x
_atom_site.Cartn_y
_atom_site.Cartn_z
ATOM CA A 1.0 2.0
";
        match read_str(input) {
            Err(MmcifError::Parse { kind, .. }) => {
                assert_eq!(
                    kind,
                    MmcifParseErrorKind::IncompleteLoopRow {
                        columns: 6,
                        found: 5
                    }
                );
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn unterminated_quote_is_a_parse_error() {
        let input = "data_q\n_struct.title 'no closing quote\n";
        match read_str(input) {
            Err(MmcifError::Parse { line, kind }) => {
                assert_eq!(line, 2);
                assert_eq!(kind, MmcifParseErrorKind::UnterminatedQuote);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn unterminated_text_field_reports_its_opening_line() {
        let input = "data_t\n_struct.pdbx_descriptor\n;never closed\n";
        match read_str(input) {
            Err(MmcifError::Parse { line, kind }) => {
                assert_eq!(line, 3);
                assert_eq!(kind, MmcifParseErrorKind::UnterminatedTextField);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn data_item_without_value_is_a_parse_error() {
        match read_str("data_p\n_entry.id\n") {
            Err(MmcifError::Parse { kind, .. }) => {
                assert_eq!(
                    kind,
                    MmcifParseErrorKind::MissingPairValue {
                        tag: "_entry.id".to_string()
                    }
                );
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn save_frames_are_rejected() {
        match read_str("data_d\nsave_frame\n") {
            Err(MmcifError::Parse { kind, .. }) => {
                assert!(matches!(kind, MmcifParseErrorKind::Unsupported { .. }));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn read_from_path_roundtrip_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("structure.cif");
        std::fs::File::create(&path).unwrap().write_all(REALISTIC_SNIPPET.as_bytes()).unwrap();

        let records = MmcifFile::read_from_path(&path).unwrap();
        assert_eq!(records.len(), 6);

        let missing = MmcifFile::read_from_path(dir.path().join("nope.cif"));
        assert!(matches!(missing, Err(MmcifError::Io(_))));
    }
}

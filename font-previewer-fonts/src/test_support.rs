//! Synthetic fonts for tests.
//!
//! Builds a minimal sfnt (TrueType flavoured) in memory containing a
//! `cmap` format 12 subtable, a `name` table and stub `head`/`maxp` tables.
//! Format 12 covers the full 21-bit code point space, so fonts with
//! supplementary-plane glyphs can be described exactly.

use std::ops::Range;

/// Builder for an in-memory test font.
#[derive(Debug, Clone)]
pub struct TestFontBuilder {
    family: Option<String>,
    code_points: Vec<u32>,
    broken_cmap: bool,
    format_tag: [u8; 4],
}

impl TestFontBuilder {
    /// A font named `family` with no mapped code points yet.
    pub fn new(family: &str) -> Self {
        Self {
            family: Some(family.to_string()),
            code_points: Vec::new(),
            broken_cmap: false,
            format_tag: [0, 1, 0, 0],
        }
    }

    /// A font whose `name` table is missing entirely.
    pub fn unnamed() -> Self {
        Self {
            family: None,
            ..Self::new("")
        }
    }

    pub fn with_code_points(mut self, code_points: impl IntoIterator<Item = u32>) -> Self {
        self.code_points.extend(code_points);
        self
    }

    pub fn with_range(self, range: Range<u32>) -> Self {
        self.with_code_points(range)
    }

    /// Point the cmap encoding record past the end of the table.
    pub fn with_broken_cmap(mut self) -> Self {
        self.broken_cmap = true;
        self
    }

    /// Use the `OTTO` (CFF flavoured) sfnt version tag.
    pub fn with_opentype_tag(mut self) -> Self {
        self.format_tag = *b"OTTO";
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut code_points = self.code_points.clone();
        code_points.sort_unstable();
        code_points.dedup();

        let mut tables: Vec<([u8; 4], Vec<u8>)> = vec![
            (*b"cmap", self.cmap_table(&code_points)),
            (*b"head", head_table()),
            (*b"maxp", maxp_table(code_points.len() as u16 + 1)),
        ];
        if let Some(family) = &self.family {
            tables.push((*b"name", name_table(family)));
        }
        tables.sort_by(|a, b| a.0.cmp(&b.0));

        assemble(self.format_tag, &tables)
    }

    fn cmap_table(&self, code_points: &[u32]) -> Vec<u8> {
        let mut out = Vec::new();
        push_u16(&mut out, 0); // version
        push_u16(&mut out, 1); // numTables
        push_u16(&mut out, 3); // platform: Windows
        push_u16(&mut out, 10); // encoding: Unicode full repertoire
        if self.broken_cmap {
            push_u32(&mut out, 0x00FF_FFF0);
            return out;
        }
        push_u32(&mut out, 12); // subtable offset

        let groups = sequential_groups(code_points);
        push_u16(&mut out, 12); // format
        push_u16(&mut out, 0); // reserved
        push_u32(&mut out, 16 + 12 * groups.len() as u32); // length
        push_u32(&mut out, 0); // language
        push_u32(&mut out, groups.len() as u32);
        for (start, end, glyph) in groups {
            push_u32(&mut out, start);
            push_u32(&mut out, end);
            push_u32(&mut out, glyph);
        }
        out
    }
}

/// Collapse sorted code points into `(start, end, start_glyph)` groups,
/// assigning glyph ids from 1 in code point order.
fn sequential_groups(code_points: &[u32]) -> Vec<(u32, u32, u32)> {
    let mut groups: Vec<(u32, u32, u32)> = Vec::new();
    for (index, &cp) in code_points.iter().enumerate() {
        let glyph = index as u32 + 1;
        match groups.last_mut() {
            Some(last) if last.1 + 1 == cp => last.1 = cp,
            _ => groups.push((cp, cp, glyph)),
        }
    }
    groups
}

fn name_table(family: &str) -> Vec<u8> {
    let postscript: String = family.chars().filter(|c| !c.is_whitespace()).collect();
    let records = [
        (1u16, family.to_string()),
        (2, "Regular".to_string()),
        (4, format!("{family} Regular")),
        (6, format!("{postscript}-Regular")),
    ];

    let mut storage = Vec::new();
    let mut out = Vec::new();
    push_u16(&mut out, 0); // format
    push_u16(&mut out, records.len() as u16);
    push_u16(&mut out, 6 + 12 * records.len() as u16); // string storage offset
    for (name_id, text) in &records {
        let encoded: Vec<u8> = text.encode_utf16().flat_map(u16::to_be_bytes).collect();
        push_u16(&mut out, 3); // platform: Windows
        push_u16(&mut out, 1); // encoding: Unicode BMP
        push_u16(&mut out, 0x0409); // language: en-US
        push_u16(&mut out, *name_id);
        push_u16(&mut out, encoded.len() as u16);
        push_u16(&mut out, storage.len() as u16);
        storage.extend_from_slice(&encoded);
    }
    out.extend_from_slice(&storage);
    out
}

fn head_table() -> Vec<u8> {
    let mut out = Vec::new();
    push_u32(&mut out, 0x0001_0000); // version
    push_u32(&mut out, 0x0001_0000); // fontRevision
    push_u32(&mut out, 0); // checkSumAdjustment
    push_u32(&mut out, 0x5F0F_3CF5); // magicNumber
    push_u16(&mut out, 0); // flags
    push_u16(&mut out, 1000); // unitsPerEm
    out.extend_from_slice(&[0; 16]); // created, modified
    out.extend_from_slice(&[0; 8]); // xMin, yMin, xMax, yMax
    push_u16(&mut out, 0); // macStyle
    push_u16(&mut out, 8); // lowestRecPPEM
    push_u16(&mut out, 2); // fontDirectionHint
    push_u16(&mut out, 0); // indexToLocFormat
    push_u16(&mut out, 0); // glyphDataFormat
    out
}

fn maxp_table(num_glyphs: u16) -> Vec<u8> {
    let mut out = Vec::new();
    push_u32(&mut out, 0x0000_5000); // version 0.5
    push_u16(&mut out, num_glyphs);
    out
}

fn assemble(sfnt_version: [u8; 4], tables: &[([u8; 4], Vec<u8>)]) -> Vec<u8> {
    let num_tables = tables.len() as u16;
    let entry_selector = 15 - num_tables.max(1).leading_zeros() as u16;
    let search_range = (1u16 << entry_selector) * 16;

    let mut out = Vec::new();
    out.extend_from_slice(&sfnt_version);
    push_u16(&mut out, num_tables);
    push_u16(&mut out, search_range);
    push_u16(&mut out, entry_selector);
    push_u16(&mut out, num_tables * 16 - search_range);

    let mut offset = 12 + 16 * tables.len();
    let mut body = Vec::new();
    for (tag, data) in tables {
        out.extend_from_slice(tag);
        push_u32(&mut out, checksum(data));
        push_u32(&mut out, offset as u32);
        push_u32(&mut out, data.len() as u32);

        body.extend_from_slice(data);
        while body.len() % 4 != 0 {
            body.push(0);
        }
        offset = 12 + 16 * tables.len() + body.len();
    }
    out.extend_from_slice(&body);
    out
}

fn checksum(data: &[u8]) -> u32 {
    data.chunks(4).fold(0u32, |sum, chunk| {
        let mut word = [0u8; 4];
        word[..chunk.len()].copy_from_slice(chunk);
        sum.wrapping_add(u32::from_be_bytes(word))
    })
}

fn push_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn push_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_be_bytes());
}

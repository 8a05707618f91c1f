//! Byte offset to public offset conversion.

use stree_core::OffsetEncoding;

/// Maps tree-sitter byte offsets onto the configured offset unit.
///
/// Stores one anchor after every non-ASCII character; everything between two
/// anchors is ASCII, so a lookup is a binary search plus a subtraction.
/// ASCII documents and byte encoding need no anchors at all.
#[derive(Debug, Clone)]
pub struct OffsetIndex {
  /// `(byte offset, unit offset)` pairs, sorted by both
  anchors: Vec<(usize, usize)>,
  len: usize,
}

impl OffsetIndex {
  pub fn new(text: &str, encoding: OffsetEncoding) -> Self {
    let mut anchors = vec![(0, 0)];

    if encoding != OffsetEncoding::Utf8 && !text.is_ascii() {
      let mut units = 0;
      let mut last_byte = 0;
      for (byte, c) in text.char_indices() {
        if c.is_ascii() {
          continue;
        }
        units += byte - last_byte;
        units += encoding.width(c);
        last_byte = byte + c.len_utf8();
        anchors.push((last_byte, units));
      }
    }

    let mut index = Self { anchors, len: 0 };
    index.len = index.to_units(text.len());
    index
  }

  /// Convert a byte offset that lies on a character boundary.
  pub fn to_units(&self, byte: usize) -> usize {
    let at = self.anchors.partition_point(|&(b, _)| b <= byte);
    // The first anchor is (0, 0), so `at` is never zero.
    let (anchor_byte, anchor_units) = self.anchors[at.saturating_sub(1)];
    anchor_units + (byte - anchor_byte)
  }

  /// Document length in units.
  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }
}

//! Physical table definition and cell key encoding for the redb backend.
//!
//! Redb requires static table names, so all stores of one manager share a
//! single physical table and the store name is folded into the physical key.
//!
//! # Physical key layout
//!
//! ```text
//! [store name][0x00][key length as big-endian u32][key][column]
//! ```
//!
//! Store names must not contain the separator byte. The fixed-width length
//! prefix makes the encoding unambiguous to decode, keeps all cells of one
//! logical key contiguous, and orders the columns within a key bytewise -
//! exactly the slice-query comparator. Keys of one store group by
//! (length, bytes), which is an acceptable implementation-defined order for
//! key scans.

use redb::TableDefinition;

/// The single physical table holding every store's cells.
pub const DATA_TABLE: TableDefinition<'static, &[u8], &[u8]> = TableDefinition::new("rook_cells");

/// Separator byte between the store name and the rest of the physical key.
pub const NAME_SEPARATOR: u8 = 0x00;

/// Encode the physical-key prefix shared by every cell of one logical key.
pub fn key_prefix(store: &str, key: &[u8]) -> Vec<u8> {
    let mut prefix = Vec::with_capacity(store.len() + 5 + key.len());
    prefix.extend_from_slice(store.as_bytes());
    prefix.push(NAME_SEPARATOR);
    // Keys anywhere near u32::MAX bytes are unstorable in redb to begin with.
    #[allow(clippy::cast_possible_truncation)]
    let key_len = key.len() as u32;
    prefix.extend_from_slice(&key_len.to_be_bytes());
    prefix.extend_from_slice(key);
    prefix
}

/// Encode the full physical key of one cell.
pub fn encode_cell(store: &str, key: &[u8], column: &[u8]) -> Vec<u8> {
    let mut cell = key_prefix(store, key);
    cell.extend_from_slice(column);
    cell
}

/// Decode the logical (key, column) of a physical key belonging to `store`.
///
/// Returns `None` if the physical key is malformed or belongs to another
/// store.
pub fn decode_cell<'a>(store: &str, physical: &'a [u8]) -> Option<(&'a [u8], &'a [u8])> {
    let rest = physical.strip_prefix(store.as_bytes())?;
    let rest = rest.strip_prefix(&[NAME_SEPARATOR])?;
    let (len_bytes, rest) = rest.split_first_chunk::<4>()?;
    let key_len = u32::from_be_bytes(*len_bytes) as usize;
    if rest.len() < key_len {
        return None;
    }
    Some(rest.split_at(key_len))
}

/// First physical key that could belong to `store`.
pub fn store_start(store: &str) -> Vec<u8> {
    let mut start = Vec::with_capacity(store.len() + 1);
    start.extend_from_slice(store.as_bytes());
    start.push(NAME_SEPARATOR);
    start
}

/// First physical key past everything belonging to `store`.
pub fn store_end(store: &str) -> Vec<u8> {
    let mut end = Vec::with_capacity(store.len() + 1);
    end.extend_from_slice(store.as_bytes());
    end.push(NAME_SEPARATOR + 1);
    end
}

/// Smallest byte string strictly greater than every string starting with
/// `prefix`, or `None` if no such string exists (all bytes are `0xFF`).
pub fn prefix_successor(prefix: &[u8]) -> Option<Vec<u8>> {
    let last_incrementable = prefix.iter().rposition(|&b| b != 0xFF)?;
    let mut successor = prefix[..=last_incrementable].to_vec();
    successor[last_incrementable] += 1;
    Some(successor)
}

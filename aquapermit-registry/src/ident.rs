//! Public identifier generation for water points and permits
//!
//! Identifiers are shown to operators and printed on permit documents, so
//! they are short and human-readable: a kind prefix, five random ASCII
//! letters and a five-digit number, e.g. `AP-kXbqw-51382`. Uniqueness is
//! the registry's job; this module only produces candidates.

use rand::Rng;

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Generate a candidate identifier with the given prefix.
pub fn generate(prefix: &str) -> String {
    let mut rng = rand::thread_rng();

    let letters: String = (0..5)
        .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
        .collect();
    let number: u32 = rng.gen_range(10_000..=99_999);

    format!("{prefix}-{letters}-{number}")
}

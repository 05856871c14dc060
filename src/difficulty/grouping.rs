//! Readability grouping for digit strings.
//!
//! Grouping only inserts separators; it never changes, drops, or reorders a
//! digit, so stripping the separators gives back the input exactly.

/// Separator placed between groups.
pub const SEPARATOR: char = ' ';

/// Group sizes used for a string of `len` digits.
///
/// | length | grouping |
/// |---|---|
/// | 6 | 3+3 |
/// | 7 | 3+4 |
/// | 8 | 4+4 |
/// | 9 | 3+3+3 |
/// | 10 | 3+3+4 |
/// | >10 | 4s from the left, remainder last |
///
/// Anything shorter than six is left as a single group.
pub fn group_sizes(len: usize) -> Vec<usize> {
    match len {
        0 => Vec::new(),
        6 => vec![3, 3],
        7 => vec![3, 4],
        8 => vec![4, 4],
        9 => vec![3, 3, 3],
        10 => vec![3, 3, 4],
        n if n > 10 => {
            let mut sizes = vec![4; n / 4];
            if n % 4 != 0 {
                sizes.push(n % 4);
            }
            sizes
        }
        n => vec![n],
    }
}

/// Insert separators into `digits` according to its length.
///
/// ```rust
/// use recall::difficulty::group;
///
/// assert_eq!(group("482910"), "482 910");
/// assert_eq!(group("1234567890"), "123 456 7890");
/// assert_eq!(group("12345678901"), "1234 5678 901");
/// ```
pub fn group(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::with_capacity(chars.len() * 2);
    let mut start = 0;

    for size in group_sizes(chars.len()) {
        if start > 0 {
            out.push(SEPARATOR);
        }
        out.extend(&chars[start..start + size]);
        start += size;
    }

    out
}

/// Remove the separators that [`group`] inserted.
pub fn ungroup(grouped: &str) -> String {
    grouped.chars().filter(|c| *c != SEPARATOR).collect()
}

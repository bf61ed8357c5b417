/// Split `s` at the first occurrence of `c`, dropping the separator.
/// If `c` does not occur, the whole slice is returned as the first half.
pub(crate) fn split_once<'a>(s: &'a [u8], c: &u8) -> (&'a [u8], &'a [u8]) {
    match s.iter().position(|b| b == c) {
        Some(n) => (&s[0..n], &s[n + 1..]),
        None => (s, &[]),
    }
}

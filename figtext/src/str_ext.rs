use crate::font::ENDMARKS;

pub(crate) trait BStrExt {
    /// True if the last `run` bytes are all the same endmark. Never true for `run == 0` or a line
    /// shorter than `run`.
    fn ends_with_endmark_run(&self, run: usize) -> bool;
    fn without_suffix(&self, len: usize) -> &[u8];
    fn trim_end_blanks(&self) -> &[u8];
}

impl BStrExt for [u8] {
    fn ends_with_endmark_run(&self, run: usize) -> bool {
        if run == 0 || self.len() < run {
            return false;
        }
        let tail = &self[self.len() - run..];
        ENDMARKS.iter().any(|&mark| tail.iter().all(|&c| c == mark))
    }

    fn without_suffix(&self, len: usize) -> &[u8] {
        &self[..self.len().saturating_sub(len)]
    }

    fn trim_end_blanks(&self) -> &[u8] {
        let end = self.iter().rposition(|&c| c != b' ').map_or(0, |i| i + 1);
        &self[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::BStrExt as _;

    #[test]
    fn endmark_runs() {
        assert!(b"XX@".ends_with_endmark_run(1));
        assert!(!b"XX@".ends_with_endmark_run(2));
        assert!(b"YY@@".ends_with_endmark_run(2));
        assert!(b"YY##".ends_with_endmark_run(2));
        assert!(b"$$".ends_with_endmark_run(2));
        assert!(!b"Y#@".ends_with_endmark_run(2));
        assert!(!b"@".ends_with_endmark_run(2));
        assert!(!b"".ends_with_endmark_run(1));
        assert!(!b"abc".ends_with_endmark_run(0));
    }

    #[test]
    fn trimming() {
        assert_eq!(b"ab  ".trim_end_blanks(), b"ab");
        assert_eq!(b"  a\t ".trim_end_blanks(), b"  a\t");
        assert_eq!(b"   ".trim_end_blanks(), b"");
        assert_eq!(b"XX@".without_suffix(1), b"XX");
        assert_eq!(b"@".without_suffix(2), b"");
    }
}

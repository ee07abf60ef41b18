use shared::domain::Chapter;

const WORD_BITS: usize = u64::BITS as usize;

/// Verse totals reachable from each catalogue position onwards.
///
/// Row `i` has bit `t` set when some subset of `chapters[i..]` sums to
/// exactly `t` verses. Totals above `cap` are not tracked.
#[derive(Debug, Clone)]
pub struct ReachTable {
    cap: usize,
    words_per_row: usize,
    bits: Vec<u64>,
}

impl ReachTable {
    pub fn build(chapters: &[Chapter], cap: u32) -> Self {
        let cap = cap as usize;
        let words_per_row = cap / WORD_BITS + 1;
        let rows = chapters.len() + 1;
        let mut bits = vec![0u64; rows * words_per_row];

        // the empty selection
        bits[chapters.len() * words_per_row] = 1;

        for (position, chapter) in chapters.iter().enumerate().rev() {
            let (head, tail) = bits.split_at_mut((position + 1) * words_per_row);
            let next = &tail[..words_per_row];
            let row = &mut head[position * words_per_row..];
            row.copy_from_slice(next);
            or_shifted(row, next, chapter.verses as usize);
        }

        Self {
            cap,
            words_per_row,
            bits,
        }
    }

    /// Whether a subset of `chapters[start..]` sums to some total in `lo..=hi`.
    pub fn any_in(&self, start: usize, lo: u32, hi: u32) -> bool {
        let rows = self.bits.len() / self.words_per_row;
        if start >= rows {
            return false;
        }
        let hi = (hi as usize).min(self.cap);
        let row = &self.bits[start * self.words_per_row..(start + 1) * self.words_per_row];
        (lo as usize..=hi).any(|total| (row[total / WORD_BITS] >> (total % WORD_BITS)) & 1 == 1)
    }
}

/// `dst |= src << shift`, dropping bits past the end of `dst`.
fn or_shifted(dst: &mut [u64], src: &[u64], shift: usize) {
    let word_shift = shift / WORD_BITS;
    let bit_shift = shift % WORD_BITS;
    for index in word_shift..dst.len() {
        let from = index - word_shift;
        let mut word = src[from] << bit_shift;
        if bit_shift != 0 && from > 0 {
            word |= src[from - 1] >> (WORD_BITS - bit_shift);
        }
        dst[index] |= word;
    }
}

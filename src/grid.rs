use anyhow::{bail, Result};

use crate::topology::{CELLS, TOPOLOGY};

pub type Digit = u8; // 1..=9

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub r: usize,
    pub c: usize,
}

impl Pos {
    pub fn idx(self) -> usize {
        self.r * 9 + self.c
    }

    pub fn from_idx(i: usize) -> Self {
        Self { r: i / 9, c: i % 9 }
    }
}

#[inline]
pub const fn all_candidates() -> u16 {
    0b11_1111_1110 // bits 1..=9 set
}

#[inline]
pub const fn digit_mask(d: Digit) -> u16 {
    1 << d
}

pub fn bitcount(m: u16) -> u32 {
    m.count_ones()
}

pub fn first_digit(m: u16) -> Option<Digit> {
    if m == 0 {
        None
    } else {
        Some(m.trailing_zeros() as Digit)
    }
}

/// Digits of a candidate mask in increasing order.
pub fn digits_of(m: u16) -> impl Iterator<Item = Digit> {
    (1..=9).filter(move |&d| m & digit_mask(d) != 0)
}

/// Candidate-set board: one 9-bit mask per cell, bit d meaning digit d is
/// still admissible. A cell with exactly one bit is solved; a cell with no
/// bits marks a contradiction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub(crate) cands: [u16; CELLS],
}

impl Grid {
    pub fn empty() -> Self {
        Self { cands: [all_candidates(); CELLS] }
    }

    /// Parse an 81-char compact grid: '1'..'9' for givens, '.' or '0' for
    /// blanks. A given becomes a singleton mask; propagation does the rest.
    pub fn from_compact(s: &str) -> Result<Self> {
        if s.len() != 81 {
            bail!("compact grid must be 81 chars (got {})", s.len())
        }
        let mut g = Grid::empty();
        for (i, ch) in s.chars().enumerate() {
            match ch {
                '.' | '0' => {}
                '1'..='9' => g.cands[i] = digit_mask(ch as u8 - b'0'),
                _ => bail!("invalid char {ch} at position {i}"),
            }
        }
        Ok(g)
    }

    pub fn to_compact(&self) -> String {
        self.cands
            .iter()
            .map(|&m| match first_digit(m) {
                Some(d) if bitcount(m) == 1 => (b'0' + d) as char,
                _ => '.',
            })
            .collect()
    }

    pub fn to_pretty_string(&self) -> String {
        let mut s = String::new();
        for r in 0..9 {
            if r % 3 == 0 {
                s.push_str("+-------+-------+-------+\n");
            }
            for c in 0..9 {
                if c % 3 == 0 {
                    s.push('|');
                    s.push(' ');
                }
                match self.digit(Pos { r, c }) {
                    Some(d) => s.push((b'0' + d) as char),
                    None => s.push('·'),
                }
                s.push(' ');
            }
            s.push('|');
            s.push('\n');
        }
        s.push_str("+-------+-------+-------+\n");
        s
    }

    /// Read-only candidate view for external renderers, e.g. "137".
    pub fn candidates_string(&self, p: Pos) -> String {
        digits_of(self.cands[p.idx()])
            .map(|d| (b'0' + d) as char)
            .collect()
    }

    pub fn candidates(&self, p: Pos) -> u16 {
        self.cands[p.idx()]
    }

    /// The cell's digit if solved, None while still ambiguous (or empty).
    pub fn digit(&self, p: Pos) -> Option<Digit> {
        let m = self.cands[p.idx()];
        if bitcount(m) == 1 {
            first_digit(m)
        } else {
            None
        }
    }

    pub fn remove_candidate(&mut self, p: Pos, d: Digit) {
        self.cands[p.idx()] &= !digit_mask(d);
    }

    /// Collapse a cell to a single digit. Used when branching in search.
    pub fn force(&mut self, p: Pos, d: Digit) {
        self.cands[p.idx()] = digit_mask(d);
    }

    pub fn is_solved(&self) -> bool {
        self.cands.iter().all(|&m| bitcount(m) == 1)
    }

    pub fn has_contradiction(&self) -> bool {
        self.cands.iter().any(|&m| m == 0)
    }

    pub fn solved_count(&self) -> usize {
        self.cands.iter().filter(|&&m| bitcount(m) == 1).count()
    }

    /// No unit holds the same solved digit twice; a fully solved valid grid
    /// therefore has 1..=9 exactly once per row, column, box and diagonal.
    pub fn is_valid(&self) -> bool {
        for unit in &TOPOLOGY.units {
            let mut seen = 0u16;
            for &cell in unit {
                let m = self.cands[cell];
                if bitcount(m) == 1 {
                    if seen & m != 0 {
                        return false;
                    }
                    seen |= m;
                }
            }
        }
        true
    }

    pub fn cells() -> impl Iterator<Item = Pos> {
        (0..CELLS).map(Pos::from_idx)
    }
}

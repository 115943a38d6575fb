//! A square bitboard whose side length is chosen at runtime.
//!
//! The type is `no_std` friendly and avoids heap allocations. Boards are
//! represented as an `N×N` grid packed into an unsigned integer `T`, with
//! `N` fixed when the board is created. Only boards of the same dimension
//! should be combined with the bitwise operators.

use core::ops::{BitAnd, BitOr, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board size N*N exceeds capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(
                    f,
                    "SizeTooLarge: N*N={} exceeds T::BITS={}",
                    n.saturating_mul(*n),
                    capacity
                )
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// An N×N bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    dim: usize,
}

impl<T> BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of bits available in `T`.
    pub const CAPACITY: usize = mem::size_of::<T>() * 8;

    /// Largest side length that fits into `T`.
    pub fn max_dimension() -> usize {
        let mut n = 0;
        while (n + 1) * (n + 1) <= Self::CAPACITY {
            n += 1;
        }
        n
    }

    #[inline]
    fn mask(&self) -> T {
        let used = self.dim * self.dim;
        if used == Self::CAPACITY {
            !T::zero()
        } else {
            (T::one() << used) - T::one()
        }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if N*N > T::BITS.
    pub fn try_new(dim: usize) -> Result<Self, BitBoardError> {
        if dim.checked_mul(dim).map_or(true, |bits| bits > Self::CAPACITY) {
            Err(BitBoardError::SizeTooLarge {
                n: dim,
                capacity: Self::CAPACITY,
            })
        } else {
            Ok(BitBoard {
                bits: T::zero(),
                dim,
            })
        }
    }

    /// Side length of the board.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// Returns the number of set bits (occupied cells).
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        let idx = self.index(row, col)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = self.index(row, col)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clears the bit at (row, col) to 0.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = self.index(row, col)?;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    /// Clears all bits to `0`.
    #[inline]
    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, BitBoardError> {
        if row >= self.dim || col >= self.dim {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * self.dim + col)
        }
    }

    /// Creates a `dim`×`dim` bitboard from an iterator over `(row, col)` positions.
    pub fn from_cells<I>(dim: usize, iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::try_new(dim)?;
        for (r, c) in iter {
            board.set(r, c)?;
        }
        Ok(board)
    }

    /// Iterator over the set bits of the board in row-major order.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T> {
        SetBits {
            board: self,
            idx: 0,
        }
    }
}

impl<T> fmt::Debug for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard {}x{}:", self.dim, self.dim)?;
        for r in 0..self.dim {
            for c in 0..self.dim {
                let bit = if self.get(r, c).unwrap_or(false) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set bits of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T>,
    idx: usize,
}

impl<T> Iterator for SetBits<'_, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let n = self.board.dim;
        while self.idx < n * n {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / n, idx % n));
            }
        }
        None
    }
}

/// Bitwise AND for combining two bitboards of the same dimension.
impl<T> BitAnd for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        debug_assert_eq!(self.dim, rhs.dim);
        BitBoard {
            bits: self.bits & rhs.bits,
            dim: self.dim,
        }
    }
}

/// Bitwise OR for combining two bitboards of the same dimension.
impl<T> BitOr for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        debug_assert_eq!(self.dim, rhs.dim);
        BitBoard {
            bits: self.bits | rhs.bits,
            dim: self.dim,
        }
    }
}

/// Bitwise NOT for inverting a bitboard (within board bounds).
impl<T> Not for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        let mask = self.mask();
        BitBoard {
            bits: !self.bits & mask,
            dim: self.dim,
        }
    }
}

//! Generic sequence type.
//!
//! [`Seq<A>`] is a newtype over `Vec<A::Monomer>` parameterized by an
//! [`Alphabet`] marker type. Sequences are immutable values: every operation
//! that produces a sequence allocates a new one, so a `&Seq` can be shared
//! across threads freely.
//!
//! Search operations ([`Seq::contains`], [`Seq::count`], [`Seq::find`]) take
//! any [`Pattern`]: a single code, another sequence, or a slice of codes.
//! Matching is positional and exact; an ambiguity code only matches the same
//! ambiguity code.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, Deref};

use haem_core::{HaemError, Result, Summarizable, Unordered};

use crate::alphabet::{Alphabet, Monomer};

/// Sequences longer than this are abbreviated by `Display`.
const DISPLAY_LIMIT: usize = 20;
const DISPLAY_HEAD: usize = 10;
const DISPLAY_TAIL: usize = 9;

/// Something that can be searched for in a sequence.
pub trait Pattern<T> {
    /// The codes to match, in order.
    fn members(&self) -> &[T];
}

impl<T: Monomer> Pattern<T> for [T] {
    fn members(&self) -> &[T] {
        self
    }
}

impl<T: Monomer, const N: usize> Pattern<T> for [T; N] {
    fn members(&self) -> &[T] {
        self
    }
}

impl<T: Monomer> Pattern<T> for Vec<T> {
    fn members(&self) -> &[T] {
        self
    }
}

/// A biological sequence parameterized by its alphabet.
///
/// `Seq<DnaAlphabet>` is a DNA sequence, `Seq<RnaAlphabet>` is RNA, etc.
/// See [`crate::types`] for the aliases.
pub struct Seq<A: Alphabet> {
    data: Vec<A::Monomer>,
    _alphabet: PhantomData<A>,
}

impl<A: Alphabet> Seq<A> {
    /// Decode a sequence from its code string.
    ///
    /// Stops at the first character outside the alphabet and returns its
    /// decode error.
    pub fn new(codes: &str) -> Result<Self> {
        Self::from_codes(codes.chars())
    }

    /// Decode a sequence from individual code characters.
    pub fn from_codes<I: IntoIterator<Item = char>>(codes: I) -> Result<Self> {
        let data = codes
            .into_iter()
            .map(A::Monomer::from_code)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_members(data))
    }

    /// The empty sequence.
    pub fn empty() -> Self {
        Self::from_members(Vec::new())
    }

    fn from_members(data: Vec<A::Monomer>) -> Self {
        Self {
            data,
            _alphabet: PhantomData,
        }
    }

    /// Borrow the codes.
    pub fn as_slice(&self) -> &[A::Monomer] {
        &self.data
    }

    /// Consume the sequence and return the inner code vector.
    pub fn into_vec(self) -> Vec<A::Monomer> {
        self.data
    }

    /// Truth value: `false` only for the empty sequence.
    pub fn is_truthy(&self) -> bool {
        !self.data.is_empty()
    }

    /// The code at `index`; negative indices count from the end.
    pub fn at(&self, index: isize) -> Result<A::Monomer> {
        let len = self.data.len() as isize;
        let resolved = if index < 0 { index + len } else { index };
        if resolved < 0 || resolved >= len {
            return Err(HaemError::IndexOutOfRange {
                type_name: A::SEQUENCE_NAME,
            });
        }
        Ok(self.data[resolved as usize])
    }

    /// Extended slice with `start`, `stop` and `step`.
    ///
    /// Omitted bounds default to the ends in the direction of travel, negative
    /// bounds count from the end, and out-of-range bounds are clamped. A
    /// negative step walks backwards. Only a zero step is an error.
    pub fn slice(
        &self,
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
    ) -> Result<Self> {
        let step = step.unwrap_or(1);
        if step == 0 {
            return Err(HaemError::ZeroSliceStep);
        }

        let len = self.data.len() as isize;
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };
        let clamp = |bound: isize| {
            if bound < 0 {
                (bound + len).max(lower)
            } else {
                bound.min(upper)
            }
        };
        let start = start.map_or(if step < 0 { upper } else { lower }, clamp);
        let stop = stop.map_or(if step < 0 { lower } else { upper }, clamp);

        let mut data = Vec::new();
        let mut i = start;
        while (step > 0 && i < stop) || (step < 0 && i > stop) {
            data.push(self.data[i as usize]);
            // Overflow means the next index is past either end.
            match i.checked_add(step) {
                Some(next) => i = next,
                None => break,
            }
        }
        Ok(Self::from_members(data))
    }

    /// Whether `pattern` occurs as a contiguous run.
    ///
    /// The empty pattern is contained in every sequence.
    pub fn contains<P: Pattern<A::Monomer> + ?Sized>(&self, pattern: &P) -> bool {
        let members = pattern.members();
        if members.is_empty() {
            return true;
        }
        members.len() <= self.data.len()
            && self.data.windows(members.len()).any(|w| w == members)
    }

    /// Number of occurrences of `pattern`.
    ///
    /// Without `overlap` the scan resumes after the end of each match; with
    /// it the scan resumes one position after the match start. The empty
    /// pattern never counts.
    pub fn count<P: Pattern<A::Monomer> + ?Sized>(&self, pattern: &P, overlap: bool) -> usize {
        let members = pattern.members();
        let m = members.len();
        if m == 0 || m > self.data.len() {
            return 0;
        }

        let mut total = 0;
        let mut i = 0;
        while i + m <= self.data.len() {
            if self.data[i..i + m] == *members {
                total += 1;
                i += if overlap { 1 } else { m };
            } else {
                i += 1;
            }
        }
        total
    }

    /// Start index of the first occurrence of `pattern`.
    ///
    /// `None` when not found, when the pattern is empty, or when this
    /// sequence is empty.
    pub fn find<P: Pattern<A::Monomer> + ?Sized>(&self, pattern: &P) -> Option<usize> {
        let members = pattern.members();
        if members.is_empty() || members.len() > self.data.len() {
            return None;
        }
        self.data.windows(members.len()).position(|w| w == members)
    }

    /// Decode `codes` in this alphabet and append them.
    pub fn concat_str(&self, codes: &str) -> Result<Self> {
        Ok(self + &Self::new(codes)?)
    }

    /// Decode `codes` in this alphabet and put them in front.
    pub fn prepend_str(&self, codes: &str) -> Result<Self> {
        Ok(&Self::new(codes)? + self)
    }

    pub(crate) fn map_members<B, F>(&self, f: F) -> Seq<B>
    where
        B: Alphabet,
        F: FnMut(&A::Monomer) -> B::Monomer,
    {
        self.data.iter().map(f).collect()
    }

    fn render(&self, out: &mut impl fmt::Write, members: &[A::Monomer]) -> fmt::Result {
        members.iter().try_for_each(|m| out.write_char(m.code()))
    }
}

impl<A: Alphabet> Default for Seq<A> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<A: Alphabet> Clone for Seq<A> {
    fn clone(&self) -> Self {
        Self::from_members(self.data.clone())
    }
}

impl<A: Alphabet> Deref for Seq<A> {
    type Target = [A::Monomer];

    fn deref(&self) -> &[A::Monomer] {
        &self.data
    }
}

impl<A: Alphabet> AsRef<[A::Monomer]> for Seq<A> {
    fn as_ref(&self) -> &[A::Monomer] {
        &self.data
    }
}

impl<A: Alphabet> Pattern<A::Monomer> for Seq<A> {
    fn members(&self) -> &[A::Monomer] {
        &self.data
    }
}

impl<A: Alphabet> From<Vec<A::Monomer>> for Seq<A> {
    fn from(data: Vec<A::Monomer>) -> Self {
        Self::from_members(data)
    }
}

impl<A: Alphabet> From<&[A::Monomer]> for Seq<A> {
    fn from(data: &[A::Monomer]) -> Self {
        Self::from_members(data.to_vec())
    }
}

impl<A: Alphabet> FromIterator<A::Monomer> for Seq<A> {
    fn from_iter<I: IntoIterator<Item = A::Monomer>>(iter: I) -> Self {
        Self::from_members(iter.into_iter().collect())
    }
}

impl<A: Alphabet> std::str::FromStr for Seq<A> {
    type Err = HaemError;

    fn from_str(codes: &str) -> Result<Self> {
        Self::new(codes)
    }
}

impl<A: Alphabet> IntoIterator for Seq<A> {
    type Item = A::Monomer;
    type IntoIter = std::vec::IntoIter<A::Monomer>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, A: Alphabet> IntoIterator for &'a Seq<A> {
    type Item = &'a A::Monomer;
    type IntoIter = std::slice::Iter<'a, A::Monomer>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<A: Alphabet> Add<&Seq<A>> for &Seq<A> {
    type Output = Seq<A>;

    fn add(self, rhs: &Seq<A>) -> Seq<A> {
        Seq::from_members([self.data.as_slice(), rhs.data.as_slice()].concat())
    }
}

impl<A: Alphabet> Add<Seq<A>> for Seq<A> {
    type Output = Seq<A>;

    fn add(mut self, rhs: Seq<A>) -> Seq<A> {
        self.data.extend(rhs.data);
        self
    }
}

impl<A: Alphabet> PartialEq for Seq<A> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<A: Alphabet> Eq for Seq<A> {}

impl<A: Alphabet> Hash for Seq<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

impl<A: Alphabet> Unordered for Seq<A> {
    const TYPE_NAME: &'static str = A::SEQUENCE_NAME;
}

impl<A: Alphabet> Summarizable for Seq<A> {
    fn summary(&self) -> String {
        format!(
            "{} sequence ({} {}): {}",
            A::NAME,
            self.data.len(),
            A::UNIT,
            self
        )
    }
}

/// Full codes; sequences over 20 codes show the first 10, `...`, and the
/// last 9.
impl<A: Alphabet> fmt::Display for Seq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.data.len();
        if n <= DISPLAY_LIMIT {
            return self.render(f, &self.data);
        }
        self.render(f, &self.data[..DISPLAY_HEAD])?;
        f.write_str("...")?;
        self.render(f, &self.data[n - DISPLAY_TAIL..])
    }
}

/// `<TypeName: CODES>` with every code, or `<TypeName>` when empty.
impl<A: Alphabet> fmt::Debug for Seq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.is_empty() {
            return write!(f, "<{}>", A::SEQUENCE_NAME);
        }
        write!(f, "<{}: ", A::SEQUENCE_NAME)?;
        self.render(f, &self.data)?;
        f.write_str(">")
    }
}

#[cfg(feature = "serde")]
impl<A: Alphabet> serde::Serialize for Seq<A> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let codes: String = self.data.iter().map(|m| m.code()).collect();
        serializer.serialize_str(&codes)
    }
}

#[cfg(feature = "serde")]
impl<'de, A: Alphabet> serde::Deserialize<'de> for Seq<A> {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Concatenation and search impls tying a code type to its sequence type.
macro_rules! monomer_ops {
    ($monomer:ty, $alphabet:ty) => {
        impl ::std::ops::Add for $monomer {
            type Output = $crate::seq::Seq<$alphabet>;

            fn add(self, rhs: $monomer) -> Self::Output {
                $crate::seq::Seq::from(vec![self, rhs])
            }
        }

        impl ::std::ops::Add<&$crate::seq::Seq<$alphabet>> for $monomer {
            type Output = $crate::seq::Seq<$alphabet>;

            fn add(self, rhs: &$crate::seq::Seq<$alphabet>) -> Self::Output {
                ::std::iter::once(self).chain(rhs.iter().copied()).collect()
            }
        }

        impl ::std::ops::Add<$crate::seq::Seq<$alphabet>> for $monomer {
            type Output = $crate::seq::Seq<$alphabet>;

            fn add(self, rhs: $crate::seq::Seq<$alphabet>) -> Self::Output {
                self + &rhs
            }
        }

        impl ::std::ops::Add<$monomer> for &$crate::seq::Seq<$alphabet> {
            type Output = $crate::seq::Seq<$alphabet>;

            fn add(self, rhs: $monomer) -> Self::Output {
                self.iter().copied().chain(::std::iter::once(rhs)).collect()
            }
        }

        impl ::std::ops::Add<$monomer> for $crate::seq::Seq<$alphabet> {
            type Output = $crate::seq::Seq<$alphabet>;

            fn add(self, rhs: $monomer) -> Self::Output {
                &self + rhs
            }
        }

        impl $crate::seq::Pattern<$monomer> for $monomer {
            fn members(&self) -> &[$monomer] {
                ::std::slice::from_ref(self)
            }
        }
    };
}

pub(crate) use monomer_ops;

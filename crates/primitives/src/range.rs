/// A position in the text, measured in characters (not bytes).
///
/// Offsets sit between characters: 0 is before the first character and
/// `len_chars()` is after the last one.
pub type CharIdx = usize;

/// A length or count in the text, measured in characters (not bytes).
pub type CharLen = usize;

/// A half-open character range `[start, end)`.
///
/// `start <= end` always holds; there is no direction. Ranges are produced by
/// text object resolution and consumed by a single document edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
	start: CharIdx,
	end: CharIdx,
}

impl Range {
	/// Creates the range `[start, end)`.
	///
	/// # Panics
	///
	/// Panics if `start > end`.
	#[track_caller]
	pub fn new(start: CharIdx, end: CharIdx) -> Self {
		assert!(start <= end, "range start ({start}) is past its end ({end})");
		Self { start, end }
	}

	/// Creates the range `[start, end)`, or `None` if `start > end`.
	pub fn try_new(start: CharIdx, end: CharIdx) -> Option<Self> {
		(start <= end).then_some(Self { start, end })
	}

	/// Creates an empty range at `pos`.
	pub fn point(pos: CharIdx) -> Self {
		Self { start: pos, end: pos }
	}

	/// Returns the first offset covered by the range.
	#[inline]
	pub fn start(&self) -> CharIdx {
		self.start
	}

	/// Returns the offset one past the last covered character.
	#[inline]
	pub fn end(&self) -> CharIdx {
		self.end
	}

	/// Returns the number of characters in the range.
	#[inline]
	pub fn len(&self) -> CharLen {
		self.end - self.start
	}

	/// Returns true if the range covers no characters.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}

	/// Returns true if `pos` is covered by the range (exclusive of `end`).
	pub fn contains(&self, pos: CharIdx) -> bool {
		pos >= self.start && pos < self.end
	}

	/// Returns true if `other` lies entirely within this range.
	pub fn contains_range(&self, other: &Range) -> bool {
		other.start >= self.start && other.end <= self.end
	}

	/// Returns the range as a std half-open range, for rope slicing.
	pub fn as_std(&self) -> std::ops::Range<CharIdx> {
		self.start..self.end
	}
}

impl Default for Range {
	fn default() -> Self {
		Self::point(0)
	}
}

impl From<Range> for std::ops::Range<CharIdx> {
	fn from(range: Range) -> Self {
		range.as_std()
	}
}

impl std::fmt::Display for Range {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}, {})", self.start, self.end)
	}
}
